//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; the relay is behind an `Arc`.

use std::sync::Arc;

use leptos::prelude::LeptosOptions;

use crate::services::relay::ContactRelay;

#[derive(Clone)]
pub struct AppState {
    /// Where contact submissions go. `None` if no relay is configured.
    pub relay: Option<Arc<dyn ContactRelay>>,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn ContactRelay>>, leptos_options: LeptosOptions) -> Self {
        Self { relay, leptos_options }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` with default Leptos options and the given relay.
    #[must_use]
    pub fn test_app_state(relay: Option<Arc<dyn ContactRelay>>) -> AppState {
        AppState::new(relay, LeptosOptions::builder().output_name("portfolio").build())
    }
}
