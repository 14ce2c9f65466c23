//! Toast notifications.
//!
//! `notify` queues a toast and schedules its dismissal; `ToastHost` renders
//! the queue from context.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DISMISS_MS;

/// Show a toast that dismisses itself after a few seconds.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: &str) -> u64 {
    let id = toasts
        .try_update(|t| t.push(kind, title, description))
        .unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    id
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let dismiss = move |_| {
                        toasts.update(|t| {
                            t.dismiss(id);
                        });
                    };
                    view! {
                        <div class=toast.kind.class()>
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button class="toast-close" aria-label="Dismiss" on:click=dismiss>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
