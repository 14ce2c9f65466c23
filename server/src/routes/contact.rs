//! Contact route: validate the payload and hand it to the relay once.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use portfolio::net::types::{ContactMessage, ContactResponse};
use portfolio::state::contact::{ContactFormError, validate_message};

use crate::services::relay::RelayError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ContactFormError),
    #[error("contact form is not available right now")]
    Unavailable,
    #[error("message could not be delivered")]
    Relay(#[from] RelayError),
}

#[must_use]
pub fn status_for(err: &ContactError) -> StatusCode {
    match err {
        ContactError::Invalid(_) => StatusCode::BAD_REQUEST,
        ContactError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ContactError::Relay(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/contact`: forward `{name, email, message}` to the relay.
pub async fn send_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactMessage>,
) -> (StatusCode, Json<ContactResponse>) {
    match forward(&state, body).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::sent())),
        Err(err) => (status_for(&err), Json(ContactResponse::failed(err.to_string()))),
    }
}

async fn forward(state: &AppState, body: ContactMessage) -> Result<(), ContactError> {
    let message = validate_message(&body.name, &body.email, &body.message)?;
    let Some(relay) = &state.relay else {
        tracing::warn!("contact submission rejected: no relay configured");
        return Err(ContactError::Unavailable);
    };

    match relay.send(&message).await {
        Ok(()) => {
            tracing::info!(relay = relay.name(), "contact message relayed");
            Ok(())
        }
        Err(e) => {
            let status = match &e {
                RelayError::Status { status, .. } => Some(*status),
                _ => None,
            };
            tracing::error!(relay = relay.name(), status, error = %e, "contact relay failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
