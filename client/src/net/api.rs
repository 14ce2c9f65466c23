//! REST helper for the contact relay endpoint.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since submission only
//! happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx, malformed body, `{ok:false}`) comes
//! back as `Err(String)` so the form can show one error toast and keep the
//! draft.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactMessage;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ContactResponse;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

/// Interpret the status and (optional) JSON body of a contact reply.
#[cfg(any(test, feature = "hydrate"))]
fn contact_result(status: u16, body: Option<ContactResponse>) -> Result<(), String> {
    if !(200..300).contains(&status) {
        return Err(body
            .and_then(|b| b.error)
            .unwrap_or_else(|| contact_failed_message(status)));
    }
    match body {
        Some(ContactResponse { ok: true, .. }) => Ok(()),
        Some(ContactResponse { error, .. }) => Err(error.unwrap_or_else(|| "message was not accepted".to_owned())),
        None => Err("malformed contact response".to_owned()),
    }
}

/// Send one contact message via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-2xx status, or the reply reports `ok: false`.
pub async fn send_contact_message(message: &ContactMessage) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(message)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.json::<ContactResponse>().await.ok();
        contact_result(status, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}
