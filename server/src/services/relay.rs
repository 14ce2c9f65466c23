//! Contact relays: where a validated contact message is forwarded.
//!
//! `FunctionRelay` posts the JSON payload to a hosted function (the
//! default deployment); `ResendRelay` emails it directly. Both are used
//! through the [`ContactRelay`] trait so routes can be tested with a mock.

use std::sync::Arc;

use async_trait::async_trait;
use html_escape::encode_safe;
use portfolio::net::types::ContactMessage;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::{RelayConfig, RelayTimeouts};

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("relay request failed: {0}")]
    Request(String),
    #[error("relay responded with status {status}")]
    Status { status: u16, body: String },
    #[error("relay rejected the message: {0}")]
    Rejected(String),
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Forwards one contact message. Implementations make exactly one upstream
/// attempt per call.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Build the relay described by `config`, or `None` when disabled.
///
/// # Errors
///
/// Returns [`RelayError::HttpClientBuild`] if the HTTP client cannot be built.
pub fn build_relay(config: &RelayConfig) -> Result<Option<Arc<dyn ContactRelay>>, RelayError> {
    Ok(match config {
        RelayConfig::Function { url, key, timeouts } => {
            Some(Arc::new(FunctionRelay::new(url.clone(), key.clone(), *timeouts)?))
        }
        RelayConfig::Resend { api_key, from, to } => {
            Some(Arc::new(ResendRelay::new(api_key.clone(), from.clone(), to.clone())))
        }
        RelayConfig::Disabled => None,
    })
}

// =============================================================================
// FUNCTION RELAY
// =============================================================================

pub struct FunctionRelay {
    http: reqwest::Client,
    url: String,
    key: Option<String>,
}

impl FunctionRelay {
    /// # Errors
    ///
    /// Returns [`RelayError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(url: String, key: Option<String>, timeouts: RelayTimeouts) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url, key })
    }
}

#[async_trait]
impl ContactRelay for FunctionRelay {
    fn name(&self) -> &'static str {
        "function"
    }

    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let mut request = self.http.post(&self.url).json(message);
        if let Some(key) = &self.key {
            request = request.bearer_auth(key);
        }
        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        interpret_function_response(status, &text)
    }
}

/// Decide whether a hosted-function reply means the message went out.
///
/// Non-2xx is a failure. A 2xx body that is JSON with a non-null `error`
/// field is a failure too; any other 2xx body (including empty or
/// non-JSON) counts as delivered.
pub fn interpret_function_response(status: u16, body: &str) -> Result<(), RelayError> {
    if !(200..300).contains(&status) {
        return Err(RelayError::Status { status, body: body.to_owned() });
    }
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Ok(());
    };
    match value.get("error") {
        None | Some(serde_json::Value::Null) => Ok(()),
        Some(serde_json::Value::String(reason)) => Err(RelayError::Rejected(reason.clone())),
        Some(serde_json::Value::Object(obj)) => {
            let reason = obj
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| serde_json::Value::Object(obj.clone()).to_string(), str::to_owned);
            Err(RelayError::Rejected(reason))
        }
        Some(other) => Err(RelayError::Rejected(other.to_string())),
    }
}

// =============================================================================
// RESEND RELAY
// =============================================================================

pub struct ResendRelay {
    api_key: String,
    from: String,
    to: String,
}

impl ResendRelay {
    #[must_use]
    pub fn new(api_key: String, from: String, to: String) -> Self {
        Self { api_key, from, to }
    }
}

#[async_trait]
impl ContactRelay for ResendRelay {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let resend = Resend::new(&self.api_key);
        let to = [self.to.as_str()];
        let subject = contact_email_subject(message);
        let html = render_contact_email(message);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        resend
            .emails
            .send(email)
            .await
            .map_err(|e| RelayError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn contact_email_subject(message: &ContactMessage) -> String {
    format!("New portfolio message from {}", message.name.trim())
}

#[must_use]
pub fn render_contact_email(message: &ContactMessage) -> String {
    let body = encode_safe(message.message.trim()).replace('\n', "<br>");
    CONTACT_EMAIL_TEMPLATE
        .replace("{{NAME}}", &encode_safe(message.name.trim()))
        .replace("{{EMAIL}}", &encode_safe(message.email.trim()))
        .replace("{{MESSAGE}}", &body)
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
