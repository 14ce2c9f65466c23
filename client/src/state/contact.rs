//! Contact form model: draft, validation, and one-shot submission.
//!
//! DESIGN
//! ======
//! The draft is plain data mutated per keystroke. `begin_submit` validates
//! and flips the form into its submitting state, `deliver` performs exactly
//! one outbound call, and `finish` applies the outcome: success clears the
//! draft, failure keeps it so the visitor can retry by hand.
//!
//! Validation is shared with the server route so both sides reject the same
//! payloads.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;

use crate::net::types::ContactMessage;

pub const SENT_TITLE: &str = "Message sent! ✨";
pub const SENT_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon!";
pub const FAILED_TITLE: &str = "Message not sent";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Check every field and build the outbound payload.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's error.
    pub fn validate(&self) -> Result<ContactMessage, ContactFormError> {
        validate_message(&self.name, &self.email, &self.message)
    }
}

/// Reasons a submission never leaves the page. `Display` is user-facing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
    #[error("Your message is already on its way.")]
    AlreadySubmitting,
}

/// Validate raw field values; the payload keeps them exactly as typed.
///
/// # Errors
///
/// Returns the first missing or malformed field.
pub fn validate_message(name: &str, email: &str, message: &str) -> Result<ContactMessage, ContactFormError> {
    if name.trim().is_empty() {
        return Err(ContactFormError::MissingName);
    }
    if email.trim().is_empty() {
        return Err(ContactFormError::MissingEmail);
    }
    if !is_email_shaped(email.trim()) {
        return Err(ContactFormError::InvalidEmail);
    }
    if message.trim().is_empty() {
        return Err(ContactFormError::MissingMessage);
    }
    Ok(ContactMessage { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

/// `local@domain` with no whitespace and a single `@`.
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(String),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Toast title and description for this outcome.
    #[must_use]
    pub fn toast_text(&self) -> (&'static str, String) {
        match self {
            Self::Sent => (SENT_TITLE, SENT_DESCRIPTION.to_owned()),
            Self::Failed(reason) => (FAILED_TITLE, format!("Something went wrong: {reason}. Please try again.")),
        }
    }
}

/// Form state held in a signal by the contact section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub submitting: bool,
}

impl ContactForm {
    /// Validate and enter the submitting state.
    ///
    /// # Errors
    ///
    /// `AlreadySubmitting` while a call is in flight, or a validation error.
    /// The form is unchanged on error.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactFormError> {
        if self.submitting {
            return Err(ContactFormError::AlreadySubmitting);
        }
        let message = self.draft.validate()?;
        self.submitting = true;
        Ok(message)
    }

    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        if outcome.is_sent() {
            self.draft.clear();
        }
    }
}

/// Perform the outbound call exactly once and fold its result.
pub async fn deliver<F, Fut>(message: ContactMessage, send: F) -> SubmitOutcome
where
    F: FnOnce(ContactMessage) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    match send(message).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(reason) => {
            log::warn!("contact submission failed: {reason}");
            SubmitOutcome::Failed(reason)
        }
    }
}
