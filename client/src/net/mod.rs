//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON shared with the server's `/api/contact` route;
//! `api` performs the browser-side call.

pub mod api;
pub mod types;
