//! Page sections and shared UI pieces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section renders static content from `content` and, in the browser,
//! registers its own entrance and scroll-reveal animations on mount.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

pub mod about;
pub mod achievements;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod preloader;
pub mod projects;
pub mod toast;
