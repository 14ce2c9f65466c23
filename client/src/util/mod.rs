//! Animation model and browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `easing`, `tween`, `timeline`, and `reveal` are pure and unit tested;
//! `motion` binds them to the DOM (hydrate only) and `scroll` isolates the
//! window scroll APIs.

pub mod easing;
#[cfg(feature = "hydrate")]
pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod timeline;
pub mod tween;
