//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each model is plain data with pure transitions so it can be unit tested
//! without a browser; components hold them in signals.

pub mod contact;
pub mod page;
pub mod preloader;
pub mod toast;
