//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` owns the preloader-to-content handover
//! and delegates each section to `components`.

pub mod home;
