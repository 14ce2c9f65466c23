//! Top-level page lifecycle: preloader first, then the site.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::util::easing::Ease;
use crate::util::tween::{Style, Tween};

/// Fade-in length of the main content once the preloader hands over.
pub const CONTENT_FADE_MS: f64 = 800.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Loading,
    Loaded,
}

impl PageState {
    /// Leave `Loading`. Returns `false` if already loaded.
    pub fn mark_loaded(&mut self) -> bool {
        if *self == Self::Loaded {
            return false;
        }
        *self = Self::Loaded;
        true
    }

    #[must_use]
    pub fn is_loaded(self) -> bool {
        self == Self::Loaded
    }
}

/// Opacity-only fade applied to the main content on mount.
#[must_use]
pub fn content_fade_in() -> Tween {
    Tween::new(Style::HIDDEN, Style::IDENTITY, CONTENT_FADE_MS, Ease::Power2Out)
}
