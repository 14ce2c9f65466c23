//! Visual style states and single-property-set tweens between them.
//!
//! A [`Style`] is the full set of properties an entrance animation touches.
//! Values are concrete (no "current value" lookups) so any tween can be
//! sampled without reading the DOM.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use super::easing::Ease;

/// Animated visual properties of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub opacity: f64,
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate: f64,
    /// Gaussian blur radius in px.
    pub blur: f64,
}

impl Style {
    /// Fully visible, untransformed.
    pub const IDENTITY: Self = Self { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, rotate: 0.0, blur: 0.0 };

    /// Fully transparent, untransformed.
    pub const HIDDEN: Self = Self { opacity: 0.0, ..Self::IDENTITY };

    #[must_use]
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    #[must_use]
    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    #[must_use]
    pub fn blur(mut self, blur: f64) -> Self {
        self.blur = blur;
        self
    }

    /// Linear interpolation; `t` is not clamped so overshooting eases carry through.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Self {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
            blur: mix(self.blur, to.blur).max(0.0),
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4}) rotate({:.2}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }

    /// CSS `filter` value.
    #[must_use]
    pub fn filter(&self) -> String {
        format!("blur({:.2}px)", self.blur)
    }

    /// Inline style declarations for reactive `style=` bindings.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("opacity: {:.4}; transform: {}; filter: {};", self.opacity, self.transform(), self.filter())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A timed transition from one style to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Style,
    pub to: Style,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl Tween {
    #[must_use]
    pub fn new(from: Style, to: Style, duration_ms: f64, ease: Ease) -> Self {
        Self { from, to, duration_ms: duration_ms.max(0.0), ease }
    }

    /// Linear progress in `[0, 1]` at `local_ms` since the tween started.
    #[must_use]
    pub fn progress(&self, local_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return if local_ms >= 0.0 { 1.0 } else { 0.0 };
        }
        (local_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn sample(&self, local_ms: f64) -> Style {
        let eased = self.ease.apply(self.progress(local_ms));
        self.from.lerp(&self.to, eased)
    }
}
