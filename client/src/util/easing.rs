//! Easing curves for entrance animations.
//!
//! Curves follow the usual "power" family: `Power1` is quadratic, `Power2`
//! cubic, `Power3` quartic. Every curve maps `0.0 -> 0.0` and `1.0 -> 1.0`;
//! `BackOut` overshoots above `1.0` in between.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Overshoot used by the skill, CTA, and social-icon pops.
pub const BACK_OVERSHOOT: f64 = 1.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3Out,
    /// Back-out with the given overshoot amount.
    BackOut(f64),
}

impl Ease {
    /// Map linear progress `t` to eased progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power2In => t.powi(3),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }

    #[must_use]
    pub fn back_out() -> Self {
        Self::BackOut(BACK_OVERSHOOT)
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power3Out
    }
}
