//! Preloader controller: a fixed, strictly sequential four-stage timeline.
//!
//! DESIGN
//! ======
//! `LogoIn → Progress → ChromeOut → SurfaceOut → Finished`, or `Cancelled`
//! from any non-terminal stage. The controller is driven by absolute elapsed
//! time (one call per animation frame) and reports what happened as
//! [`PreloaderEvent`]s; the component turns `Complete` into the caller's
//! callback. Because `Complete` is only produced on the single transition
//! into `Finished`, and `Cancelled` is terminal, the callback fires at most
//! once and never after teardown.
//!
//! The percentage readout tracks the linear time progress of the `Progress`
//! stage while the bar width follows the eased curve.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

use crate::util::easing::Ease;
use crate::util::timeline::{Position, Target, Timeline};
use crate::util::tween::{Style, Tween};

const LOGO: Target = 0;
const BAR_CONTAINER: Target = 1;
const PERCENTAGE: Target = 2;
const SURFACE: Target = 3;

/// Stage durations in ms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreloaderTiming {
    pub logo_in_ms: f64,
    pub progress_ms: f64,
    pub chrome_fade_ms: f64,
    pub chrome_stagger_ms: f64,
    pub surface_out_ms: f64,
}

impl Default for PreloaderTiming {
    fn default() -> Self {
        Self {
            logo_in_ms: 800.0,
            progress_ms: 2500.0,
            chrome_fade_ms: 500.0,
            chrome_stagger_ms: 100.0,
            surface_out_ms: 600.0,
        }
    }
}

impl PreloaderTiming {
    /// Length of `ChromeOut`: three staggered fades.
    #[must_use]
    pub fn chrome_out_ms(&self) -> f64 {
        self.chrome_fade_ms + 2.0 * self.chrome_stagger_ms
    }

    #[must_use]
    pub fn stage_ms(&self, stage: PreloaderStage) -> f64 {
        let ms = match stage {
            PreloaderStage::LogoIn => self.logo_in_ms,
            PreloaderStage::Progress => self.progress_ms,
            PreloaderStage::ChromeOut => self.chrome_out_ms(),
            PreloaderStage::SurfaceOut => self.surface_out_ms,
            PreloaderStage::Finished | PreloaderStage::Cancelled => 0.0,
        };
        ms.max(0.0)
    }

    /// Sum of all stage lengths.
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        PreloaderStage::SEQUENCE.iter().map(|s| self.stage_ms(*s)).sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderStage {
    #[default]
    LogoIn,
    Progress,
    ChromeOut,
    SurfaceOut,
    Finished,
    Cancelled,
}

impl PreloaderStage {
    /// The animated stages, in order.
    pub const SEQUENCE: [Self; 4] = [Self::LogoIn, Self::Progress, Self::ChromeOut, Self::SurfaceOut];

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::LogoIn => Some(Self::Progress),
            Self::Progress => Some(Self::ChromeOut),
            Self::ChromeOut => Some(Self::SurfaceOut),
            Self::SurfaceOut => Some(Self::Finished),
            Self::Finished | Self::Cancelled => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderEvent {
    StageEntered(PreloaderStage),
    Progress(u8),
    Complete,
}

/// Sampled styles for every preloader element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreloaderFrame {
    pub logo: Style,
    pub bar_container: Style,
    pub percentage: Style,
    pub surface: Style,
    /// Progress bar width in percent of its container.
    pub bar_width_pct: f64,
}

#[derive(Clone, Debug)]
pub struct Preloader {
    timing: PreloaderTiming,
    timeline: Timeline,
    stage: PreloaderStage,
    stage_started_ms: f64,
    elapsed_ms: f64,
    percentage: u8,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Preloader {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(PreloaderTiming::default())
    }

    #[must_use]
    pub fn with_timing(timing: PreloaderTiming) -> Self {
        Self {
            timing,
            timeline: build_timeline(&timing),
            stage: PreloaderStage::LogoIn,
            stage_started_ms: 0.0,
            elapsed_ms: 0.0,
            percentage: 0,
        }
    }

    #[must_use]
    pub fn stage(&self) -> PreloaderStage {
        self.stage
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stage == PreloaderStage::Finished
    }

    #[must_use]
    pub fn timing(&self) -> &PreloaderTiming {
        &self.timing
    }

    /// Move to `elapsed_ms` since the run began. Earlier times are ignored.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<PreloaderEvent> {
        let mut events = Vec::new();
        if self.stage.is_terminal() || elapsed_ms < self.elapsed_ms {
            return events;
        }
        self.elapsed_ms = elapsed_ms;

        loop {
            let stage_end = self.stage_started_ms + self.timing.stage_ms(self.stage);
            if self.stage == PreloaderStage::Progress {
                self.update_percentage(elapsed_ms.min(stage_end), &mut events);
            }
            if elapsed_ms < stage_end {
                break;
            }
            let Some(next) = self.stage.next() else {
                break;
            };
            self.stage = next;
            self.stage_started_ms = stage_end;
            if next == PreloaderStage::Finished {
                events.push(PreloaderEvent::Complete);
                break;
            }
            events.push(PreloaderEvent::StageEntered(next));
        }
        events
    }

    fn update_percentage(&mut self, at_ms: f64, events: &mut Vec<PreloaderEvent>) {
        let fraction = if self.timing.progress_ms <= 0.0 {
            1.0
        } else {
            ((at_ms - self.stage_started_ms) / self.timing.progress_ms).clamp(0.0, 1.0)
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (fraction * 100.0).round() as u8;
        if value > self.percentage {
            self.percentage = value;
            events.push(PreloaderEvent::Progress(value));
        }
    }

    /// Stop the run. Returns `false` if it had already finished or stopped.
    pub fn cancel(&mut self) -> bool {
        if self.stage.is_terminal() {
            return false;
        }
        self.stage = PreloaderStage::Cancelled;
        true
    }

    #[must_use]
    pub fn frame(&self) -> PreloaderFrame {
        let at = self.elapsed_ms;
        let sample = |target| self.timeline.sample_target(target, at).unwrap_or(Style::IDENTITY);
        let progress_start = self.timing.logo_in_ms;
        let linear = if self.timing.progress_ms <= 0.0 {
            if at >= progress_start { 1.0 } else { 0.0 }
        } else {
            ((at - progress_start) / self.timing.progress_ms).clamp(0.0, 1.0)
        };
        PreloaderFrame {
            logo: sample(LOGO),
            bar_container: sample(BAR_CONTAINER),
            percentage: sample(PERCENTAGE),
            surface: sample(SURFACE),
            bar_width_pct: Ease::Power2InOut.apply(linear) * 100.0,
        }
    }
}

fn build_timeline(timing: &PreloaderTiming) -> Timeline {
    let logo_in = Tween::new(Style::HIDDEN.scale(0.8).blur(10.0), Style::IDENTITY, timing.logo_in_ms, Ease::Power3Out);
    let chrome_out = Tween::new(Style::IDENTITY, Style::HIDDEN.y(-30.0), timing.chrome_fade_ms, Ease::Power2In);
    let surface_out = Tween::new(Style::IDENTITY, Style::HIDDEN.scale(0.95), timing.surface_out_ms, Ease::Power2InOut);

    let chrome_start = timing.stage_ms(PreloaderStage::LogoIn) + timing.stage_ms(PreloaderStage::Progress);
    let surface_start = chrome_start + timing.stage_ms(PreloaderStage::ChromeOut);

    Timeline::new()
        .add(LOGO, logo_in, Position::At(0.0))
        .add_staggered(
            &[LOGO, BAR_CONTAINER, PERCENTAGE],
            chrome_out,
            timing.chrome_stagger_ms,
            Position::At(chrome_start),
        )
        .add(SURFACE, surface_out, Position::At(surface_start))
}
