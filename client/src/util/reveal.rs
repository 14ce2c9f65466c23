//! Scroll-reveal triggers: a reversible `Hidden ⇄ Visible` machine per
//! registration plus the staggered playback it drives.
//!
//! DESIGN
//! ======
//! A trigger watches one anchor element against a horizontal threshold line
//! placed at `start × viewport height`. Crossing the line while scrolling
//! down plays the entrance; scrolling back up past the same line reverses
//! it. Repeated observations on the same side of the line are ignored, so
//! scroll jitter never re-fires an entrance.
//!
//! This module is DOM-free. `util::motion` feeds it observer readings and
//! writes the sampled styles back to elements.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeMap;

use super::easing::Ease;
use super::timeline::{Playhead, Position, Target, Timeline};
use super::tween::{Style, Tween};

/// How a group of elements enters when its anchor crosses the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub from: Style,
    pub to: Style,
    pub duration_ms: f64,
    pub ease: Ease,
    /// Delay between consecutive elements, in list order.
    pub stagger_ms: f64,
    /// Threshold line as a fraction of viewport height from the top.
    pub start: f64,
}

impl RevealSpec {
    #[must_use]
    pub fn new(from: Style, duration_ms: f64) -> Self {
        Self { from, to: Style::IDENTITY, duration_ms, ease: Ease::Power3Out, stagger_ms: 0.0, start: 0.8 }
    }

    /// Section heading: rise 50px out of a 10px blur.
    #[must_use]
    pub fn heading() -> Self {
        Self::new(Style::HIDDEN.y(50.0).blur(10.0), 1000.0)
    }

    #[must_use]
    pub fn to(mut self, to: Style) -> Self {
        self.to = to;
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    #[must_use]
    pub fn start(mut self, start: f64) -> Self {
        self.start = start.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn tween(&self) -> Tween {
        Tween::new(self.from, self.to, self.duration_ms, self.ease)
    }

    /// Staggered timeline over `count` elements.
    #[must_use]
    pub fn timeline(&self, count: usize) -> Timeline {
        let targets = (0..count).collect::<Vec<Target>>();
        Timeline::new().add_staggered(&targets, self.tween(), self.stagger_ms, Position::At(0.0))
    }

    /// Threshold line in px from the viewport top.
    #[must_use]
    pub fn threshold_px(&self, viewport_height: f64) -> f64 {
        viewport_height * self.start
    }
}

/// Observer root margin that shrinks the viewport bottom up to the threshold line.
#[must_use]
pub fn root_margin(start: f64) -> String {
    let shrink = ((1.0 - start.clamp(0.0, 1.0)) * 100.0).round();
    format!("0px 0px -{shrink}% 0px")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    Play,
    Reverse,
}

/// One registration: the state machine plus its playback.
#[derive(Clone, Debug)]
pub struct RevealTrigger {
    spec: RevealSpec,
    state: RevealState,
    timeline: Timeline,
    playhead: Playhead,
}

impl RevealTrigger {
    #[must_use]
    pub fn new(spec: RevealSpec, count: usize) -> Self {
        let timeline = spec.timeline(count);
        let playhead = Playhead::new(timeline.duration_ms());
        Self { spec, state: RevealState::Hidden, timeline, playhead }
    }

    #[must_use]
    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feed one reading of the anchor's top edge (viewport-relative px).
    pub fn observe(&mut self, element_top: f64, viewport_height: f64) -> Option<RevealTransition> {
        let past = element_top <= self.spec.threshold_px(viewport_height);
        let transition = match (self.state, past) {
            (RevealState::Hidden, true) => RevealTransition::Play,
            (RevealState::Visible, false) => RevealTransition::Reverse,
            _ => return None,
        };
        self.apply(transition);
        Some(transition)
    }

    fn apply(&mut self, transition: RevealTransition) {
        match transition {
            RevealTransition::Play => {
                self.state = RevealState::Visible;
                self.playhead.play();
            }
            RevealTransition::Reverse => {
                self.state = RevealState::Hidden;
                self.playhead.reverse();
            }
        }
    }

    /// Returns `true` while the playback is still moving.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.playhead.advance(dt_ms)
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        !self.playhead.is_settled()
    }

    #[must_use]
    pub fn styles(&self) -> Vec<(Target, Style)> {
        self.timeline.sample(self.playhead.position_ms())
    }
}

/// Opaque key for a registration inside a [`RevealSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerId(u64);

/// All triggers owned by one component.
#[derive(Debug, Default)]
pub struct RevealSet {
    next_id: u64,
    triggers: BTreeMap<TriggerId, RevealTrigger>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, trigger: RevealTrigger) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.insert(id, trigger);
        id
    }

    pub fn unregister(&mut self, id: TriggerId) -> bool {
        self.triggers.remove(&id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: TriggerId) -> Option<&RevealTrigger> {
        self.triggers.get(&id)
    }

    pub fn observe(&mut self, id: TriggerId, element_top: f64, viewport_height: f64) -> Option<RevealTransition> {
        self.triggers.get_mut(&id)?.observe(element_top, viewport_height)
    }

    /// Advance every moving playback. Returns the ids that moved.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<TriggerId> {
        let mut moved = Vec::new();
        for (id, trigger) in &mut self.triggers {
            if trigger.in_flight() {
                trigger.advance(dt_ms);
                moved.push(*id);
            }
        }
        moved
    }

    #[must_use]
    pub fn styles(&self, id: TriggerId) -> Vec<(Target, Style)> {
        self.triggers.get(&id).map(RevealTrigger::styles).unwrap_or_default()
    }

    /// Number of live registrations (one observer each).
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Number of playbacks still moving.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.triggers.values().filter(|t| t.in_flight()).count()
    }

    /// Drop every registration. Returns how many were released.
    pub fn release(&mut self) -> usize {
        let released = self.triggers.len();
        self.triggers.clear();
        released
    }
}
