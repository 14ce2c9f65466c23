//! Declarative entrance timelines and the playhead that drives them.
//!
//! DESIGN
//! ======
//! A [`Timeline`] is an ordered list of tracks, each binding one [`Tween`] to
//! a target index at an absolute start time. Builders resolve relative
//! positions (`Relative(-300.0)` overlaps the previous step by 300 ms) and
//! staggers at construction, so sampling is a pure function of the playhead.
//!
//! Targets are plain indices; the caller owns the mapping to DOM elements.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use super::tween::{Style, Tween};

/// Index of an animated element within the caller's target list.
pub type Target = usize;

/// Where a new step starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the end of everything added so far.
    End,
    /// At an absolute time in ms.
    At(f64),
    /// Offset from the end of everything added so far; negative overlaps.
    Relative(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub target: Target,
    pub start_ms: f64,
    pub tween: Tween,
}

impl Track {
    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.tween.duration_ms
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one tween for one target.
    #[must_use]
    pub fn add(self, target: Target, tween: Tween, position: Position) -> Self {
        self.add_staggered(&[target], tween, 0.0, position)
    }

    /// Add the same tween for several targets, each starting `stagger_ms`
    /// after the previous one, in list order.
    #[must_use]
    pub fn add_staggered(mut self, targets: &[Target], tween: Tween, stagger_ms: f64, position: Position) -> Self {
        let base = self.resolve(position);
        let stagger_ms = stagger_ms.max(0.0);
        for (i, &target) in targets.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let start_ms = base + stagger_ms * i as f64;
            self.tracks.push(Track { target, start_ms, tween });
        }
        self
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::End => self.duration_ms(),
            Position::At(ms) => ms.max(0.0),
            Position::Relative(offset) => (self.duration_ms() + offset).max(0.0),
        }
    }

    /// Total length: the latest end time across all tracks.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.tracks.iter().map(Track::end_ms).fold(0.0, f64::max)
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Distinct targets in ascending order.
    #[must_use]
    pub fn targets(&self) -> Vec<Target> {
        let mut targets = self.tracks.iter().map(|t| t.target).collect::<Vec<_>>();
        targets.sort_unstable();
        targets.dedup();
        targets
    }

    /// Style of every target at `playhead_ms`.
    ///
    /// For each target the latest-starting track that has begun wins; a
    /// target whose first track has not begun shows that track's from-state.
    #[must_use]
    pub fn sample(&self, playhead_ms: f64) -> Vec<(Target, Style)> {
        self.targets()
            .into_iter()
            .filter_map(|target| self.sample_target(target, playhead_ms).map(|style| (target, style)))
            .collect()
    }

    #[must_use]
    pub fn sample_target(&self, target: Target, playhead_ms: f64) -> Option<Style> {
        let mut first: Option<&Track> = None;
        let mut active: Option<&Track> = None;
        for track in self.tracks.iter().filter(|t| t.target == target) {
            if first.is_none_or(|f| track.start_ms < f.start_ms) {
                first = Some(track);
            }
            if track.start_ms <= playhead_ms && active.is_none_or(|a| track.start_ms >= a.start_ms) {
                active = Some(track);
            }
        }
        match (active, first) {
            (Some(track), _) => Some(track.tween.sample(playhead_ms - track.start_ms)),
            (None, Some(track)) => Some(track.tween.from),
            (None, None) => None,
        }
    }
}

// =============================================================================
// PLAYHEAD
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Paused,
    Forward,
    Backward,
}

/// Position within a timeline plus the direction it is travelling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playhead {
    position_ms: f64,
    duration_ms: f64,
    direction: Direction,
}

impl Playhead {
    #[must_use]
    pub fn new(duration_ms: f64) -> Self {
        Self { position_ms: 0.0, duration_ms: duration_ms.max(0.0), direction: Direction::Paused }
    }

    #[must_use]
    pub fn position_ms(&self) -> f64 {
        self.position_ms
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Run toward the end from wherever the playhead is.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
    }

    /// Run back toward the start from wherever the playhead is.
    pub fn reverse(&mut self) {
        self.direction = Direction::Backward;
    }

    /// Move by `dt_ms` in the current direction. Returns `true` while the
    /// playhead still has somewhere to go.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let dt_ms = dt_ms.max(0.0);
        match self.direction {
            Direction::Paused => return false,
            Direction::Forward => self.position_ms = (self.position_ms + dt_ms).min(self.duration_ms),
            Direction::Backward => self.position_ms = (self.position_ms - dt_ms).max(0.0),
        }
        if self.is_settled() {
            self.direction = Direction::Paused;
            return false;
        }
        true
    }

    /// `true` when paused or resting at the end it was heading for.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        match self.direction {
            Direction::Paused => true,
            Direction::Forward => self.position_ms >= self.duration_ms,
            Direction::Backward => self.position_ms <= 0.0,
        }
    }
}
