// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative reveal configuration.

use kurbo::Vec2;

use crate::easing::Easing;
use crate::time::Duration;
use crate::{Error, Result};

/// Fraction of the viewport height, measured from the top, that a target's
/// top edge must reach for its reveal to start.
pub const TRIGGER_LINE: f64 = 0.85;

/// The direction a target travels while it is revealed.
///
/// `Up` means the element starts below its resting place and rises into it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rise from below.
    #[default]
    Up,
    /// Drop from above.
    Down,
    /// Slide in from the right, travelling left.
    Left,
    /// Slide in from the left, travelling right.
    Right,
    /// Fade only.
    None,
}

impl Direction {
    /// The offset a target starts at, `distance` pixels away from rest.
    #[must_use]
    pub const fn initial_offset(self, distance: f64) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, distance),
            Self::Down => Vec2::new(0.0, -distance),
            Self::Left => Vec2::new(distance, 0.0),
            Self::Right => Vec2::new(-distance, 0.0),
            Self::None => Vec2::ZERO,
        }
    }
}

/// How a single target is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Travel direction.
    pub direction: Direction,
    /// Travel distance in CSS pixels.
    pub distance: f64,
    /// Interpolation length.
    pub duration: Duration,
    /// Wait between crossing the trigger line and starting to move.
    pub delay: Duration,
    /// Interpolation curve.
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            distance: 30.0,
            duration: Duration::from_millis(800),
            delay: Duration::ZERO,
            easing: Easing::Power2Out,
        }
    }
}

impl RevealConfig {
    /// Returns a copy travelling in `direction`.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns a copy travelling `distance` pixels.
    #[must_use]
    pub const fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Returns a copy lasting `seconds`.
    #[must_use]
    pub fn with_duration_secs(mut self, seconds: f64) -> Self {
        self.duration = Duration::from_secs_f64(seconds);
        self
    }

    /// Returns a copy delayed by `ms` milliseconds.
    #[must_use]
    pub const fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    /// Returns a copy using `easing`.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Checks that distance and duration are positive and finite.
    pub fn validated(self) -> Result<Self> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(Error::InvalidRevealConfig("distance must be positive"));
        }
        if self.duration.is_zero() {
            return Err(Error::InvalidRevealConfig("duration must be positive"));
        }
        Ok(self)
    }

    /// The offset this target starts at.
    #[must_use]
    pub const fn initial_offset(&self) -> Vec2 {
        self.direction.initial_offset(self.distance)
    }
}

/// Per-child incremental delay for a group of otherwise identical reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Stagger {
    /// Delay added per child index.
    pub interval: Duration,
}

impl Stagger {
    /// A stagger of `ms` milliseconds per child.
    #[must_use]
    pub const fn millis(ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(ms),
        }
    }

    /// Delay for child `index`: `base + index × interval`.
    #[must_use]
    pub const fn delay_for(&self, base: Duration, index: usize) -> Duration {
        base.saturating_add(self.interval.saturating_mul(index as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_offsets_follow_travel() {
        assert_eq!(Direction::Up.initial_offset(30.0), Vec2::new(0.0, 30.0));
        assert_eq!(Direction::Down.initial_offset(30.0), Vec2::new(0.0, -30.0));
        assert_eq!(Direction::Left.initial_offset(10.0), Vec2::new(10.0, 0.0));
        assert_eq!(Direction::Right.initial_offset(10.0), Vec2::new(-10.0, 0.0));
        assert_eq!(Direction::None.initial_offset(99.0), Vec2::ZERO);
    }

    #[test]
    fn defaults_match_site() {
        let cfg = RevealConfig::default();
        assert_eq!(cfg.distance, 30.0);
        assert_eq!(cfg.duration, Duration::from_millis(800));
        assert_eq!(cfg.delay, Duration::ZERO);
        assert_eq!(cfg.direction, Direction::Up);
        assert!(cfg.validated().is_ok());
    }

    #[test]
    fn validation_rejects_bad_values() {
        let zero_distance = RevealConfig::default().with_distance(0.0);
        assert_eq!(
            zero_distance.validated(),
            Err(Error::InvalidRevealConfig("distance must be positive"))
        );
        let nan = RevealConfig::default().with_distance(f64::NAN);
        assert!(nan.validated().is_err());
        let instant = RevealConfig::default().with_duration_secs(0.0);
        assert_eq!(
            instant.validated(),
            Err(Error::InvalidRevealConfig("duration must be positive"))
        );
    }

    #[test]
    fn stagger_delays_accumulate() {
        let s = Stagger::millis(150);
        let base = Duration::from_millis(50);
        assert_eq!(s.delay_for(base, 0), Duration::from_millis(50));
        assert_eq!(s.delay_for(base, 1), Duration::from_millis(200));
        assert_eq!(s.delay_for(base, 3), Duration::from_millis(500));
    }
}
