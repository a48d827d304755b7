// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame opportunities delivered by a backend.
//!
//! A [`FrameTick`] is produced each time the host can draw (for the web
//! backend, every `requestAnimationFrame` callback). Every time-dependent
//! state machine in this crate is driven by the tick's `now`, never by a
//! clock it reads itself, so unit tests can step time explicitly.

use crate::time::{Duration, HostTime};

/// A frame opportunity delivered by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Host time at which the frame callback fired.
    pub now: HostTime,
    /// Monotonically increasing frame counter, restarting at zero each time a
    /// loop is started.
    pub frame_index: u64,
}

impl FrameTick {
    /// Time elapsed since `previous`, or zero if the clock went backwards.
    #[inline]
    #[must_use]
    pub const fn since(&self, previous: &Self) -> Duration {
        self.now.saturating_duration_since(previous.now)
    }
}

/// The part of the page visible to the user.
///
/// Reveal triggers and particle bounds are both expressed in viewport
/// coordinates: the origin is the viewport's top-left corner and `y` grows
/// downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the viewport size as a [`kurbo::Size`].
    #[must_use]
    pub const fn size(&self) -> kurbo::Size {
        kurbo::Size::new(self.width, self.height)
    }

    /// The vertical position `fraction` of the way down the viewport.
    #[must_use]
    pub fn line_at(&self, fraction: f64) -> f64 {
        self.height * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_since_saturates() {
        let a = FrameTick {
            now: HostTime(10_000),
            frame_index: 0,
        };
        let b = FrameTick {
            now: HostTime(26_000),
            frame_index: 1,
        };
        assert_eq!(b.since(&a), Duration(16_000));
        assert_eq!(a.since(&b), Duration::ZERO);
    }

    #[test]
    fn viewport_line() {
        let vp = Viewport::new(1200.0, 800.0);
        assert_eq!(vp.line_at(0.85), 680.0);
        assert_eq!(vp.size(), kurbo::Size::new(1200.0, 800.0));
    }
}
