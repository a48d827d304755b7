// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header condensation on scroll.

/// Scroll offset past which the header switches to its condensed style.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Whether the header is transparent (at the top of the page) or condensed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderState {
    threshold: f64,
    condensed: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }
}

impl HeaderState {
    /// A transparent header that condenses once the page scrolls strictly
    /// past `threshold` pixels.
    #[must_use]
    pub const fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            condensed: false,
        }
    }

    /// Whether the condensed style applies.
    #[must_use]
    pub const fn is_condensed(&self) -> bool {
        self.condensed
    }

    /// Feeds a scroll offset. Returns `true` if the style switched.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let condensed = scroll_y > self.threshold;
        let changed = condensed != self.condensed;
        self.condensed = condensed;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condenses_strictly_past_threshold() {
        let mut header = HeaderState::default();
        assert!(!header.update(50.0));
        assert!(!header.is_condensed());
        assert!(header.update(50.5));
        assert!(header.is_condensed());
        assert!(!header.update(400.0), "no change while staying condensed");
        assert!(header.update(0.0));
        assert!(!header.is_condensed());
    }
}
