// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient "copied" acknowledgments for clipboard buttons.

use alloc::vec::Vec;

use crate::time::{Duration, HostTime};

/// How long a field shows its acknowledgment by default.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2_000);

/// Per-field acknowledgment deadlines.
///
/// Each field has its own deadline: acknowledging `"iban"` neither extends
/// nor cancels `"bizum"`.
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    interval: Duration,
    active: Vec<(&'static str, HostTime)>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl CopyFeedback {
    /// Creates feedback state where each acknowledgment lasts `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: Vec::new(),
        }
    }

    /// How long an acknowledgment lasts.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Marks `field` as copied at `now`, restarting its interval if it was
    /// already acknowledged. Returns the deadline.
    pub fn acknowledge(&mut self, field: &'static str, now: HostTime) -> HostTime {
        let deadline = now.saturating_add(self.interval);
        match self.active.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = deadline,
            None => self.active.push((field, deadline)),
        }
        deadline
    }

    /// Whether `field` is showing its acknowledgment at `now`.
    #[must_use]
    pub fn is_acknowledged(&self, field: &str, now: HostTime) -> bool {
        self.active
            .iter()
            .any(|&(f, deadline)| f == field && now < deadline)
    }

    /// Drops every acknowledgment whose deadline has passed and returns the
    /// fields that reverted.
    pub fn expire(&mut self, now: HostTime) -> Vec<&'static str> {
        let mut reverted = Vec::new();
        self.active.retain(|&(field, deadline)| {
            let live = now < deadline;
            if !live {
                reverted.push(field);
            }
            live
        });
        reverted
    }

    /// Earliest pending deadline, if any field is acknowledged.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.active.iter().map(|&(_, d)| d).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> HostTime {
        HostTime(v * 1000)
    }

    #[test]
    fn acknowledgment_reverts_after_interval() {
        let mut fb = CopyFeedback::default();
        assert_eq!(fb.acknowledge("iban", ms(100)), ms(2_100));
        assert!(fb.is_acknowledged("iban", ms(100)));
        assert!(fb.is_acknowledged("iban", ms(2_099)));
        assert!(!fb.is_acknowledged("iban", ms(2_100)));

        assert!(fb.expire(ms(2_000)).is_empty());
        assert_eq!(fb.expire(ms(2_100)), ["iban"]);
        assert_eq!(fb.next_deadline(), None);
    }

    #[test]
    fn fields_are_independent() {
        let mut fb = CopyFeedback::default();
        fb.acknowledge("iban", ms(0));
        assert!(!fb.is_acknowledged("bizum", ms(0)));

        fb.acknowledge("bizum", ms(1_500));
        assert_eq!(fb.expire(ms(2_000)), ["iban"]);
        assert!(!fb.is_acknowledged("iban", ms(2_000)));
        assert!(fb.is_acknowledged("bizum", ms(2_000)));
        assert_eq!(fb.next_deadline(), Some(ms(3_500)));
    }

    #[test]
    fn copying_again_restarts_the_interval() {
        let mut fb = CopyFeedback::new(Duration::from_millis(500));
        fb.acknowledge("iban", ms(0));
        fb.acknowledge("iban", ms(400));
        assert!(fb.expire(ms(600)).is_empty());
        assert!(fb.is_acknowledged("iban", ms(899)));
        assert_eq!(fb.expire(ms(900)), ["iban"]);
    }
}
