// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal target identity.

use core::fmt;

/// A handle to a target in a [`RevealEngine`](super::RevealEngine).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a target is disposed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId {
    /// Slot index into the engine's arrays.
    pub(crate) idx: u32,
    /// Generation counter; must match the engine's generation for this slot.
    pub(crate) generation: u32,
}

impl RevealId {
    /// Returns the raw slot index (for presenters keyed by slot).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for RevealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RevealId({}@gen{})", self.idx, self.generation)
    }
}
