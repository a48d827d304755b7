// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! The state machines in this crate never touch a page. Each host backend
//! provides the following pieces:
//!
//! - **Tick source**: Produces [`FrameTick`] values via a host mechanism
//!   (e.g. `requestAnimationFrame`). Not abstracted by a trait because setup
//!   and lifecycle are host-specific.
//!
//! - **Probe**: Implements [`RevealProbe`] so the reveal engine can ask
//!   where a target's top edge currently is, and whether it still exists.
//!
//! - **Presenters**: Implement [`RevealPresenter`] and [`ParticleCanvas`] to
//!   turn evaluated state into visible output.
//!
//! - **Scroll surface**: Implements [`ScrollSurface`], the one side-effecting
//!   adapter the [`OverlayCoordinator`](crate::overlay::OverlayCoordinator)
//!   calls to freeze and restore page scrolling.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_frame(tick: FrameTick) {
//!     let changes = reveals.evaluate(tick.now, viewport, &mut probe);
//!     presenter.apply(&changes);
//!
//!     particles.step();
//!     canvas.clear();
//!     for glow in particles.glows() {
//!         canvas.draw_glow(&glow);
//!     }
//!
//!     overlays.on_frame(tick.now);
//! }
//! ```
//!
//! [`FrameTick`]: crate::timing::FrameTick

use alloc::vec::Vec;

use crate::particles::Glow;
use crate::reveal::{RevealChanges, RevealId};

/// Locates reveal targets in viewport coordinates.
///
/// Implemented for any `FnMut(RevealId) -> Option<f64>`.
pub trait RevealProbe {
    /// The target's top edge relative to the viewport top, in CSS pixels, or
    /// `None` if its backing region no longer exists.
    fn top_edge(&mut self, id: RevealId) -> Option<f64>;
}

impl<F> RevealProbe for F
where
    F: FnMut(RevealId) -> Option<f64>,
{
    fn top_edge(&mut self, id: RevealId) -> Option<f64> {
        self(id)
    }
}

/// Applies evaluated reveal styles to host elements.
pub trait RevealPresenter {
    /// Applies the given [`RevealChanges`].
    fn apply(&mut self, changes: &RevealChanges);
}

/// Draws particle glows onto a host surface.
pub trait ParticleCanvas {
    /// Clears the whole surface before a new frame is drawn.
    fn clear(&mut self);

    /// Draws one soft radial glow.
    fn draw_glow(&mut self, glow: &Glow);
}

/// The page's scroll position and its lock styling.
///
/// Only the overlay coordinator calls the mutating methods; surfaces that
/// need the page frozen go through it instead of styling the page directly.
pub trait ScrollSurface {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> i32;

    /// Freezes the page at `scroll_y` without a visible content jump.
    fn lock(&mut self, scroll_y: i32);

    /// Removes the lock styling and scrolls back to `restore_y`.
    fn unlock(&mut self, restore_y: i32);
}

/// A call observed by [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceCall {
    /// [`ScrollSurface::lock`] with the captured offset.
    Lock(i32),
    /// [`ScrollSurface::unlock`] with the restore offset.
    Unlock(i32),
}

/// An in-memory [`ScrollSurface`] that records every lock and unlock.
///
/// Scrolling is simulated: `scroll_to` moves the page only while unlocked,
/// and `unlock` jumps back to the restore offset.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    scroll_y: i32,
    locked: bool,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Creates an unlocked surface at `scroll_y`.
    #[must_use]
    pub fn at(scroll_y: i32) -> Self {
        Self {
            scroll_y,
            ..Self::default()
        }
    }

    /// Simulates the user scrolling. Ignored while locked.
    pub fn scroll_to(&mut self, scroll_y: i32) {
        if !self.locked {
            self.scroll_y = scroll_y;
        }
    }

    /// Whether lock styling is currently applied.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Every call in order.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Number of `lock` calls.
    #[must_use]
    pub fn lock_count(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Lock(_)))
    }

    /// Number of `unlock` calls.
    #[must_use]
    pub fn unlock_count(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Unlock(_)))
    }

    fn count(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    fn lock(&mut self, scroll_y: i32) {
        self.locked = true;
        self.calls.push(SurfaceCall::Lock(scroll_y));
    }

    fn unlock(&mut self, restore_y: i32) {
        self.locked = false;
        self.scroll_y = restore_y;
        self.calls.push(SurfaceCall::Unlock(restore_y));
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn scroll_y(&self) -> i32 {
        (**self).scroll_y()
    }

    fn lock(&mut self, scroll_y: i32) {
        (**self).lock(scroll_y);
    }

    fn unlock(&mut self, restore_y: i32) {
        (**self).unlock(restore_y);
    }
}
