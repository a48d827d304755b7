// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay lifecycles and the shared page scroll lock.
//!
//! Two full-screen surfaces exist on the page: the slide-in navigation
//! [`Panel`](OverlayKind::Panel) and the donation
//! [`Dialog`](OverlayKind::Dialog). Each moves through
//! `Closed → Opening → Open → Closing → Closed`, and every surface that is not
//! `Closed` holds one [`OverlaySession`] on the coordinator's stack.
//!
//! The page is locked iff the stack is non-empty. The lock is reference
//! counted: the first session captures the scroll offset, later sessions
//! only bump the depth, and the session that empties the stack restores the
//! offset captured by the first one, whichever order they close in.
//!
//! ```
//! use vesper_core::backend::{RecordingSurface, SurfaceCall};
//! use vesper_core::overlay::{OverlayCoordinator, OverlayKind, OverlayTransitions};
//! use vesper_core::time::HostTime;
//!
//! let mut page = RecordingSurface::at(120);
//! let mut overlays = OverlayCoordinator::new(&mut page, OverlayTransitions::INSTANT);
//! let now = HostTime(0);
//!
//! overlays.open(OverlayKind::Panel, now);
//! overlays.open(OverlayKind::Dialog, now);
//! overlays.close(OverlayKind::Dialog, now);
//! overlays.close(OverlayKind::Panel, now);
//! drop(overlays);
//!
//! assert_eq!(page.calls(), [SurfaceCall::Lock(120), SurfaceCall::Unlock(120)]);
//! ```

use alloc::vec::Vec;

use crate::backend::ScrollSurface;
use crate::time::{Duration, HostTime};

/// Which surface an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// The slide-in navigation panel.
    Panel,
    /// The modal donation dialog.
    Dialog,
}

impl OverlayKind {
    /// Every kind, in slot order.
    pub const ALL: [Self; 2] = [Self::Panel, Self::Dialog];

    const fn slot(self) -> usize {
        match self {
            Self::Panel => 0,
            Self::Dialog => 1,
        }
    }
}

/// Lifecycle phase of one surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayPhase {
    /// Hidden; holds no session.
    Closed,
    /// Fading in until `until`.
    Opening {
        /// When the surface becomes `Open`.
        until: HostTime,
    },
    /// Fully shown.
    Open,
    /// Fading out until `until`; still holds its session.
    Closing {
        /// When the surface becomes `Closed`.
        until: HostTime,
    },
}

impl OverlayPhase {
    /// Returns `true` for `Opening` or `Open`.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Opening { .. } | Self::Open)
    }

    /// Returns `true` while a timed transition is running.
    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Opening { .. } | Self::Closing { .. })
    }
}

/// One open surface on the coordinator's stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlaySession {
    /// The surface this session belongs to.
    pub kind: OverlayKind,
    /// Monotonic open counter.
    pub opened_at: u64,
    /// Page scroll offset when this session opened.
    pub scroll_y_at_open: i32,
}

/// Per-kind open/close transition lengths. Zero is instantaneous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayTransitions {
    /// Navigation panel fade.
    pub panel: Duration,
    /// Dialog fade.
    pub dialog: Duration,
}

impl OverlayTransitions {
    /// Every transition is instantaneous.
    pub const INSTANT: Self = Self {
        panel: Duration::ZERO,
        dialog: Duration::ZERO,
    };

    /// The site's timings: a 150 ms panel fade and an instant dialog.
    pub const SITE: Self = Self {
        panel: Duration::from_millis(150),
        dialog: Duration::ZERO,
    };

    /// Transition length for `kind`.
    #[must_use]
    pub const fn for_kind(&self, kind: OverlayKind) -> Duration {
        match kind {
            OverlayKind::Panel => self.panel,
            OverlayKind::Dialog => self.dialog,
        }
    }
}

impl Default for OverlayTransitions {
    fn default() -> Self {
        Self::SITE
    }
}

/// Where a click on the dialog landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content.
    Backdrop,
    /// Inside the content box.
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScrollLock {
    depth: u32,
    saved_y: i32,
}

/// Owns the overlay phases and the page scroll lock.
///
/// All side effects go through the [`ScrollSurface`]. Dropping the
/// coordinator calls [`teardown`](Self::teardown), so a page can never stay
/// locked after its owner is gone.
#[derive(Debug)]
pub struct OverlayCoordinator<S: ScrollSurface> {
    surface: S,
    transitions: OverlayTransitions,
    phases: [OverlayPhase; 2],
    sessions: Vec<OverlaySession>,
    lock: Option<ScrollLock>,
    next_open: u64,
}

impl<S: ScrollSurface> OverlayCoordinator<S> {
    /// Creates a coordinator with every surface closed and the page unlocked.
    pub fn new(surface: S, transitions: OverlayTransitions) -> Self {
        Self {
            surface,
            transitions,
            phases: [OverlayPhase::Closed; 2],
            sessions: Vec::new(),
            lock: None,
            next_open: 0,
        }
    }

    // -- Queries --

    /// Current phase of `kind`.
    #[must_use]
    pub fn phase(&self, kind: OverlayKind) -> OverlayPhase {
        self.phases[kind.slot()]
    }

    /// Returns `true` if `kind` is opening or open.
    #[must_use]
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.phase(kind).is_shown()
    }

    /// Returns `true` while the page is scroll-locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Lock reference count; equals the number of sessions.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.lock.map_or(0, |l| l.depth)
    }

    /// Offset the page returns to when the lock is released.
    #[must_use]
    pub fn saved_scroll_y(&self) -> Option<i32> {
        self.lock.map(|l| l.saved_y)
    }

    /// Open sessions, oldest first.
    #[must_use]
    pub fn sessions(&self) -> &[OverlaySession] {
        &self.sessions
    }

    /// Returns `true` if any surface is mid-transition and needs frames.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.phases.iter().any(|p| p.is_transitioning())
    }

    /// The scroll surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The scroll surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // -- Transitions --

    /// Opens `kind`.
    ///
    /// Returns `false` if it was already opening or open. Re-opening a
    /// closing surface reuses its session and leaves the lock untouched.
    pub fn open(&mut self, kind: OverlayKind, now: HostTime) -> bool {
        let duration = self.transitions.for_kind(kind);
        let shown = if duration.is_zero() {
            OverlayPhase::Open
        } else {
            OverlayPhase::Opening {
                until: now.saturating_add(duration),
            }
        };
        match self.phase(kind) {
            OverlayPhase::Opening { .. } | OverlayPhase::Open => return false,
            OverlayPhase::Closing { .. } => {}
            OverlayPhase::Closed => self.push_session(kind),
        }
        self.phases[kind.slot()] = shown;
        tracing::debug!(?kind, phase = ?shown, "overlay opened");
        true
    }

    /// Closes `kind`.
    ///
    /// Returns `false` (and does nothing) if it was not opening or open.
    pub fn close(&mut self, kind: OverlayKind, now: HostTime) -> bool {
        if !self.phase(kind).is_shown() {
            return false;
        }
        let duration = self.transitions.for_kind(kind);
        if duration.is_zero() {
            self.finish_close(kind);
        } else {
            self.phases[kind.slot()] = OverlayPhase::Closing {
                until: now.saturating_add(duration),
            };
        }
        tracing::debug!(?kind, "overlay closing");
        true
    }

    /// Opens `kind` if it is closed or closing, closes it otherwise.
    pub fn toggle(&mut self, kind: OverlayKind, now: HostTime) -> bool {
        if self.phase(kind).is_shown() {
            self.close(kind, now)
        } else {
            self.open(kind, now)
        }
    }

    /// Routes a click on the dialog. Only the backdrop closes it.
    pub fn dialog_click(&mut self, hit: ClickTarget, now: HostTime) -> bool {
        match hit {
            ClickTarget::Backdrop => self.close(OverlayKind::Dialog, now),
            ClickTarget::Content => false,
        }
    }

    /// Opens the dialog, then closes the panel it was opened from.
    ///
    /// The dialog's session keeps the lock held across the hand-off, so the
    /// offset captured by the panel survives.
    pub fn open_dialog_from_panel(&mut self, now: HostTime) {
        self.open(OverlayKind::Dialog, now);
        self.close(OverlayKind::Panel, now);
    }

    /// Completes every timed transition that has ended by `now`.
    ///
    /// Returns `true` if any phase changed.
    pub fn on_frame(&mut self, now: HostTime) -> bool {
        let mut changed = false;
        for kind in OverlayKind::ALL {
            match self.phase(kind) {
                OverlayPhase::Opening { until } if now >= until => {
                    self.phases[kind.slot()] = OverlayPhase::Open;
                    changed = true;
                }
                OverlayPhase::Closing { until } if now >= until => {
                    self.finish_close(kind);
                    changed = true;
                }
                _ => {}
            }
        }
        changed
    }

    /// Closes everything immediately and releases the lock with restoration.
    ///
    /// Does nothing if the page is unlocked.
    pub fn teardown(&mut self) {
        self.phases = [OverlayPhase::Closed; 2];
        self.sessions.clear();
        if let Some(lock) = self.lock.take() {
            tracing::debug!(restore_y = lock.saved_y, "scroll lock released by teardown");
            self.surface.unlock(lock.saved_y);
        }
    }

    fn push_session(&mut self, kind: OverlayKind) {
        let scroll_y = self.surface.scroll_y();
        self.sessions.push(OverlaySession {
            kind,
            opened_at: self.next_open,
            scroll_y_at_open: scroll_y,
        });
        self.next_open += 1;

        match &mut self.lock {
            Some(lock) => lock.depth += 1,
            None => {
                self.lock = Some(ScrollLock {
                    depth: 1,
                    saved_y: scroll_y,
                });
                tracing::debug!(scroll_y, "scroll lock applied");
                self.surface.lock(scroll_y);
            }
        }
        self.check_invariants();
    }

    fn finish_close(&mut self, kind: OverlayKind) {
        self.phases[kind.slot()] = OverlayPhase::Closed;
        let Some(pos) = self.sessions.iter().position(|s| s.kind == kind) else {
            return;
        };
        self.sessions.remove(pos);

        if let Some(lock) = &mut self.lock {
            debug_assert!(lock.depth > 0, "lock depth underflow");
            lock.depth = lock.depth.saturating_sub(1);
            if lock.depth == 0 {
                let restore_y = lock.saved_y;
                self.lock = None;
                tracing::debug!(restore_y, "scroll lock released");
                self.surface.unlock(restore_y);
            }
        }
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.depth() as usize,
            self.sessions.len(),
            "lock depth must equal the open session count"
        );
        debug_assert_eq!(
            self.lock.is_some(),
            !self.sessions.is_empty(),
            "page must be locked iff a session is open"
        );
    }
}

impl<S: ScrollSurface> Drop for OverlayCoordinator<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
