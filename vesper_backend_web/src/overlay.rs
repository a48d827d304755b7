// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM wiring for the navigation panel and the donation dialog.
//!
//! [`DomOverlays`] owns the page's single [`OverlayCoordinator`], backed by
//! the real [`BodyScrollLock`]. After every transition it mirrors each
//! surface's phase onto its element as a `data-state` attribute
//! (`closed`, `opening`, `open`, `closing`) and toggles `hidden` and
//! `aria-hidden`, so stylesheets drive the visuals.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::ops::ControlFlow;

use vesper_core::overlay::{
    ClickTarget, OverlayCoordinator, OverlayKind, OverlayPhase, OverlayTransitions,
};
use vesper_core::time::HostTime;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, Event, HtmlElement, Node, Window};

use crate::error::WebResult;
use crate::events::EventSubscription;
use crate::raf::RafLoop;
use crate::scroll_lock::BodyScrollLock;

/// `data-state` value for a phase.
pub(crate) fn phase_state(phase: OverlayPhase) -> &'static str {
    match phase {
        OverlayPhase::Closed => "closed",
        OverlayPhase::Opening { .. } => "opening",
        OverlayPhase::Open => "open",
        OverlayPhase::Closing { .. } => "closing",
    }
}

/// Classifies a click inside the dialog: anything within `content` is
/// contained; everything else hit the backdrop.
fn classify_click(content: &Element, event: &Event) -> ClickTarget {
    let node = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    if content.contains(node.as_ref()) {
        ClickTarget::Content
    } else {
        ClickTarget::Backdrop
    }
}

struct OverlayState {
    coordinator: OverlayCoordinator<BodyScrollLock>,
    panel: HtmlElement,
    dialog: HtmlElement,
}

impl OverlayState {
    fn element(&self, kind: OverlayKind) -> &HtmlElement {
        match kind {
            OverlayKind::Panel => &self.panel,
            OverlayKind::Dialog => &self.dialog,
        }
    }

    /// Mirrors every phase onto the DOM.
    fn sync(&self) {
        for kind in OverlayKind::ALL {
            let phase = self.coordinator.phase(kind);
            let el = self.element(kind);
            let _ = el.set_attribute("data-state", phase_state(phase));
            if phase == OverlayPhase::Closed {
                let _ = el.set_attribute("hidden", "");
                let _ = el.set_attribute("aria-hidden", "true");
            } else {
                let _ = el.remove_attribute("hidden");
                let _ = el.set_attribute("aria-hidden", "false");
            }
        }
    }
}

struct Shared {
    state: RefCell<OverlayState>,
    raf: RafLoop,
}

impl Shared {
    /// Runs `op` against the coordinator, mirrors the result, and keeps
    /// frames coming while a timed transition is in flight.
    fn update<R>(&self, op: impl FnOnce(&mut OverlayCoordinator<BodyScrollLock>, HostTime) -> R) -> R {
        let mut state = self.state.borrow_mut();
        let out = op(&mut state.coordinator, crate::now());
        state.sync();
        let needs_frames = state.coordinator.needs_frames();
        drop(state);
        if needs_frames {
            self.raf.start();
        }
        out
    }
}

/// The page's overlay surfaces and their shared scroll lock.
///
/// Dropping it closes every surface and releases the lock with scroll
/// restoration.
pub struct DomOverlays {
    shared: Rc<Shared>,
    _dialog_click: EventSubscription,
}

impl core::fmt::Debug for DomOverlays {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("DomOverlays")
            .field("panel", &state.coordinator.phase(OverlayKind::Panel))
            .field("dialog", &state.coordinator.phase(OverlayKind::Dialog))
            .field("locked", &state.coordinator.is_locked())
            .finish_non_exhaustive()
    }
}

impl DomOverlays {
    /// Binds the panel and dialog elements.
    ///
    /// `dialog` is the full-screen backdrop; `dialog_content` is the box
    /// inside it. Clicks on the backdrop close the dialog, clicks inside the
    /// content do not.
    pub fn new(
        window: &Window,
        panel: HtmlElement,
        dialog: HtmlElement,
        dialog_content: Element,
        transitions: OverlayTransitions,
    ) -> WebResult<Self> {
        let coordinator = OverlayCoordinator::new(BodyScrollLock::new(window.clone())?, transitions);
        let state = OverlayState {
            coordinator,
            panel,
            dialog: dialog.clone(),
        };
        state.sync();

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            let raf = RafLoop::new(move |tick| {
                let Some(shared) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };
                let mut state = shared.state.borrow_mut();
                if state.coordinator.on_frame(tick.now) {
                    state.sync();
                }
                if state.coordinator.needs_frames() {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            });
            Shared {
                state: RefCell::new(state),
                raf,
            }
        });

        let on_click = Rc::downgrade(&shared);
        let dialog_click = EventSubscription::new(&dialog, "click", move |event| {
            let Some(shared) = on_click.upgrade() else {
                return;
            };
            let hit = classify_click(&dialog_content, &event);
            shared.update(|c, now| c.dialog_click(hit, now));
        })?;

        Ok(Self {
            shared,
            _dialog_click: dialog_click,
        })
    }

    /// Opens `kind`. Returns `false` if it was already open.
    pub fn open(&self, kind: OverlayKind) -> bool {
        self.shared.update(|c, now| c.open(kind, now))
    }

    /// Closes `kind`. Returns `false` if it was not open.
    pub fn close(&self, kind: OverlayKind) -> bool {
        self.shared.update(|c, now| c.close(kind, now))
    }

    /// Opens `kind` if closed, closes it otherwise.
    pub fn toggle(&self, kind: OverlayKind) -> bool {
        self.shared.update(|c, now| c.toggle(kind, now))
    }

    /// Opens the dialog and closes the panel, keeping the page locked.
    pub fn open_dialog_from_panel(&self) {
        self.shared.update(|c, now| c.open_dialog_from_panel(now));
    }

    /// Whether `kind` is opening or open.
    #[must_use]
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.shared.state.borrow().coordinator.is_open(kind)
    }

    /// Whether the page scroll is locked. Stays `true` while a surface is
    /// still closing.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.shared.state.borrow().coordinator.is_locked()
    }

    /// Closes everything and releases the lock.
    pub fn teardown(&self) {
        self.shared.update(|c, _| c.teardown());
    }
}

impl Drop for DomOverlays {
    fn drop(&mut self) {
        self.teardown();
        self.shared.raf.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_state_names() {
        assert_eq!(phase_state(OverlayPhase::Closed), "closed");
        assert_eq!(
            phase_state(OverlayPhase::Opening { until: HostTime(5) }),
            "opening"
        );
        assert_eq!(phase_state(OverlayPhase::Open), "open");
        assert_eq!(
            phase_state(OverlayPhase::Closing { until: HostTime(5) }),
            "closing"
        );
    }
}
