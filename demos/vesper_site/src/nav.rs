// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The header and the buttons that drive the overlays.
//!
//! Markup hooks:
//!
//! - `#site-header` gets the `condensed` class once the page scrolls.
//! - `#menu-toggle` toggles the navigation panel.
//! - `[data-action=language]` cycles the display language.
//! - `[data-action=donate]` opens the donation dialog, closing the panel.
//! - `[data-dismiss=panel]` and `[data-dismiss=dialog]` close a surface.
//! - Anchor links inside `#nav-panel` close the panel, then scroll to
//!   their section.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use vesper_backend_web::{DomOverlays, EventSubscription, Timeout, WebResult};
use vesper_core::header::HeaderState;
use vesper_core::language::LanguageState;
use vesper_core::overlay::{OverlayKind, OverlayTransitions};
use web_sys::{Document, Element, Event, Window};

use crate::dom;
use crate::i18n;

/// Id of the fixed page header.
pub(crate) const HEADER: &str = "site-header";

/// Class applied to the header while condensed.
pub(crate) const CONDENSED_CLASS: &str = "condensed";

/// Frame allowance between the panel's close transition ending and the
/// deferred section scroll.
const SCROLL_SLACK_MS: u32 = 32;

/// Milliseconds to wait after closing the panel before scrolling to a
/// section, so the body is unpinned first.
pub(crate) fn scroll_delay_ms(transitions: &OverlayTransitions) -> u32 {
    u32::try_from(transitions.panel.as_millis())
        .unwrap_or(u32::MAX)
        .saturating_add(SCROLL_SLACK_MS)
}

/// Section id an in-page link points at, if it is one.
pub(crate) fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Tracks scroll to condense the header.
///
/// Scroll events are ignored while an overlay pins the body: the window
/// reports an offset of zero then, which would flash the header back to
/// transparent.
pub(crate) fn mount_header(
    window: &Window,
    document: &Document,
    overlays: Option<Rc<DomOverlays>>,
) -> WebResult<EventSubscription> {
    let header = dom::by_id::<Element>(document, HEADER)?;
    let mut state = HeaderState::default();
    let apply = move |state: &HeaderState| {
        let _ = header
            .class_list()
            .toggle_with_force(CONDENSED_CLASS, state.is_condensed());
    };

    state.update(window.scroll_y().unwrap_or(0.0));
    apply(&state);

    let on_scroll = window.clone();
    EventSubscription::passive(window, "scroll", move |_| {
        if overlays.as_ref().is_some_and(|o| o.is_locked()) {
            return;
        }
        if state.update(on_scroll.scroll_y().unwrap_or(0.0)) {
            apply(&state);
        }
    })
}

#[derive(Clone)]
struct NavContext {
    document: Document,
    overlays: Rc<DomOverlays>,
    language: Rc<RefCell<LanguageState>>,
    transitions: OverlayTransitions,
    pending_scroll: Rc<RefCell<Option<Timeout>>>,
}

impl NavContext {
    fn sync_menu(&self) {
        let language = self.language.borrow().current();
        i18n::sync_menu_toggle(
            &self.document,
            language,
            self.overlays.is_open(OverlayKind::Panel),
        );
    }

    fn follow_link(&self, link: &Element, event: &Event) {
        if !self.overlays.close(OverlayKind::Panel) {
            // The panel was not open; let the browser navigate.
            return;
        }
        self.sync_menu();
        let Some(target) = link
            .get_attribute("href")
            .as_deref()
            .and_then(anchor_target)
            .and_then(|id| self.document.get_element_by_id(id))
        else {
            return;
        };
        event.prevent_default();
        let timeout = Timeout::new(scroll_delay_ms(&self.transitions), move || {
            target.scroll_into_view();
        });
        *self.pending_scroll.borrow_mut() = Some(timeout);
    }
}

/// Wires every navigation control. The returned subscriptions keep them
/// alive.
pub(crate) fn mount(
    document: &Document,
    overlays: &Rc<DomOverlays>,
    language: &Rc<RefCell<LanguageState>>,
    transitions: OverlayTransitions,
) -> WebResult<Vec<EventSubscription>> {
    let ctx = NavContext {
        document: document.clone(),
        overlays: Rc::clone(overlays),
        language: Rc::clone(language),
        transitions,
        pending_scroll: Rc::new(RefCell::new(None)),
    };
    let mut subscriptions = Vec::new();

    let menu = dom::by_id::<Element>(document, i18n::MENU_TOGGLE)?;
    let on_menu = ctx.clone();
    subscriptions.push(EventSubscription::new(&menu, "click", move |_| {
        on_menu.overlays.toggle(OverlayKind::Panel);
        on_menu.sync_menu();
    })?);

    for link in dom::query_all::<Element>(document, "#nav-panel a[href^='#']")? {
        let on_link = ctx.clone();
        let target = link.clone();
        subscriptions.push(EventSubscription::new(&link, "click", move |event| {
            on_link.follow_link(&target, &event);
        })?);
    }

    for button in dom::query_all::<Element>(document, "[data-action=language]")? {
        let language = Rc::clone(&ctx.language);
        subscriptions.push(EventSubscription::new(&button, "click", move |_| {
            language.borrow_mut().cycle();
        })?);
    }

    for button in dom::query_all::<Element>(document, "[data-action=donate]")? {
        let on_donate = ctx.clone();
        subscriptions.push(EventSubscription::new(&button, "click", move |event| {
            event.prevent_default();
            on_donate.overlays.open_dialog_from_panel();
            on_donate.sync_menu();
        })?);
    }

    for (selector, kind) in [
        ("[data-dismiss=panel]", OverlayKind::Panel),
        ("[data-dismiss=dialog]", OverlayKind::Dialog),
    ] {
        for el in dom::query_all::<Element>(document, selector)? {
            let on_dismiss = ctx.clone();
            subscriptions.push(EventSubscription::new(&el, "click", move |_| {
                on_dismiss.overlays.close(kind);
                on_dismiss.sync_menu();
            })?);
        }
    }

    tracing::debug!(count = subscriptions.len(), "navigation mounted");
    Ok(subscriptions)
}
