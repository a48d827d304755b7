// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Santa Rita parish site.
//!
//! Binds the interactive layer to the static markup in `index.html`: the
//! condensing header, the navigation panel and donation dialog sharing one
//! [`DomOverlays`], the three-language cycle, scroll reveals declared with
//! `data-reveal` attributes, and the hero's [`ParticleLayer`].
//!
//! Each part mounts on its own. One that fails (a missing element, an
//! unavailable canvas) is logged and the rest of the page still works.
//!
//! Build with: `wasm-pack build --target web demos/vesper_site`
//!
//! Then serve `demos/vesper_site/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod dom;
mod donation;
mod i18n;
mod nav;
mod reveals;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use vesper_backend_web::{
    DomOverlays, DomReveal, EventSubscription, ParticleLayer, WebError, WebResult, logging,
};
use vesper_core::language::LanguageState;
use vesper_core::listener::ListenerId;
use vesper_core::overlay::{OverlayKind, OverlayTransitions};
use vesper_core::particles::ParticleConfig;

/// Id of the navigation panel root.
const NAV_PANEL: &str = "nav-panel";
/// Id of the donation dialog backdrop.
const DONATION_DIALOG: &str = "donation-dialog";
/// Id of the donation dialog's content box.
const DONATION_CONTENT: &str = "donation-content";
/// Id of the hero's particle canvas.
const HERO_PARTICLES: &str = "hero-particles";

/// Everything the page keeps alive.
struct Page {
    _language: Rc<RefCell<LanguageState>>,
    _language_listener: Option<ListenerId>,
    _overlays: Option<Rc<DomOverlays>>,
    _reveal: Option<DomReveal>,
    _particles: Option<ParticleLayer>,
    _donation: Option<donation::Donation>,
    _subscriptions: Vec<EventSubscription>,
}

/// Logs a part of the page that failed to mount.
fn section<T>(name: &'static str, built: WebResult<T>) -> Option<T> {
    match built {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::error!(section = name, %err, "section failed to mount");
            None
        }
    }
}

fn mount_overlays(window: &Window, document: &Document) -> WebResult<DomOverlays> {
    DomOverlays::new(
        window,
        dom::by_id::<HtmlElement>(document, NAV_PANEL)?,
        dom::by_id::<HtmlElement>(document, DONATION_DIALOG)?,
        dom::by_id(document, DONATION_CONTENT)?,
        OverlayTransitions::SITE,
    )
}

/// Renders the initial language and re-renders on every change.
fn mount_language(
    document: &Document,
    language: &Rc<RefCell<LanguageState>>,
    overlays: Option<&Rc<DomOverlays>>,
) -> WebResult<ListenerId> {
    let panel_open = |overlays: Option<&Rc<DomOverlays>>| {
        overlays.is_some_and(|o| o.is_open(OverlayKind::Panel))
    };
    i18n::render(document, language.borrow().current(), panel_open(overlays))?;

    let document = document.clone();
    let overlays = overlays.map(Rc::downgrade);
    Ok(language.borrow_mut().subscribe(move |change| {
        let overlays = overlays.as_ref().and_then(alloc::rc::Weak::upgrade);
        if let Err(err) = i18n::render(&document, change.current, panel_open(overlays.as_ref())) {
            tracing::error!(%err, "language render failed");
        }
    }))
}

fn mount_particles(window: &Window, document: &Document) -> WebResult<ParticleLayer> {
    let canvas = dom::by_id::<HtmlCanvasElement>(document, HERO_PARTICLES)?;
    ParticleLayer::mount(window, canvas, ParticleConfig::default())
}

impl Page {
    fn mount(window: &Window, document: &Document) -> Self {
        let language = Rc::new(RefCell::new(LanguageState::new()));
        let overlays = section("overlays", mount_overlays(window, document)).map(Rc::new);

        let mut subscriptions = Vec::new();
        subscriptions.extend(section(
            "header",
            nav::mount_header(window, document, overlays.clone()),
        ));
        if let Some(overlays) = &overlays {
            subscriptions.extend(
                section(
                    "navigation",
                    nav::mount(document, overlays, &language, OverlayTransitions::SITE),
                )
                .unwrap_or_default(),
            );
        }

        Self {
            _language_listener: section(
                "language",
                mount_language(document, &language, overlays.as_ref()),
            ),
            _language: language,
            _overlays: overlays,
            _reveal: section("reveals", reveals::mount(window)),
            _particles: section("particles", mount_particles(window, document)),
            _donation: section("donation", donation::mount(window, document)),
            _subscriptions: subscriptions,
        }
    }
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    logging::init();
    let window = vesper_backend_web::window()?;
    let document = window
        .document()
        .ok_or(WebError::MissingElement("document"))?;

    let page = Page::mount(&window, &document);
    tracing::info!("page mounted");

    // Keep the page alive; there is no graceful shutdown on the web.
    core::mem::forget(page);
    Ok(())
}
