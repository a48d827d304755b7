// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for vesper.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source that parks itself when
//!   its callback has nothing left to animate
//! - [`DomReveal`]: scroll reveals applied to DOM elements
//! - [`DomOverlays`]: panel and dialog phases mirrored onto the DOM, with
//!   the page scroll lock on `<body>` ([`BodyScrollLock`])
//! - [`ParticleLayer`]: the ambient particle field drawn on a canvas
//! - [`clipboard::write_text`]: clipboard writes that degrade gracefully
//! - [`EventSubscription`] and [`Timeout`]: listeners and timers that cancel
//!   themselves on drop
//! - [`logging::init`]: `tracing` output to the browser console

#![no_std]

extern crate alloc;

mod canvas;
pub mod clipboard;
mod error;
mod events;
pub mod logging;
mod overlay;
mod raf;
mod reveal;
mod scroll_lock;

pub use canvas::{CanvasGlowPainter, ParticleLayer};
pub use error::{WebError, WebResult};
pub use events::{EventSubscription, Timeout};
pub use overlay::DomOverlays;
pub use raf::RafLoop;
pub use reveal::{DomReveal, DomRevealPresenter};
pub use scroll_lock::BodyScrollLock;

use kurbo::Size;
use vesper_core::time::HostTime;
use web_sys::Window;

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}

/// Returns the global `window`.
pub fn window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::MissingCapability("window"))
}

/// The window's inner size in CSS pixels, or zero if unavailable.
pub(crate) fn inner_size(window: &Window) -> Size {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Size::new(dim(window.inner_width()), dim(window.inner_height()))
}
