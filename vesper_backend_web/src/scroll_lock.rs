// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page scroll lock on `<body>`.
//!
//! Hiding the scrollbar alone lets content jump when it disappears, so the
//! lock pins the body in place instead: `position: fixed` with a negative
//! `top` equal to the captured offset keeps the visible content exactly where
//! it was. Unlocking clears the styling and scrolls back.

use alloc::format;
use alloc::string::String;

use vesper_core::backend::ScrollSurface;
use web_sys::{HtmlElement, Window};

use crate::error::{WebError, WebResult};

/// Body style properties applied while locked at `scroll_y`.
pub(crate) fn lock_styles(scroll_y: i32) -> [(&'static str, String); 4] {
    [
        ("position", String::from("fixed")),
        ("top", format!("{}px", -scroll_y)),
        ("width", String::from("100%")),
        ("overflow", String::from("hidden")),
    ]
}

/// The real page behind the overlay coordinator.
pub struct BodyScrollLock {
    window: Window,
    body: HtmlElement,
}

impl BodyScrollLock {
    /// Binds to the window's document body.
    pub fn new(window: Window) -> WebResult<Self> {
        let body = window
            .document()
            .and_then(|d| d.body())
            .ok_or(WebError::MissingElement("body"))?;
        Ok(Self { window, body })
    }
}

impl ScrollSurface for BodyScrollLock {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scroll offsets are far below i32::MAX"
    )]
    fn scroll_y(&self) -> i32 {
        self.window.scroll_y().unwrap_or(0.0) as i32
    }

    fn lock(&mut self, scroll_y: i32) {
        let style = self.body.style();
        for (name, value) in lock_styles(scroll_y) {
            let _ = style.set_property(name, &value);
        }
    }

    fn unlock(&mut self, restore_y: i32) {
        let style = self.body.style();
        for (name, _) in lock_styles(0) {
            let _ = style.remove_property(name);
        }
        self.window.scroll_to_with_x_and_y(0.0, f64::from(restore_y));
    }
}

impl core::fmt::Debug for BodyScrollLock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BodyScrollLock").finish_non_exhaustive()
    }
}
