// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned DOM event listeners and timers.
//!
//! Both types cancel themselves on drop. Holding one is the only way to keep
//! its callback alive, so a component that drops its handles can never be
//! called back afterwards.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::WebResult;

type EventClosure = Closure<dyn FnMut(Event)>;

/// A registered event listener, removed on drop.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    closure: EventClosure,
}

impl EventSubscription {
    /// Listens for `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> WebResult<Self> {
        Self::with_passive(target, event, false, callback)
    }

    /// Listens for `event` on `target` as a passive listener, which may not
    /// call `preventDefault`. Used for scroll and resize.
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> WebResult<Self> {
        Self::with_passive(target, event, true, callback)
    }

    fn with_passive(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> WebResult<Self> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// The event type this subscription listens for.
    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventSubscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventSubscription")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, millis: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// A one-shot `setTimeout`, cleared on drop.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Runs `callback` once after `millis` milliseconds.
    pub fn new(millis: u32, callback: impl FnOnce() + 'static) -> Self {
        let closure = Closure::once(callback);
        let millis = i32::try_from(millis).unwrap_or(i32::MAX);
        let id = set_timeout(closure.as_ref().unchecked_ref(), millis);
        Self {
            id,
            _closure: closure,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        clear_timeout(self.id);
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
