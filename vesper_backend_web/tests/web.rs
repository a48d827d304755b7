// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-browser tests for the teardown paths: nothing fires into an owner that
//! has been dropped.
//!
//! Run with `wasm-pack test --headless --chrome vesper_backend_web`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

use vesper_backend_web::{
    DomOverlays, DomReveal, EventSubscription, ParticleLayer, RafLoop, Timeout, WebError,
    clipboard,
};
use vesper_core::overlay::{OverlayKind, OverlayTransitions};
use vesper_core::particles::ParticleConfig;
use vesper_core::reveal::RevealConfig;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlCanvasElement, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

/// Creates a `tag` element appended to `parent`.
fn child<T: JsCast>(parent: &Element, tag: &str) -> T {
    let el = document().create_element(tag).unwrap();
    parent.append_child(&el).unwrap();
    el.dyn_into().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

/// Resolves after `millis`, long enough for several animation frames.
async fn sleep(millis: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    (Rc::clone(&count), count)
}

#[wasm_bindgen_test]
fn dropped_subscription_stops_listening() {
    let target: Element = child(&body(), "div");
    let (count, seen) = counter();
    let subscription =
        EventSubscription::new(&target, "ping", move |_| count.set(count.get() + 1)).unwrap();
    assert_eq!(subscription.event(), "ping");

    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
    assert_eq!(seen.get(), 1);

    drop(subscription);
    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
    assert_eq!(seen.get(), 1, "listener fired after drop");
    target.remove();
}

#[wasm_bindgen_test]
async fn timeout_fires_only_while_held() {
    let (kept_count, kept) = counter();
    let _kept = Timeout::new(10, move || kept_count.set(1));
    let (dropped_count, dropped) = counter();
    drop(Timeout::new(10, move || dropped_count.set(1)));

    sleep(60).await;
    assert_eq!(kept.get(), 1);
    assert_eq!(dropped.get(), 0, "cleared timeout fired");
}

#[wasm_bindgen_test]
async fn raf_loop_parks_on_break() {
    let (count, ticks) = counter();
    let raf = RafLoop::new(move |_| {
        count.set(count.get() + 1);
        if count.get() < 3 {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    });
    raf.start();
    assert!(raf.is_running());

    sleep(200).await;
    assert_eq!(ticks.get(), 3);
    assert!(!raf.is_running());
}

#[wasm_bindgen_test]
async fn raf_loop_dropped_after_start_never_runs() {
    let (count, ticks) = counter();
    let raf = RafLoop::new(move |_| {
        count.set(count.get() + 1);
        ControlFlow::Continue(())
    });
    raf.start();
    drop(raf);

    sleep(100).await;
    assert_eq!(ticks.get(), 0, "frame callback ran after drop");
}

struct Surfaces {
    panel: HtmlElement,
    dialog: HtmlElement,
    content: Element,
}

impl Surfaces {
    fn new() -> Self {
        let panel: HtmlElement = child(&body(), "div");
        let dialog: HtmlElement = child(&body(), "div");
        let content: Element = child(&dialog, "div");
        Self {
            panel,
            dialog,
            content,
        }
    }

    fn mount(&self) -> DomOverlays {
        DomOverlays::new(
            &window(),
            self.panel.clone(),
            self.dialog.clone(),
            self.content.clone(),
            OverlayTransitions::INSTANT,
        )
        .unwrap()
    }

    fn remove(self) {
        self.panel.remove();
        self.dialog.remove();
    }
}

fn body_style(name: &str) -> String {
    body().style().get_property_value(name).unwrap()
}

#[wasm_bindgen_test]
fn dropping_open_overlays_unpins_body() {
    let surfaces = Surfaces::new();
    let overlays = surfaces.mount();
    assert!(surfaces.panel.has_attribute("hidden"));

    assert!(overlays.open(OverlayKind::Panel));
    assert!(overlays.is_locked());
    assert_eq!(body_style("position"), "fixed");
    assert_eq!(body_style("top"), "0px");
    assert_eq!(surfaces.panel.get_attribute("data-state").as_deref(), Some("open"));
    assert!(!surfaces.panel.has_attribute("hidden"));

    drop(overlays);
    assert_eq!(body_style("position"), "");
    assert_eq!(body_style("top"), "");
    assert!(surfaces.panel.has_attribute("hidden"));
    assert_eq!(surfaces.panel.get_attribute("data-state").as_deref(), Some("closed"));
    surfaces.remove();
}

#[wasm_bindgen_test]
fn dialog_closes_on_backdrop_click_only() {
    let surfaces = Surfaces::new();
    let overlays = surfaces.mount();
    overlays.open(OverlayKind::Dialog);

    surfaces.content.unchecked_ref::<HtmlElement>().click();
    assert!(overlays.is_open(OverlayKind::Dialog), "content click closed the dialog");

    surfaces.dialog.click();
    assert!(!overlays.is_open(OverlayKind::Dialog));
    assert!(!overlays.is_locked());
    assert_eq!(body_style("position"), "");

    drop(overlays);
    surfaces.remove();
}

#[wasm_bindgen_test]
fn dropped_overlays_ignore_backdrop_clicks() {
    let surfaces = Surfaces::new();
    drop(surfaces.mount());
    // Would re-enter a dropped coordinator if the listener survived.
    surfaces.dialog.click();
    assert_eq!(body_style("position"), "");
    surfaces.remove();
}

#[wasm_bindgen_test]
async fn missing_clipboard_degrades() {
    let navigator = window().navigator();
    let navigator: &js_sys::Object = navigator.unchecked_ref();
    let key = JsValue::from_str("clipboard");
    let descriptor = js_sys::Object::new();
    js_sys::Reflect::set(&descriptor, &JsValue::from_str("value"), &JsValue::UNDEFINED).unwrap();
    js_sys::Reflect::set(&descriptor, &JsValue::from_str("configurable"), &JsValue::TRUE).unwrap();
    js_sys::Reflect::define_property(navigator, &key, &descriptor).unwrap();

    let result = clipboard::write_text(&window(), "ES0000000000000000000000").await;
    js_sys::Reflect::delete_property(navigator, &key).unwrap();

    assert!(
        matches!(result, Err(WebError::MissingCapability("navigator.clipboard"))),
        "unexpected {result:?}"
    );
}

#[wasm_bindgen_test]
fn observe_each_hides_connected_targets() {
    let section: HtmlElement = child(&body(), "section");
    let _ = section.style().set_property("margin-top", "10000px");
    let first: HtmlElement = child(&section, "div");
    let second: HtmlElement = child(&section, "div");
    let detached: HtmlElement = document().create_element("div").unwrap().unchecked_into();

    let reveal = DomReveal::new(&window()).unwrap();
    let ids = reveal
        .observe_each([
            (first.clone(), RevealConfig::default()),
            (detached.clone(), RevealConfig::default()),
            (second.clone(), RevealConfig::default()),
        ])
        .unwrap();

    assert_eq!(ids.len(), 2, "detached element was registered");
    for el in [&first, &second] {
        assert_eq!(el.style().get_property_value("opacity").unwrap(), "0");
    }
    assert_eq!(detached.style().get_property_value("opacity").unwrap(), "");
    assert!(ids.iter().all(|&id| !reveal.has_played(id)));

    assert!(reveal.dispose(ids[0]));
    assert!(!reveal.dispose(ids[0]));
    drop(reveal);
    section.remove();
}

#[wasm_bindgen_test]
async fn particle_layer_sizes_canvas_and_stops_on_drop() {
    let canvas: HtmlCanvasElement = child(&body(), "canvas");
    let layer = ParticleLayer::mount(&window(), canvas.clone(), ParticleConfig::default()).unwrap();

    let width = window().inner_width().unwrap().as_f64().unwrap();
    assert_eq!(
        canvas.style().get_property_value("width").unwrap(),
        format!("{width}px")
    );
    let ratio = window().device_pixel_ratio();
    assert_eq!(canvas.width(), (width * ratio) as u32);
    assert!(!layer.is_empty());

    drop(layer);
    // The resize listener is gone; this must not touch the dropped field.
    window().dispatch_event(&Event::new("resize").unwrap()).unwrap();
    sleep(50).await;
    canvas.remove();
}
