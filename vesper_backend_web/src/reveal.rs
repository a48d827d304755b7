// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll reveals for DOM elements.
//!
//! [`DomReveal`] owns a [`RevealEngine`] and keeps it fed: it evaluates once
//! whenever a target is observed, again on every scroll and resize, and runs
//! a [`RafLoop`] only while some target is waiting out a delay or
//! interpolating.

use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::ControlFlow;

use kurbo::Vec2;
use vesper_core::backend::RevealPresenter;
use vesper_core::reveal::{RevealChanges, RevealConfig, RevealEngine, RevealId, RevealStyle, Stagger};
use vesper_core::time::HostTime;
use vesper_core::timing::Viewport;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement, Window};

use crate::error::WebResult;
use crate::events::EventSubscription;
use crate::raf::RafLoop;

/// CSS `transform` for a reveal offset.
pub(crate) fn transform_css(offset: Vec2) -> String {
    if offset == Vec2::ZERO {
        String::from("none")
    } else {
        format!("translate({}px, {}px)", offset.x, offset.y)
    }
}

/// Applies reveal styles to elements keyed by [`RevealId`] slot.
#[derive(Default)]
pub struct DomRevealPresenter {
    elements: Vec<Option<HtmlElement>>,
}

impl core::fmt::Debug for DomRevealPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRevealPresenter")
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl DomRevealPresenter {
    /// Returns the element bound to `id`'s slot, if any.
    #[must_use]
    pub fn get_element(&self, id: RevealId) -> Option<&HtmlElement> {
        self.elements
            .get(id.index() as usize)
            .and_then(|slot| slot.as_ref())
    }

    fn put_element(&mut self, id: RevealId, el: HtmlElement) {
        let slot = id.index() as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some(el);
    }

    fn take_element(&mut self, id: RevealId) -> Option<HtmlElement> {
        self.elements.get_mut(id.index() as usize)?.take()
    }

    /// Top edge of the bound element in viewport coordinates, or `None` if
    /// it is unbound or detached from the document.
    fn top_edge(&self, id: RevealId) -> Option<f64> {
        let el = self.get_element(id)?;
        el.is_connected()
            .then(|| el.get_bounding_client_rect().top())
    }

    fn show(&self, id: RevealId, style: &RevealStyle) {
        if let Some(el) = self.get_element(id) {
            let s = el.style();
            let _ = s.set_property("opacity", &format!("{}", style.opacity));
            let _ = s.set_property("transform", &transform_css(style.offset));
        }
    }
}

impl RevealPresenter for DomRevealPresenter {
    fn apply(&mut self, changes: &RevealChanges) {
        for &id in &changes.dropped {
            self.take_element(id);
        }
        for (id, style) in &changes.styles {
            self.show(*id, style);
        }
        for &id in &changes.completed {
            if let Some(el) = self.get_element(id) {
                let _ = el.style().remove_property("will-change");
            }
        }
    }
}

struct RevealState {
    window: Window,
    engine: RevealEngine,
    presenter: DomRevealPresenter,
}

impl RevealState {
    /// Runs one evaluation. Returns `true` if another frame is needed.
    fn evaluate(&mut self, now: HostTime) -> bool {
        let viewport = viewport_of(&self.window);
        let Self {
            engine, presenter, ..
        } = self;
        let changes = engine.evaluate(now, viewport, &mut |id: RevealId| presenter.top_edge(id));
        presenter.apply(&changes);
        !engine.is_idle()
    }

    /// Registers a connected `el`, hidden at its initial offset.
    fn register(&mut self, el: HtmlElement, config: RevealConfig) -> Option<RevealId> {
        if !el.is_connected() {
            return None;
        }
        let id = self.engine.observe(config);
        self.presenter.put_element(id, el);
        bind(self, id);
        Some(id)
    }
}

struct Shared {
    state: RefCell<RevealState>,
    raf: RafLoop,
}

impl Shared {
    fn refresh(&self) {
        let animating = self.state.borrow_mut().evaluate(crate::now());
        if animating {
            self.raf.start();
        }
    }
}

/// Scroll-triggered reveals for page elements.
///
/// Dropping a `DomReveal` removes its scroll and resize listeners and cancels
/// any scheduled frame.
pub struct DomReveal {
    shared: Rc<Shared>,
    _scroll: EventSubscription,
    _resize: EventSubscription,
}

impl core::fmt::Debug for DomReveal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("DomReveal")
            .field("targets", &state.engine.len())
            .field("raf", &self.shared.raf)
            .finish_non_exhaustive()
    }
}

impl DomReveal {
    /// Starts listening to `window` scroll and resize.
    pub fn new(window: &Window) -> WebResult<Self> {
        let state = RevealState {
            window: window.clone(),
            engine: RevealEngine::new(),
            presenter: DomRevealPresenter::default(),
        };
        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            let raf = RafLoop::new(move |tick| {
                let Some(shared) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };
                if shared.state.borrow_mut().evaluate(tick.now) {
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

        let on_scroll = Rc::downgrade(&shared);
        let on_resize = Rc::downgrade(&shared);
        Ok(Self {
            _scroll: EventSubscription::passive(window, "scroll", move |_| {
                if let Some(shared) = on_scroll.upgrade() {
                    shared.refresh();
                }
            })?,
            _resize: EventSubscription::passive(window, "resize", move |_| {
                if let Some(shared) = on_resize.upgrade() {
                    shared.refresh();
                }
            })?,
            shared,
        })
    }

    /// Hides `el` at its initial offset and tracks it.
    ///
    /// Returns `Ok(None)` without registering anything if `el` is no longer
    /// in the document.
    pub fn observe(&self, el: HtmlElement, config: RevealConfig) -> WebResult<Option<RevealId>> {
        let config = config.validated()?;
        let id = self.shared.state.borrow_mut().register(el, config);
        if id.is_some() {
            self.shared.refresh();
        }
        Ok(id)
    }

    /// Tracks every `(element, config)` pair, evaluating once after all of
    /// them are registered.
    ///
    /// Elements no longer in the document are skipped. Nothing is registered
    /// if any config is invalid.
    pub fn observe_each(
        &self,
        targets: impl IntoIterator<Item = (HtmlElement, RevealConfig)>,
    ) -> WebResult<Vec<RevealId>> {
        let targets = targets
            .into_iter()
            .map(|(el, config)| Ok((el, config.validated()?)))
            .collect::<WebResult<Vec<_>>>()?;

        let mut state = self.shared.state.borrow_mut();
        let ids: Vec<RevealId> = targets
            .into_iter()
            .filter_map(|(el, config)| state.register(el, config))
            .collect();
        drop(state);
        if !ids.is_empty() {
            self.shared.refresh();
        }
        Ok(ids)
    }

    /// Tracks every element child of `parent`, staggering child `i` by
    /// `i × stagger` on top of `config.delay`.
    pub fn observe_children(
        &self,
        parent: &Element,
        config: RevealConfig,
        stagger: Stagger,
    ) -> WebResult<Vec<RevealId>> {
        let config = config.validated()?;
        let children = parent.children();
        let elements: Vec<HtmlElement> = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .filter(|el| el.is_connected())
            .collect();

        let mut state = self.shared.state.borrow_mut();
        let ids = state
            .engine
            .observe_group(config, elements.len(), stagger);
        for (&id, el) in ids.iter().zip(elements) {
            state.presenter.put_element(id, el);
            bind(&state, id);
        }
        drop(state);
        self.shared.refresh();
        Ok(ids)
    }

    /// Stops tracking `id`. Returns `false` for stale or disposed ids.
    pub fn dispose(&self, id: RevealId) -> bool {
        let mut state = self.shared.state.borrow_mut();
        if !state.engine.dispose(id) {
            return false;
        }
        state.presenter.take_element(id);
        true
    }

    /// Whether `id` has finished revealing.
    #[must_use]
    pub fn has_played(&self, id: RevealId) -> bool {
        self.shared.state.borrow().engine.has_played(id)
    }

    /// Re-evaluates every target now, e.g. after the layout changed.
    pub fn refresh(&self) {
        self.shared.refresh();
    }
}

/// Applies the hidden starting style before anything is painted.
fn bind(state: &RevealState, id: RevealId) {
    if let Some(style) = state.engine.style(id) {
        state.presenter.show(id, &style);
        if let Some(el) = state.presenter.get_element(id) {
            let _ = el.style().set_property("will-change", "opacity, transform");
        }
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let size = crate::inner_size(window);
    Viewport::new(size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_for_offsets() {
        assert_eq!(transform_css(Vec2::new(0.0, 30.0)), "translate(0px, 30px)");
        assert_eq!(transform_css(Vec2::new(-12.5, 0.0)), "translate(-12.5px, 0px)");
        assert_eq!(transform_css(Vec2::ZERO), "none");
    }
}
