// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas rendering for the ambient particle field.

use alloc::format;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::f64::consts::TAU;
use core::ops::ControlFlow;

use kurbo::Size;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use vesper_core::backend::ParticleCanvas;
use vesper_core::particles::{Glow, ParticleConfig, ParticleField};
use wasm_bindgen::JsCast as _;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::{WebError, WebResult};
use crate::events::EventSubscription;
use crate::raf::RafLoop;

/// The pixel ratio to render at. Anything unusable counts as 1.
pub(crate) fn effective_scale(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    }
}

/// Backing store dimensions for a canvas of `size` CSS pixels.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "viewport sizes are small positive values"
)]
pub(crate) fn backing_size(size: Size, scale: f64) -> (u32, u32) {
    let scale = effective_scale(scale);
    (
        (size.width * scale) as u32,
        (size.height * scale) as u32,
    )
}

/// Paints [`Glow`]s as radial gradients on a 2D context.
///
/// Glows are positioned in CSS pixels; the context transform maps them onto
/// a backing store scaled by the device pixel ratio.
pub struct CanvasGlowPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    css_size: Cell<Size>,
}

impl core::fmt::Debug for CanvasGlowPainter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasGlowPainter")
            .field("width", &self.canvas.width())
            .field("height", &self.canvas.height())
            .field("css_size", &self.css_size.get())
            .finish_non_exhaustive()
    }
}

impl CanvasGlowPainter {
    /// Acquires the canvas's 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> WebResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::MissingCapability("canvas 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::MissingCapability("canvas 2d context"))?;
        Ok(Self {
            canvas,
            ctx,
            css_size: Cell::new(Size::ZERO),
        })
    }

    /// Sizes the canvas to `size` CSS pixels, with a backing store of
    /// `size × scale` device pixels.
    pub fn resize(&self, size: Size, scale: f64) {
        let (width, height) = backing_size(size, scale);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", size.width));
        let _ = style.set_property("height", &format!("{}px", size.height));
        // Setting the backing size resets the transform.
        let scale = effective_scale(scale);
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        self.css_size.set(size);
    }

    fn try_draw_glow(&self, glow: &Glow) -> WebResult<()> {
        let c = glow.center;
        let gradient = self
            .ctx
            .create_radial_gradient(c.x, c.y, 0.0, c.x, c.y, glow.radius)?;
        for stop in &glow.stops {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "gradient offsets are in [0, 1]"
            )]
            let offset = stop.offset as f32;
            gradient.add_color_stop(offset, &stop.color.to_css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.arc(c.x, c.y, glow.radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}

impl ParticleCanvas for CanvasGlowPainter {
    fn clear(&mut self) {
        let size = self.css_size.get();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn draw_glow(&mut self, glow: &Glow) {
        if let Err(err) = self.try_draw_glow(glow) {
            tracing::trace!(%err, "glow skipped");
        }
    }
}

struct LayerState {
    window: Window,
    field: ParticleField,
    painter: CanvasGlowPainter,
    rng: SmallRng,
}

impl LayerState {
    fn frame(&mut self) {
        self.field.step();
        self.painter.clear();
        for glow in self.field.glows() {
            self.painter.draw_glow(&glow);
        }
    }

    fn fit_to_window(&mut self) {
        let size = crate::inner_size(&self.window);
        self.painter.resize(size, self.window.device_pixel_ratio());
        self.field.resize(size, &mut self.rng);
    }
}

struct Shared {
    state: RefCell<LayerState>,
    raf: RafLoop,
}

/// A full-viewport canvas of drifting light particles.
///
/// The animation runs until the layer is dropped, which cancels the pending
/// frame and removes the resize listener.
pub struct ParticleLayer {
    shared: Rc<Shared>,
    _resize: EventSubscription,
}

impl core::fmt::Debug for ParticleLayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParticleLayer")
            .field("particles", &self.shared.state.borrow().field.len())
            .field("raf", &self.shared.raf)
            .finish_non_exhaustive()
    }
}

impl ParticleLayer {
    /// Sizes `canvas` to the window, populates a field and starts drawing.
    pub fn mount(
        window: &Window,
        canvas: HtmlCanvasElement,
        config: ParticleConfig,
    ) -> WebResult<Self> {
        let config = config.validated()?;
        let _ = canvas
            .style()
            .set_property("opacity", &format!("{}", config.layer_opacity));

        let painter = CanvasGlowPainter::new(canvas)?;
        let size = crate::inner_size(window);
        painter.resize(size, window.device_pixel_ratio());
        let mut rng = SmallRng::seed_from_u64(seed());
        let field = ParticleField::new(config, size, &mut rng);
        tracing::debug!(count = field.len(), "particle layer mounted");

        let state = LayerState {
            window: window.clone(),
            field,
            painter,
            rng,
        };
        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            let raf = RafLoop::new(move |_tick| {
                let Some(shared) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };
                shared.state.borrow_mut().frame();
                ControlFlow::Continue(())
            });
            Shared {
                state: RefCell::new(state),
                raf,
            }
        });

        let on_resize = Rc::downgrade(&shared);
        let resize = EventSubscription::passive(window, "resize", move |_| {
            if let Some(shared) = on_resize.upgrade() {
                shared.state.borrow_mut().fit_to_window();
            }
        })?;

        shared.raf.start();
        Ok(Self {
            shared,
            _resize: resize,
        })
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.borrow().field.len()
    }

    /// Returns `true` if the window is too narrow for any particle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Seed for the particle RNG from `Math.random()` and the clock.
fn seed() -> u64 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "only the bits matter"
    )]
    let random = (js_sys::Math::random() * (u64::MAX as f64)) as u64;
    random ^ crate::now().ticks()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_store_follows_pixel_ratio() {
        let size = Size::new(800.0, 600.0);
        assert_eq!(backing_size(size, 1.0), (800, 600));
        assert_eq!(backing_size(size, 2.0), (1600, 1200));
        assert_eq!(backing_size(Size::new(801.0, 600.0), 1.5), (1201, 900));
    }

    #[test]
    fn unusable_ratios_render_at_one() {
        assert_eq!(effective_scale(0.0), 1.0);
        assert_eq!(effective_scale(-2.0), 1.0);
        assert_eq!(effective_scale(f64::NAN), 1.0);
        assert_eq!(effective_scale(2.5), 2.5);
    }
}
