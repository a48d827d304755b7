// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ambient light particles.
//!
//! A [`ParticleField`] owns a set of independently drifting points inside a
//! rectangle. Every [`step`](ParticleField::step) moves each particle by its
//! velocity, reflecting off the edges, and breathes its opacity up and down
//! inside a fixed band. The field never draws anything itself: hosts call
//! [`glows`](ParticleField::glows) and hand each [`Glow`] to a
//! [`ParticleCanvas`](crate::backend::ParticleCanvas).

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};
use rand::Rng;

use crate::{Error, Result};

/// A closed interval `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Lower bound.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
}

impl Band {
    /// Creates a band.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns `true` if `v` lies within the band, inclusive.
    #[must_use]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.low && v <= self.high
    }

    fn is_ordered(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low < self.high
    }

    /// Maps a unit sample `t ∈ [0, 1)` onto the band.
    fn lerp(&self, t: f64) -> f64 {
        self.low + t * (self.high - self.low)
    }
}

/// Tunables for a [`ParticleField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Upper bound on the particle count.
    pub max_particles: usize,
    /// One particle per this many pixels of width.
    pub pixels_per_particle: f64,
    /// Radius range new particles are drawn from.
    pub radius: Band,
    /// Largest absolute velocity component, in pixels per frame.
    pub max_speed: f64,
    /// Opacity range new particles are drawn from.
    pub initial_opacity: Band,
    /// Opacity reverses its fade direction at either edge of this band.
    pub opacity_band: Band,
    /// Opacity change per frame.
    pub fade_step: f64,
    /// Glow radius as a multiple of the particle radius.
    pub glow_scale: f64,
    /// Opacity of the whole drawing layer.
    pub layer_opacity: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: 50,
            pixels_per_particle: 30.0,
            radius: Band::new(1.0, 4.0),
            max_speed: 0.25,
            initial_opacity: Band::new(0.3, 0.8),
            opacity_band: Band::new(0.2, 0.8),
            fade_step: 0.005,
            glow_scale: 4.0,
            layer_opacity: 0.4,
        }
    }
}

impl ParticleConfig {
    /// Checks ranges and step sizes.
    pub fn validated(self) -> Result<Self> {
        if !self.pixels_per_particle.is_finite() || self.pixels_per_particle <= 0.0 {
            return Err(Error::InvalidParticleConfig(
                "pixels_per_particle must be positive",
            ));
        }
        if !self.radius.is_ordered() || self.radius.low <= 0.0 {
            return Err(Error::InvalidParticleConfig(
                "radius must be a positive ordered range",
            ));
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(Error::InvalidParticleConfig(
                "max_speed must be non-negative",
            ));
        }
        if !self.opacity_band.is_ordered()
            || self.opacity_band.low < 0.0
            || self.opacity_band.high > 1.0
        {
            return Err(Error::InvalidParticleConfig(
                "opacity band must be an ordered range within [0, 1]",
            ));
        }
        if !self.initial_opacity.is_ordered()
            || !self.opacity_band.contains(self.initial_opacity.low)
            || !self.opacity_band.contains(self.initial_opacity.high)
        {
            return Err(Error::InvalidParticleConfig(
                "initial opacity must lie inside the opacity band",
            ));
        }
        if !self.fade_step.is_finite() || self.fade_step <= 0.0 {
            return Err(Error::InvalidParticleConfig("fade_step must be positive"));
        }
        if !self.glow_scale.is_finite() || self.glow_scale <= 0.0 {
            return Err(Error::InvalidParticleConfig("glow_scale must be positive"));
        }
        Ok(self)
    }

    /// Particle count for a surface `width` pixels wide:
    /// `min(max_particles, floor(width / pixels_per_particle))`.
    #[must_use]
    pub fn count_for(&self, width: f64) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "saturating float-to-int cast is the floor we want; negatives become zero"
        )]
        let n = (width / self.pixels_per_particle) as usize;
        n.min(self.max_particles)
    }
}

/// Which way a particle's opacity is heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FadeDirection {
    /// Brightening.
    In,
    /// Dimming.
    Out,
}

impl FadeDirection {
    /// `+1.0` for [`In`](Self::In), `-1.0` for [`Out`](Self::Out).
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// One point of light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Center in surface pixels.
    pub position: Point,
    /// Core radius.
    pub radius: f64,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Current opacity.
    pub opacity: f64,
    /// Current fade direction.
    pub fade: FadeDirection,
}

impl Particle {
    fn spawn(config: &ParticleConfig, bounds: Size, rng: &mut impl Rng) -> Self {
        let speed = Band::new(-config.max_speed, config.max_speed);
        Self {
            position: Point::new(
                rng.r#gen::<f64>() * bounds.width,
                rng.r#gen::<f64>() * bounds.height,
            ),
            radius: config.radius.lerp(rng.r#gen()),
            velocity: Vec2::new(speed.lerp(rng.r#gen()), speed.lerp(rng.r#gen())),
            opacity: config.initial_opacity.lerp(rng.r#gen()),
            fade: if rng.r#gen::<bool>() {
                FadeDirection::In
            } else {
                FadeDirection::Out
            },
        }
    }

    fn advance(&mut self, config: &ParticleConfig, bounds: Size) {
        let (x, vx) = reflect(self.position.x, self.velocity.x, bounds.width);
        let (y, vy) = reflect(self.position.y, self.velocity.y, bounds.height);
        self.position = Point::new(x, y);
        self.velocity = Vec2::new(vx, vy);

        let band = config.opacity_band;
        self.opacity += self.fade.sign() * config.fade_step;
        if self.opacity <= band.low || self.opacity >= band.high {
            self.fade = self.fade.flipped();
        }
        self.opacity = self.opacity.clamp(band.low, band.high);
    }
}

/// Moves `pos` by `vel` inside `[0, max]`, mirroring off either edge.
///
/// Returns the new position and velocity. The velocity is negated on
/// contact; the clamp only matters when a single step is wider than the
/// whole range.
fn reflect(pos: f64, vel: f64, max: f64) -> (f64, f64) {
    let max = max.max(0.0);
    let next = pos + vel;
    if next < 0.0 {
        ((-next).clamp(0.0, max), -vel)
    } else if next > max {
        ((2.0 * max - next).clamp(0.0, max), -vel)
    } else {
        (next, vel)
    }
}

/// An RGBA color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Warm amber used for the glow halo.
    pub const AMBER: Self = Self::rgb(217, 119, 6);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color at alpha `a`.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` notation.
    #[must_use]
    pub fn to_css(&self) -> String {
        alloc::format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One color stop of a radial gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStop {
    /// Position along the radius, in `[0, 1]`.
    pub offset: f64,
    /// Color at this stop.
    pub color: Rgba,
}

/// A soft radial glow centered on a particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Gradient center.
    pub center: Point,
    /// Outer radius, where the gradient becomes fully transparent.
    pub radius: f64,
    /// White core, amber halo, transparent edge.
    pub stops: [GlowStop; 3],
}

impl Glow {
    fn of(particle: &Particle, glow_scale: f64) -> Self {
        let o = particle.opacity;
        Self {
            center: particle.position,
            radius: particle.radius * glow_scale,
            stops: [
                GlowStop {
                    offset: 0.0,
                    color: Rgba::WHITE.with_alpha(o),
                },
                GlowStop {
                    offset: 0.5,
                    color: Rgba::AMBER.with_alpha(o * 0.5),
                },
                GlowStop {
                    offset: 1.0,
                    color: Rgba::WHITE.with_alpha(0.0),
                },
            ],
        }
    }
}

/// The particle set for one drawing surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: ParticleConfig,
    bounds: Size,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Populates a field for a surface of `bounds`.
    pub fn new(config: ParticleConfig, bounds: Size, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            config,
            bounds,
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    /// Replaces every particle with a fresh set sized for `bounds`.
    pub fn resize(&mut self, bounds: Size, rng: &mut impl Rng) {
        self.bounds = bounds;
        self.populate(rng);
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            count = self.particles.len(),
            "particle field resized"
        );
    }

    /// Advances every particle by one frame.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.advance(&self.config, self.bounds);
        }
    }

    /// A glow for every particle, in draw order.
    pub fn glows(&self) -> impl Iterator<Item = Glow> + '_ {
        let scale = self.config.glow_scale;
        self.particles.iter().map(move |p| Glow::of(p, scale))
    }

    /// The current particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns `true` if the surface is too narrow for any particle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface size.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Field configuration.
    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    fn populate(&mut self, rng: &mut impl Rng) {
        let count = self.config.count_for(self.bounds.width);
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(&self.config, self.bounds, rng)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn in_bounds(field: &ParticleField) -> bool {
        let b = field.bounds();
        field.particles().iter().all(|p| {
            (0.0..=b.width).contains(&p.position.x) && (0.0..=b.height).contains(&p.position.y)
        })
    }

    #[test]
    fn defaults_validate() {
        assert!(ParticleConfig::default().validated().is_ok());
    }

    #[test]
    fn validation_rejects_inverted_band() {
        let cfg = ParticleConfig {
            opacity_band: Band::new(0.8, 0.2),
            ..ParticleConfig::default()
        };
        assert!(matches!(
            cfg.validated(),
            Err(Error::InvalidParticleConfig(_))
        ));
        let cfg = ParticleConfig {
            fade_step: 0.0,
            ..ParticleConfig::default()
        };
        assert!(cfg.validated().is_err());
    }

    #[test]
    fn count_follows_width_and_cap() {
        let cfg = ParticleConfig::default();
        assert_eq!(cfg.count_for(800.0), 26);
        assert_eq!(cfg.count_for(1200.0), 40);
        assert_eq!(cfg.count_for(1920.0), 50);
        assert_eq!(cfg.count_for(29.0), 0);
        assert_eq!(cfg.count_for(-10.0), 0);
        assert_eq!(cfg.count_for(f64::NAN), 0);
    }

    #[test]
    fn spawned_particles_respect_config() {
        let cfg = ParticleConfig::default();
        let field = ParticleField::new(cfg, Size::new(1500.0, 900.0), &mut rng());
        assert_eq!(field.len(), 50);
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!((1.0..4.0).contains(&p.radius));
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!((0.3..0.8).contains(&p.opacity));
        }
    }

    #[test]
    fn resize_recomputes_count_and_stays_in_bounds() {
        let mut rng = rng();
        let mut field = ParticleField::new(
            ParticleConfig::default(),
            Size::new(800.0, 600.0),
            &mut rng,
        );
        assert_eq!(field.len(), 26);
        field.resize(Size::new(1200.0, 800.0), &mut rng);
        assert_eq!(field.len(), 40);
        field.step();
        assert!(in_bounds(&field));
    }

    #[test]
    fn reflection_negates_velocity() {
        assert_eq!(reflect(0.125, -0.25, 100.0), (0.125, 0.25));
        assert_eq!(reflect(99.875, 0.25, 100.0), (99.875, -0.25));
        assert_eq!(reflect(50.0, 0.25, 100.0), (50.25, 0.25));
        // Degenerate zero-width surface.
        assert_eq!(reflect(0.0, 0.25, 0.0), (0.0, -0.25));
    }

    #[test]
    fn particles_never_leave_a_tiny_surface() {
        let cfg = ParticleConfig {
            max_speed: 3.0,
            ..ParticleConfig::default()
        };
        let mut field = ParticleField::new(cfg, Size::new(60.0, 1.0), &mut rng());
        assert_eq!(field.len(), 2);
        for _ in 0..500 {
            field.step();
            assert!(in_bounds(&field));
        }
    }

    #[test]
    fn opacity_breathes_inside_band() {
        let cfg = ParticleConfig::default();
        let mut field = ParticleField::new(cfg, Size::new(300.0, 300.0), &mut rng());
        let mut flips = 0;
        for _ in 0..200 {
            let before: Vec<_> = field.particles().iter().map(|p| p.fade).collect();
            field.step();
            for (p, fade) in field.particles().iter().zip(before) {
                assert!(cfg.opacity_band.contains(p.opacity));
                if p.fade != fade {
                    flips += 1;
                }
            }
        }
        // 200 steps travel further than the band is wide.
        assert!(flips >= field.len());
    }

    #[test]
    fn glow_stops_follow_opacity() {
        let p = Particle {
            position: Point::new(10.0, 20.0),
            radius: 2.0,
            velocity: Vec2::ZERO,
            opacity: 0.6,
            fade: FadeDirection::In,
        };
        let glow = Glow::of(&p, 4.0);
        assert_eq!(glow.center, Point::new(10.0, 20.0));
        assert_eq!(glow.radius, 8.0);
        assert_eq!(glow.stops[0].color, Rgba::WHITE.with_alpha(0.6));
        assert_eq!(glow.stops[1].offset, 0.5);
        assert_eq!(glow.stops[1].color, Rgba::AMBER.with_alpha(0.3));
        assert_eq!(glow.stops[2].color.a, 0.0);
    }

    #[test]
    fn css_color_notation() {
        assert_eq!(
            Rgba::AMBER.with_alpha(0.25).to_css(),
            "rgba(217, 119, 6, 0.25)"
        );
    }
}
