// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interpolation curves.
//!
//! Every curve maps progress `t ∈ [0, 1]` to an eased value in `[0, 1]` with
//! `f(0) = 0` and `f(1) = 1`. The `Out` variants are monotonic and
//! decelerating: fast start, slow finish.

/// An easing curve for reveal interpolation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Quadratic ease-out, `1 − (1 − t)²`.
    #[default]
    Power2Out,
    /// Cubic ease-out, `1 − (1 − t)³`.
    Power3Out,
}

impl Easing {
    /// Evaluates the curve at `t`, clamping `t` into `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - inv * inv,
            Self::Power3Out => 1.0 - inv * inv * inv,
        }
    }
}
