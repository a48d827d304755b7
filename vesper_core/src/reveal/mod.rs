// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot reveal animations for content regions.
//!
//! A *target* is a content region registered with the [`RevealEngine`].
//! Each target has:
//!
//! - An identity ([`RevealId`]): a generational handle that becomes stale
//!   when the target is disposed, so a late dispose from a torn-down region
//!   can never cancel someone else's animation.
//! - A [`RevealConfig`]: direction, distance, duration, delay, easing.
//! - A [`RevealPhase`]: `Pending → Waiting → Playing → Played`.
//!
//! # Triggering
//!
//! While `Pending`, a target is probed at every
//! [`evaluate`](RevealEngine::evaluate) for its top edge in viewport
//! coordinates. When the edge reaches [`TRIGGER_LINE`] (85% of the way down
//! the viewport), the target moves to `Waiting` and, once its delay has
//! elapsed, interpolates opacity `0 → 1` and offset `initial → 0`.
//!
//! `Played` is terminal: the target is never probed again, so scrolling back
//! past the line cannot restart it.

mod config;
mod engine;
mod id;

pub use config::{Direction, RevealConfig, Stagger, TRIGGER_LINE};
pub use engine::{RevealChanges, RevealEngine, RevealPhase, RevealStyle};
pub use id::RevealId;
