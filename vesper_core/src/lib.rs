// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machines for the Santa Rita parish site's interactive layer.
//!
//! `vesper_core` holds every piece of page behavior that has real state,
//! lifecycle, or timing: one-shot scroll reveals, overlay scroll locking,
//! the display-language cycle, and the ambient particle field. It is `no_std`
//! compatible (with `alloc`) and never touches a real rendering surface;
//! backends implement the traits in [`backend`] and feed frame ticks in.
//!
//! # Architecture
//!
//! ```text
//!   Backend (rAF tick, scroll/resize events)
//!       │
//!       ▼
//!   FrameTick ──► RevealEngine::evaluate() ──► RevealChanges ──► RevealPresenter::apply()
//!             ──► ParticleField::step()    ──► glows()       ──► ParticleCanvas::draw_glow()
//!             ──► OverlayCoordinator::on_frame()
//!                     │
//!                     ▼
//!               ScrollSurface::lock() / unlock()
//! ```
//!
//! **[`reveal`]**: Generational target handles, direction/offset/duration
//! configuration, and the `Pending → Waiting → Playing → Played` phase
//! machine. A played target is never re-probed.
//!
//! **[`overlay`]**: Per-surface `Closed → Opening → Open → Closing` phases
//! and a session stack that owns the single page scroll lock.
//!
//! **[`language`]** and **[`translations`]**: The owned language state and
//! the total, statically-typed string tables.
//!
//! **[`particles`]**: Bouncing, twinkling light points and their glow
//! descriptions.
//!
//! **[`copy`]**, **[`header`]**: Small per-field and per-scroll state used
//! by the donation and navigation surfaces.
//!
//! **[`time`]**, **[`timing`]**, **[`easing`]**: Microsecond host time,
//! frame ticks, and interpolation curves.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod copy;
pub mod easing;
mod error;
pub mod header;
pub mod language;
pub mod listener;
pub mod overlay;
pub mod particles;
pub mod reveal;
pub mod time;
pub mod timing;
pub mod translations;

pub use error::{Error, Result};
