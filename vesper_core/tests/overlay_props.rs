// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the overlay scroll lock.

use proptest::prelude::*;
use vesper_core::backend::{RecordingSurface, ScrollSurface, SurfaceCall};
use vesper_core::overlay::{OverlayCoordinator, OverlayKind, OverlayTransitions};
use vesper_core::time::HostTime;

#[derive(Clone, Copy, Debug)]
enum Op {
    Open(OverlayKind),
    Close(OverlayKind),
    Scroll(i32),
}

fn kind_strategy() -> impl Strategy<Value = OverlayKind> {
    prop_oneof![Just(OverlayKind::Panel), Just(OverlayKind::Dialog)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        kind_strategy().prop_map(Op::Open),
        kind_strategy().prop_map(Op::Close),
        (0i32..5_000).prop_map(Op::Scroll),
    ]
}

proptest! {
    /// Property: locked iff at least one surface is open, and every unlock
    /// restores the offset captured when that lock was applied.
    #[test]
    fn prop_lock_tracks_open_sessions(
        start in 0i32..5_000,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut page = RecordingSurface::at(start);
        let mut open = [false; 2];
        let mut expected = Vec::new();
        let mut saved = None;
        {
            let mut overlays = OverlayCoordinator::new(&mut page, OverlayTransitions::INSTANT);
            for (i, op) in ops.iter().enumerate() {
                let now = HostTime(i as u64 * 1_000);
                match *op {
                    Op::Open(kind) => {
                        let slot = kind as usize;
                        if !open.iter().any(|&o| o) {
                            let y = overlays.surface().scroll_y();
                            saved = Some(y);
                            expected.push(SurfaceCall::Lock(y));
                        }
                        overlays.open(kind, now);
                        open[slot] = true;
                    }
                    Op::Close(kind) => {
                        let slot = kind as usize;
                        overlays.close(kind, now);
                        if open[slot] {
                            open[slot] = false;
                            if !open.iter().any(|&o| o) {
                                expected.push(SurfaceCall::Unlock(saved.take().unwrap()));
                            }
                        }
                    }
                    Op::Scroll(y) => overlays.surface_mut().scroll_to(y),
                }
                let any_open = open.iter().any(|&o| o);
                prop_assert_eq!(overlays.is_locked(), any_open);
                prop_assert_eq!(overlays.depth() as usize, open.iter().filter(|&&o| o).count());
                prop_assert_eq!(overlays.saved_scroll_y(), saved);
            }
        }
        // Dropping the coordinator releases whatever was still held.
        if let Some(y) = saved {
            expected.push(SurfaceCall::Unlock(y));
        }
        prop_assert_eq!(page.calls(), expected.as_slice());
        prop_assert!(!page.is_locked());
    }

    /// Property: closes without a matching open never touch the page.
    #[test]
    fn prop_unmatched_closes_are_inert(kinds in prop::collection::vec(kind_strategy(), 0..10)) {
        let mut page = RecordingSurface::at(42);
        {
            let mut overlays = OverlayCoordinator::new(&mut page, OverlayTransitions::SITE);
            for (i, kind) in kinds.into_iter().enumerate() {
                prop_assert!(!overlays.close(kind, HostTime(i as u64)));
            }
            prop_assert_eq!(overlays.depth(), 0);
        }
        prop_assert!(page.calls().is_empty());
    }
}
