// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for one-shot reveals.

use proptest::prelude::*;
use vesper_core::reveal::{RevealConfig, RevealEngine, RevealId, RevealPhase, RevealStyle, Stagger};
use vesper_core::time::{Duration, HostTime};
use vesper_core::timing::Viewport;

const VIEWPORT: Viewport = Viewport::new(1024.0, 768.0);

proptest! {
    /// Property: however often the threshold is crossed, a target triggers
    /// and completes at most once, and opacity never decreases.
    #[test]
    fn prop_reveal_fires_once(
        tops in prop::collection::vec(-500.0f64..2_000.0, 1..80),
        delay in 0u64..400,
    ) {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default().with_delay_ms(delay));
        let mut triggered = 0;
        let mut completed = 0;
        let mut last_opacity = 0.0;

        for (frame, top) in tops.iter().enumerate() {
            let now = HostTime(frame as u64 * 50_000);
            let changes = engine.evaluate(now, VIEWPORT, &mut |_: RevealId| Some(*top));
            triggered += changes.triggered.len();
            completed += changes.completed.len();
            let style = engine.style(id).unwrap();
            prop_assert!(style.opacity >= last_opacity);
            last_opacity = style.opacity;
        }
        prop_assert!(triggered <= 1);
        prop_assert!(completed <= triggered);
        if completed == 1 {
            prop_assert!(engine.has_played(id));
            prop_assert_eq!(engine.style(id), Some(RevealStyle::RESTING));
        }
    }

    /// Property: disposing twice has no effect beyond the first call.
    #[test]
    fn prop_double_dispose_is_inert(count in 1usize..10, victim in 0usize..10) {
        let mut engine = RevealEngine::new();
        let ids = engine.observe_group(RevealConfig::default(), count, Stagger::millis(100));
        let victim = ids[victim % count];
        prop_assert!(engine.dispose(victim));
        let len = engine.len();
        prop_assert!(!engine.dispose(victim));
        prop_assert_eq!(engine.len(), len);
        prop_assert_eq!(engine.phase(victim), None);
    }

    /// Property: child `i` of a group waits `base + i × stagger`.
    #[test]
    fn prop_group_delays(base in 0u64..1_000, step in 0u64..500, count in 0usize..12) {
        let mut engine = RevealEngine::new();
        let config = RevealConfig::default().with_delay_ms(base);
        let ids = engine.observe_group(config, count, Stagger::millis(step));
        for (i, id) in ids.into_iter().enumerate() {
            prop_assert_eq!(
                engine.config(id).unwrap().delay,
                Duration::from_millis(base + i as u64 * step)
            );
            prop_assert_eq!(engine.phase(id), Some(RevealPhase::Pending));
        }
    }
}
