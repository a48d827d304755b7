// Copyright 2026 the Vesper Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot storage for reveal targets and per-frame evaluation.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::backend::RevealProbe;
use crate::time::HostTime;
use crate::timing::Viewport;

use super::config::{RevealConfig, Stagger, TRIGGER_LINE};
use super::id::RevealId;

/// Where a target is in its one-shot lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    /// Hidden and offset; probed every evaluation until it crosses the
    /// trigger line.
    Pending,
    /// Triggered; waiting out its delay until `start`.
    Waiting {
        /// When interpolation begins.
        start: HostTime,
    },
    /// Interpolating since `start`.
    Playing {
        /// When interpolation began.
        start: HostTime,
    },
    /// Fully visible at rest. Terminal.
    Played,
}

/// The visual state a presenter applies to a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation from the resting position, in CSS pixels.
    pub offset: Vec2,
}

impl RevealStyle {
    /// Fully visible at the resting position.
    pub const RESTING: Self = Self {
        opacity: 1.0,
        offset: Vec2::ZERO,
    };

    /// Fully transparent at `offset`.
    #[must_use]
    pub const fn hidden(offset: Vec2) -> Self {
        Self {
            opacity: 0.0,
            offset,
        }
    }
}

/// Output of [`RevealEngine::evaluate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealChanges {
    /// Targets whose style changed this evaluation, with the new style.
    pub styles: Vec<(RevealId, RevealStyle)>,
    /// Targets that crossed the trigger line this evaluation.
    pub triggered: Vec<RevealId>,
    /// Targets that finished playing this evaluation.
    pub completed: Vec<RevealId>,
    /// Targets dropped because their backing region no longer exists.
    pub dropped: Vec<RevealId>,
}

impl RevealChanges {
    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
            && self.triggered.is_empty()
            && self.completed.is_empty()
            && self.dropped.is_empty()
    }
}

#[derive(Clone, Debug)]
struct Target {
    config: RevealConfig,
    phase: RevealPhase,
    style: RevealStyle,
    /// Whether the initial hidden style has been reported yet.
    announced: bool,
}

/// Tracks reveal targets and drives their one-shot animations.
///
/// Targets are addressed by [`RevealId`] handles. Disposed slots are recycled
/// through a free list, and generation counters make stale handles inert.
#[derive(Debug, Default)]
pub struct RevealEngine {
    slots: Vec<Option<Target>>,
    generation: Vec<u32>,
    free_list: Vec<u32>,
}

impl RevealEngine {
    /// Creates an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Registration --

    /// Registers a target. It starts hidden at its initial offset.
    pub fn observe(&mut self, config: RevealConfig) -> RevealId {
        let target = Target {
            config,
            phase: RevealPhase::Pending,
            style: RevealStyle::hidden(config.initial_offset()),
            announced: false,
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            self.generation[idx as usize] += 1;
            self.slots[idx as usize] = Some(target);
            idx
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "slot count stays far below u32::MAX"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Some(target));
            self.generation.push(0);
            idx
        };
        RevealId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Registers `count` targets sharing `config`, where child `i` is
    /// delayed by `config.delay + i × stagger`.
    pub fn observe_group(
        &mut self,
        config: RevealConfig,
        count: usize,
        stagger: Stagger,
    ) -> Vec<RevealId> {
        (0..count)
            .map(|i| {
                let mut child = config;
                child.delay = stagger.delay_for(config.delay, i);
                self.observe(child)
            })
            .collect()
    }

    /// Stops tracking a target and cancels any in-flight animation.
    ///
    /// Returns `false` (and does nothing) for a stale or already-disposed id.
    pub fn dispose(&mut self, id: RevealId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.slots[id.idx as usize] = None;
        self.free_list.push(id.idx);
        true
    }

    /// Disposes every target.
    pub fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.take().is_some() {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "slot indices are allocated from u32"
                )]
                self.free_list.push(idx as u32);
            }
        }
    }

    // -- Queries --

    /// Returns `true` if `id` refers to a live target.
    #[must_use]
    pub fn contains(&self, id: RevealId) -> bool {
        self.target(id).is_some()
    }

    /// Number of live targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no targets are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Current phase of a target.
    #[must_use]
    pub fn phase(&self, id: RevealId) -> Option<RevealPhase> {
        self.target(id).map(|t| t.phase)
    }

    /// Whether a target's animation has completed. `false` for stale ids.
    #[must_use]
    pub fn has_played(&self, id: RevealId) -> bool {
        self.phase(id) == Some(RevealPhase::Played)
    }

    /// Current style of a target.
    #[must_use]
    pub fn style(&self, id: RevealId) -> Option<RevealStyle> {
        self.target(id).map(|t| t.style)
    }

    /// Configuration a target was observed with.
    #[must_use]
    pub fn config(&self, id: RevealId) -> Option<&RevealConfig> {
        self.target(id).map(|t| &t.config)
    }

    /// Returns `true` if any target is waiting out a delay or interpolating,
    /// so the next frame will change something without any scroll input.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.live().any(|t| {
            matches!(
                t.phase,
                RevealPhase::Waiting { .. } | RevealPhase::Playing { .. }
            )
        })
    }

    /// Returns `true` if no target will ever change again.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.live().all(|t| t.phase == RevealPhase::Played)
    }

    /// Returns `true` if nothing needs a frame: no target is animating.
    ///
    /// Pending targets only change on scroll or resize, so they do not keep
    /// a frame loop alive.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.is_animating()
    }

    // -- Evaluation --

    /// Advances every live target to `now`.
    ///
    /// Pending targets are probed for their top edge; a probe answering
    /// `None` means the region is gone and the target is dropped. A target
    /// triggers once its top edge is at or above [`TRIGGER_LINE`] of the
    /// viewport height. Played targets are never probed again.
    pub fn evaluate(
        &mut self,
        now: HostTime,
        viewport: Viewport,
        probe: &mut impl RevealProbe,
    ) -> RevealChanges {
        let mut changes = RevealChanges::default();
        let line = viewport.line_at(TRIGGER_LINE);

        for idx in 0..self.slots.len() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "slot indices are allocated from u32"
            )]
            let raw = idx as u32;
            let id = RevealId {
                idx: raw,
                generation: self.generation[idx],
            };
            let Some(target) = self.slots[idx].as_mut() else {
                continue;
            };

            if target.phase == RevealPhase::Pending {
                match probe.top_edge(id) {
                    None => {
                        self.slots[idx] = None;
                        self.free_list.push(id.idx);
                        changes.dropped.push(id);
                        continue;
                    }
                    Some(top) if top <= line => {
                        target.phase = RevealPhase::Waiting {
                            start: now.saturating_add(target.config.delay),
                        };
                        tracing::trace!(target_id = ?id, top, line, "reveal triggered");
                        changes.triggered.push(id);
                    }
                    Some(_) => {}
                }
            }

            if !target.announced {
                target.announced = true;
                if target.phase == RevealPhase::Pending
                    || matches!(target.phase, RevealPhase::Waiting { start } if now < start)
                {
                    changes.styles.push((id, target.style));
                }
            }

            if let RevealPhase::Waiting { start } = target.phase
                && now >= start
            {
                target.phase = RevealPhase::Playing { start };
            }

            if let RevealPhase::Playing { start } = target.phase {
                let elapsed = now.saturating_duration_since(start);
                let progress = target.config.duration.progress(elapsed);
                if progress >= 1.0 {
                    target.phase = RevealPhase::Played;
                    target.style = RevealStyle::RESTING;
                    changes.completed.push(id);
                } else {
                    let eased = target.config.easing.apply(progress);
                    target.style = RevealStyle {
                        opacity: eased,
                        offset: target.config.initial_offset() * (1.0 - eased),
                    };
                }
                changes.styles.push((id, target.style));
            }
        }

        changes
    }

    fn target(&self, id: RevealId) -> Option<&Target> {
        let idx = id.idx as usize;
        if self.generation.get(idx) != Some(&id.generation) {
            return None;
        }
        self.slots[idx].as_ref()
    }

    fn live(&self) -> impl Iterator<Item = &Target> {
        self.slots.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Duration;

    use crate::reveal::Direction;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn ms(v: u64) -> HostTime {
        HostTime(v * 1000)
    }

    /// Probe reporting the same top edge for every target.
    fn at(top: f64) -> impl FnMut(RevealId) -> Option<f64> {
        move |_| Some(top)
    }

    #[test]
    fn observe_starts_hidden_at_offset() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default().with_direction(Direction::Left));
        assert_eq!(engine.phase(id), Some(RevealPhase::Pending));
        assert_eq!(
            engine.style(id),
            Some(RevealStyle::hidden(Vec2::new(30.0, 0.0)))
        );
        assert!(!engine.has_played(id));
    }

    #[test]
    fn first_evaluation_announces_hidden_style() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default());
        let changes = engine.evaluate(ms(0), VIEWPORT, &mut at(2000.0));
        assert_eq!(
            changes.styles,
            [(id, RevealStyle::hidden(Vec2::new(0.0, 30.0)))]
        );
        let again = engine.evaluate(ms(16), VIEWPORT, &mut at(2000.0));
        assert!(again.is_empty(), "below the line nothing changes");
    }

    #[test]
    fn triggers_at_eighty_five_percent() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default());
        // 0.85 × 800 = 680
        engine.evaluate(ms(0), VIEWPORT, &mut at(680.5));
        assert_eq!(engine.phase(id), Some(RevealPhase::Pending));
        let changes = engine.evaluate(ms(10), VIEWPORT, &mut at(680.0));
        assert_eq!(changes.triggered, [id]);
        assert_eq!(engine.phase(id), Some(RevealPhase::Playing { start: ms(10) }));
    }

    #[test]
    fn interpolation_eases_to_rest_then_plays_once() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default());
        engine.evaluate(ms(0), VIEWPORT, &mut at(100.0));

        let mut last_opacity = 0.0;
        for t in (100..800).step_by(100) {
            engine.evaluate(ms(t), VIEWPORT, &mut at(100.0));
            let style = engine.style(id).unwrap();
            assert!(style.opacity > last_opacity, "opacity rises at {t}ms");
            assert!(style.offset.y > 0.0 && style.offset.y < 30.0);
            last_opacity = style.opacity;
        }

        let done = engine.evaluate(ms(800), VIEWPORT, &mut at(100.0));
        assert_eq!(done.completed, [id]);
        assert_eq!(engine.style(id), Some(RevealStyle::RESTING));
        assert!(engine.has_played(id));
        assert!(engine.is_settled());

        // Scroll away and back: nothing restarts.
        engine.evaluate(ms(900), VIEWPORT, &mut at(5000.0));
        let back = engine.evaluate(ms(1000), VIEWPORT, &mut at(10.0));
        assert!(back.is_empty());
        assert!(engine.has_played(id));
    }

    #[test]
    fn delay_holds_hidden_style() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default().with_delay_ms(300));
        engine.evaluate(ms(0), VIEWPORT, &mut at(0.0));
        assert_eq!(engine.phase(id), Some(RevealPhase::Waiting { start: ms(300) }));
        assert!(engine.is_animating());

        engine.evaluate(ms(299), VIEWPORT, &mut at(0.0));
        assert_eq!(engine.style(id).unwrap().opacity, 0.0);

        engine.evaluate(ms(700), VIEWPORT, &mut at(0.0));
        let mid = engine.style(id).unwrap();
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        engine.evaluate(ms(1100), VIEWPORT, &mut at(0.0));
        assert!(engine.has_played(id));
        assert!(!engine.is_animating());
    }

    #[test]
    fn idle_only_between_animations() {
        let mut engine = RevealEngine::new();
        assert!(engine.is_idle());

        let id = engine.observe(RevealConfig::default().with_duration_secs(0.5));
        engine.evaluate(ms(0), VIEWPORT, &mut at(2000.0));
        assert!(engine.is_idle(), "a pending target waits for scroll, not frames");

        engine.evaluate(ms(10), VIEWPORT, &mut at(0.0));
        assert!(!engine.is_idle());

        engine.evaluate(ms(510), VIEWPORT, &mut at(0.0));
        assert!(engine.has_played(id));
        assert!(engine.is_idle());
    }

    #[test]
    fn played_targets_are_never_probed() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default().with_duration_secs(0.1));
        engine.evaluate(ms(0), VIEWPORT, &mut at(0.0));
        engine.evaluate(ms(100), VIEWPORT, &mut at(0.0));
        assert!(engine.has_played(id));

        let mut probed = 0;
        engine.evaluate(ms(200), VIEWPORT, &mut |_: RevealId| -> Option<f64> {
            probed += 1;
            None
        });
        assert_eq!(probed, 0);
        assert!(engine.contains(id), "a played target is kept until disposed");
    }

    #[test]
    fn vanished_region_is_dropped() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default());
        let changes = engine.evaluate(ms(0), VIEWPORT, &mut |_: RevealId| -> Option<f64> { None });
        assert_eq!(changes.dropped, [id]);
        assert!(!engine.contains(id));
        assert!(!engine.dispose(id), "dropped target disposes as a no-op");
    }

    #[test]
    fn dispose_is_idempotent_and_generational() {
        let mut engine = RevealEngine::new();
        let a = engine.observe(RevealConfig::default());
        engine.evaluate(ms(0), VIEWPORT, &mut at(0.0));
        assert!(engine.dispose(a));
        assert!(!engine.dispose(a));

        let b = engine.observe(RevealConfig::default());
        assert_eq!(a.index(), b.index(), "slot is recycled");
        assert_ne!(a, b);
        assert!(!engine.contains(a));
        assert!(!engine.dispose(a), "stale handle cannot dispose the new target");
        assert!(engine.contains(b));
        assert_eq!(engine.phase(b), Some(RevealPhase::Pending));
    }

    #[test]
    fn dispose_cancels_in_flight_animation() {
        let mut engine = RevealEngine::new();
        let id = engine.observe(RevealConfig::default());
        engine.evaluate(ms(0), VIEWPORT, &mut at(0.0));
        engine.evaluate(ms(200), VIEWPORT, &mut at(0.0));
        assert!(engine.is_animating());

        engine.dispose(id);
        assert!(!engine.is_animating());
        let changes = engine.evaluate(ms(400), VIEWPORT, &mut at(0.0));
        assert!(changes.is_empty());
    }

    #[test]
    fn group_staggers_children() {
        let mut engine = RevealEngine::new();
        let base = RevealConfig::default().with_delay_ms(100);
        let ids = engine.observe_group(base, 4, Stagger::millis(150));
        let delays: Vec<_> = ids
            .iter()
            .map(|&id| engine.config(id).unwrap().delay)
            .collect();
        assert_eq!(
            delays,
            [100, 250, 400, 550].map(Duration::from_millis).to_vec()
        );
    }

    #[test]
    fn clear_disposes_everything() {
        let mut engine = RevealEngine::new();
        let ids = engine.observe_group(RevealConfig::default(), 3, Stagger::default());
        assert_eq!(engine.len(), 3);
        engine.clear();
        assert!(engine.is_empty());
        assert!(ids.iter().all(|&id| !engine.contains(id)));
        assert!(engine.is_settled());
    }
}
