//! Per-entity animation driver
//!
//! Holds at most one animation per target. Starting a new animation on a
//! target that already has one discards the old one without running its
//! terminal effect; there is no queuing and no blending.
//!
//! The scheduler never touches the board. [`AnimationScheduler::advance`]
//! hands finished animations back exactly once and the caller applies their
//! terminal effects.

use super::kind::{Animation, AnimationKind};
use crate::game::board::{OrphanId, Position};
use std::collections::BTreeMap;
use std::time::Duration;

/// Entity an animation is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimationTarget {
    Cell(Position),
    Orphan(OrphanId),
}

/// Animation that reached its duration during an [`AnimationScheduler::advance`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedAnimation {
    pub target: AnimationTarget,
    pub kind: AnimationKind,
}

#[derive(Debug, Default)]
pub struct AnimationScheduler {
    // BTreeMap keeps completion order deterministic (cells row-major, then orphans)
    active: BTreeMap<AnimationTarget, Animation>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `animation` on `target`, returning the animation it replaced
    pub fn start(&mut self, target: AnimationTarget, animation: Animation) -> Option<Animation> {
        let replaced = self.active.insert(target, animation);
        if let Some(old) = &replaced {
            tracing::trace!(
                "[ANIMATION] {:?}: {} replaced by new animation",
                target,
                old.kind.name()
            );
        }
        replaced
    }

    /// Advance every active animation by `delta`
    ///
    /// Animations with `elapsed >= duration` are removed and returned in
    /// target order.
    pub fn advance(&mut self, delta: Duration) -> Vec<CompletedAnimation> {
        let mut completed = Vec::new();
        for (target, animation) in self.active.iter_mut() {
            animation.elapsed = animation.elapsed.saturating_add(delta);
            if animation.is_complete() {
                completed.push(CompletedAnimation {
                    target: *target,
                    kind: animation.kind,
                });
            }
        }
        for done in &completed {
            self.active.remove(&done.target);
        }
        completed
    }

    pub fn get(&self, target: AnimationTarget) -> Option<&Animation> {
        self.active.get(&target)
    }

    /// Progress of the animation on `target`, `None` when idle
    pub fn progress(&self, target: AnimationTarget) -> Option<f32> {
        self.active.get(&target).map(Animation::progress)
    }

    /// Drop every animation without running terminal effects
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::animation::kind::RemoveStyle;
    use crate::game::board::PieceColor;

    fn cell(row: usize, col: usize) -> AnimationTarget {
        AnimationTarget::Cell(Position::new(row, col))
    }

    fn anim(kind: AnimationKind, millis: u64) -> Animation {
        Animation::new(kind, Duration::from_millis(millis))
    }

    #[test]
    fn test_animation_completes_once() {
        //! A finished animation is reported on the tick it completes and never again
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(cell(0, 0), anim(AnimationKind::Flip(PieceColor::White), 100));

        assert!(scheduler.advance(Duration::from_millis(60)).is_empty());
        let done = scheduler.advance(Duration::from_millis(60));
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].kind, AnimationKind::Flip(PieceColor::White));
        assert!(scheduler.advance(Duration::from_millis(60)).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_new_animation_replaces_old() {
        //! Replacing discards the old animation so its terminal effect never fires
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(cell(1, 1), anim(AnimationKind::Remove(RemoveStyle::Teardown), 100));
        scheduler.advance(Duration::from_millis(90));

        let replaced = scheduler.start(
            cell(1, 1),
            anim(AnimationKind::Bounce { amplitude: -0.5 }, 500),
        );
        assert!(matches!(
            replaced.map(|a| a.kind),
            Some(AnimationKind::Remove(RemoveStyle::Teardown))
        ));
        assert_eq!(scheduler.len(), 1);

        // The old removal would have finished here; only the bounce is tracked
        assert!(scheduler.advance(Duration::from_millis(20)).is_empty());
        let progress = scheduler.progress(cell(1, 1)).unwrap();
        assert!((progress - 0.04).abs() < 1e-5);
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(cell(0, 1), anim(AnimationKind::Insert(PieceColor::Black), 1000));
        let mut last = 0.0;
        for _ in 0..9 {
            scheduler.advance(Duration::from_millis(100));
            let p = scheduler.progress(cell(0, 1)).unwrap();
            assert!(p >= last, "progress went backwards: {p} < {last}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn test_completion_order_is_deterministic() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(
            AnimationTarget::Orphan(OrphanId(3)),
            anim(AnimationKind::Bounce { amplitude: 0.1 }, 10),
        );
        scheduler.start(cell(2, 0), anim(AnimationKind::Bounce { amplitude: 0.1 }, 10));
        scheduler.start(cell(0, 5), anim(AnimationKind::Bounce { amplitude: 0.1 }, 10));

        let targets: Vec<_> = scheduler
            .advance(Duration::from_millis(10))
            .into_iter()
            .map(|c| c.target)
            .collect();
        assert_eq!(
            targets,
            vec![cell(0, 5), cell(2, 0), AnimationTarget::Orphan(OrphanId(3))]
        );
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(cell(0, 0), anim(AnimationKind::Flip(PieceColor::Black), 10));
        scheduler.clear();
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }
}
