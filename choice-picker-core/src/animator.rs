//! Time-based tween for settling the track onto a page
//!
//! For hosts without native style transitions: start it from a drag
//! outcome and feed it frame timestamps until it reports the target.

use std::time::{Duration, Instant};

use crate::config::SnapConfig;
use crate::easing::EasingKind;
use crate::gesture::DragOutcome;

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: EasingKind,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        let cfg = SnapConfig::default();
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration: cfg.duration(),
            easing: cfg.easing,
        }
    }
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        cfg: &SnapConfig,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
        self.duration = cfg.duration();
        self.easing = cfg.easing;
    }

    /// Tween from where the pointer let go to the settled page boundary.
    pub fn start_from_outcome(
        &mut self,
        outcome: &DragOutcome,
        cfg: &SnapConfig,
        now: Instant,
    ) {
        self.start(
            outcome.release_offset_px,
            outcome.settle_offset_px,
            cfg,
            now,
        );
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive
    pub fn tick_at(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = self.easing.apply(t);
        Some(self.start + (self.target - self.start) * te)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ElasticConfig, SwipeConfig};
    use crate::gesture::DragSession;

    #[test]
    fn test_tween_reaches_target() {
        let t0 = Instant::now();
        let cfg = SnapConfig {
            duration_ms: 300,
            easing: EasingKind::Linear,
        };
        let mut animator = SnapAnimator::new();
        animator.start(-420.0, -300.0, &cfg, t0);

        assert_eq!(animator.tick_at(t0), Some(-420.0));
        let mid = animator.tick_at(t0 + Duration::from_millis(150));
        assert!((mid.unwrap_or_default() + 360.0).abs() < 1e-3);
        assert_eq!(
            animator.tick_at(t0 + Duration::from_millis(300)),
            Some(-300.0)
        );
        assert!(!animator.is_active());
        assert_eq!(animator.tick_at(t0 + Duration::from_millis(301)), None);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let t0 = Instant::now();
        let cfg = SnapConfig {
            duration_ms: 0,
            easing: EasingKind::EaseInOut,
        };
        let mut animator = SnapAnimator::new();
        animator.start(10.0, 0.0, &cfg, t0);
        assert_eq!(animator.tick_at(t0), Some(0.0));
    }

    #[test]
    fn test_released_drag_tweens_onto_page() {
        let t0 = Instant::now();
        let cfg = SnapConfig {
            duration_ms: 300,
            easing: EasingKind::Linear,
        };
        let mut session = DragSession::new(300.0, 1, 3);
        session.offset_px =
            session.displayed_offset(-160.0, &ElasticConfig::default());
        let outcome = session.resolve(-160.0, 0.0, &SwipeConfig::default());
        assert_eq!(outcome.new_index, 2);

        let mut animator = SnapAnimator::new();
        animator.start_from_outcome(&outcome, &cfg, t0);
        assert!(animator.is_active());
        assert_eq!(animator.target(), outcome.settle_offset_px);

        assert_eq!(animator.tick_at(t0), Some(-460.0));
        let mid = animator
            .tick_at(t0 + Duration::from_millis(150))
            .unwrap_or_default();
        assert!((mid + 530.0).abs() < 1e-3);
        assert_eq!(
            animator.tick_at(t0 + Duration::from_millis(300)),
            Some(-600.0)
        );
        assert!(!animator.is_active());
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut animator = SnapAnimator::new();
        animator.start(0.0, -300.0, &SnapConfig::default(), t0);
        animator.cancel();
        assert_eq!(animator.tick_at(t0), None);
    }
}
