//! Release velocity estimation from timestamped pointer samples

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Cumulative horizontal delta observed at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub delta_x: f32,
    pub at: Instant,
}

/// Estimates horizontal velocity in px/ms over a short look-back window.
///
/// Samples older than `window` relative to the newest one are dropped, so a
/// pointer that pauses before lifting reports a velocity near zero.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    window: Duration,
    samples: VecDeque<PointerSample>,
}

impl VelocityTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a sample. Samples that go back in time are ignored.
    pub fn record(&mut self, delta_x: f32, at: Instant) {
        if let Some(last) = self.samples.back()
            && at < last.at
        {
            log::trace!("ignoring out-of-order pointer sample");
            return;
        }
        self.samples.push_back(PointerSample { delta_x, at });
        self.prune(at);
    }

    /// Velocity in px/ms between the oldest and newest retained samples.
    /// Zero with fewer than two samples or no elapsed time.
    pub fn velocity(&self) -> f32 {
        let (Some(first), Some(last)) =
            (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let elapsed_ms =
            last.at.saturating_duration_since(first.at).as_secs_f32() * 1000.0;
        if elapsed_ms <= f32::EPSILON {
            return 0.0;
        }
        (last.delta_x - first.delta_x) / elapsed_ms
    }

    /// Record the release sample and return the velocity at that moment.
    pub fn velocity_at(&mut self, delta_x: f32, at: Instant) -> f32 {
        self.record(delta_x, at);
        self.velocity()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn prune(&mut self, newest: Instant) {
        while let Some(front) = self.samples.front() {
            if newest.saturating_duration_since(front.at) > self.window {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_empty_and_single_sample_is_zero() {
        let mut tracker = VelocityTracker::new(ms(100));
        assert_eq!(tracker.velocity(), 0.0);
        tracker.record(25.0, Instant::now());
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_steady_motion() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new(ms(100));
        for i in 0..=5u64 {
            // 1.2 px per ms, leftwards
            tracker.record(-(i as f32) * 12.0, t0 + ms(i * 10));
        }
        assert!((tracker.velocity() + 1.2).abs() < 1e-3);
    }

    #[test]
    fn test_old_samples_fall_out_of_window() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new(ms(100));
        tracker.record(0.0, t0);
        tracker.record(200.0, t0 + ms(50));
        // Pointer rests, then lifts long after the fast part
        tracker.record(200.0, t0 + ms(400));
        let v = tracker.velocity_at(200.0, t0 + ms(450));
        assert_eq!(v, 0.0);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_out_of_order_sample_ignored() {
        let t0 = Instant::now();
        let mut tracker = VelocityTracker::new(ms(100));
        tracker.record(0.0, t0 + ms(20));
        tracker.record(50.0, t0);
        assert_eq!(tracker.len(), 1);
        tracker.reset();
        assert!(tracker.is_empty());
    }
}
