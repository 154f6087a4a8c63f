//! Elastic track bounds
//!
//! Maps a raw track translation onto the displayed one. Inside the natural
//! travel range `[min_translate, 0]` the track follows the pointer 1:1; past
//! either end the overshoot is compressed by a saturating exponential so it
//! approaches `length` and never exceeds it.

use crate::config::ElasticConfig;

/// Offset (px) produced by `overflow` px of travel past a bound.
///
/// `length * (1 - e^(-strength * overflow))`: zero at zero, monotonically
/// increasing, approaching `length` and never exceeding it. Very large
/// overflows round to exactly `length` in `f32`. Negative overflow is
/// treated as none.
#[inline]
pub fn elastic_offset(overflow: f32, cfg: &ElasticConfig) -> f32 {
    let overflow = overflow.max(0.0);
    cfg.length * (1.0 - (-cfg.strength * overflow).exp())
}

/// Natural travel range of a paged track, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    /// Translation that shows the last page (`-width * (count - 1)`).
    pub min_translate: f32,
    /// Translation that shows the first page.
    pub max_translate: f32,
}

impl TrackBounds {
    /// Bounds for `item_count` pages of `page_width` px. An empty track is
    /// treated like a single page so the range never inverts.
    pub fn new(page_width: f32, item_count: usize) -> Self {
        let last = item_count.saturating_sub(1);
        Self {
            min_translate: -page_width * last as f32,
            max_translate: 0.0,
        }
    }

    /// Distance (px) the translation has travelled past the first page.
    #[inline]
    pub fn leading_overflow(&self, translate: f32) -> f32 {
        (translate - self.max_translate).max(0.0)
    }

    /// Distance (px) the translation has travelled past the last page.
    #[inline]
    pub fn trailing_overflow(&self, translate: f32) -> f32 {
        (-(translate - self.min_translate)).max(0.0)
    }

    #[inline]
    pub fn clamp(&self, translate: f32) -> f32 {
        translate.clamp(self.min_translate, self.max_translate)
    }

    /// Displayed translation: clamped into range, then pushed outwards by
    /// the elastic overshoot on whichever side was exceeded.
    pub fn resist(&self, translate: f32, cfg: &ElasticConfig) -> f32 {
        let leading = elastic_offset(self.leading_overflow(translate), cfg);
        let trailing = elastic_offset(self.trailing_overflow(translate), cfg);
        self.clamp(translate) + leading - trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ElasticConfig {
        ElasticConfig::default()
    }

    #[test]
    fn test_elastic_offset_reference_points() {
        assert_eq!(elastic_offset(0.0, &cfg()), 0.0);

        // overflow of 1/strength lands at length * (1 - 1/e)
        let at_125 = elastic_offset(125.0, &cfg());
        let expected = 60.0 * (1.0 - (-1.0f32).exp());
        assert!((at_125 - expected).abs() < 1e-3, "got {at_125}");
        assert!((at_125 - 37.93).abs() < 0.01);

        let far = elastic_offset(10_000.0, &cfg());
        assert!(far <= 60.0);
        assert!(far > 59.9);
    }

    #[test]
    fn test_elastic_offset_saturates_at_length() {
        for overflow in [2_200.0, 5_000.0, 1.0e6, f32::MAX] {
            let offset = elastic_offset(overflow, &cfg());
            assert!(offset <= 60.0, "exceeded length at {overflow}");
            assert!(offset > 59.9, "lost saturation at {overflow}");
        }
    }

    #[test]
    fn test_elastic_offset_monotonic_and_bounded() {
        let mut prev = 0.0;
        for step in 1..2_000 {
            let overflow = step as f32 * 0.5;
            let offset = elastic_offset(overflow, &cfg());
            assert!(offset >= prev, "not monotonic at {overflow}");
            assert!(offset < 60.0, "exceeded length at {overflow}");
            prev = offset;
        }
    }

    #[test]
    fn test_negative_overflow_is_zero() {
        assert_eq!(elastic_offset(-50.0, &cfg()), 0.0);
    }

    #[test]
    fn test_resist_inside_range_is_identity() {
        let bounds = TrackBounds::new(300.0, 4);
        assert_eq!(bounds.min_translate, -900.0);
        for translate in [0.0, -1.0, -450.0, -899.0, -900.0] {
            assert_eq!(bounds.resist(translate, &cfg()), translate);
        }
    }

    #[test]
    fn test_resist_compresses_overshoot() {
        let bounds = TrackBounds::new(300.0, 3);

        let past_first = bounds.resist(125.0, &cfg());
        assert!((past_first - 37.93).abs() < 0.01);

        let past_last = bounds.resist(-600.0 - 125.0, &cfg());
        assert!((past_last - (-600.0 - 37.93)).abs() < 0.01);
    }

    #[test]
    fn test_single_page_resists_both_ways() {
        let bounds = TrackBounds::new(300.0, 1);
        assert_eq!(bounds.min_translate, 0.0);
        assert!(bounds.resist(200.0, &cfg()) > 0.0);
        assert!(bounds.resist(-200.0, &cfg()) < 0.0);
        assert!(bounds.resist(-200.0, &cfg()) > -60.0);
    }

    #[test]
    fn test_zero_length_is_hard_stop() {
        let hard = ElasticConfig {
            length: 0.0,
            ..ElasticConfig::default()
        };
        let bounds = TrackBounds::new(300.0, 2);
        assert_eq!(bounds.resist(500.0, &hard), 0.0);
        assert_eq!(bounds.resist(-1_000.0, &hard), -300.0);
    }
}
