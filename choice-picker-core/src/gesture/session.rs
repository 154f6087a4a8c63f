//! Drag session value object
//!
//! Captured once at drag start and consumed at release. Keeping the start
//! index and measured width here, instead of re-reading them from the
//! picker, means every move and the release resolve against the same frame
//! of reference even if props change mid-drag.

use crate::config::{ElasticConfig, SwipeConfig};
use crate::elastic::TrackBounds;

use super::decision::{SwipeDirection, decide_direction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Committed index when the drag started.
    pub start_index: usize,
    /// Container width measured at drag start (one page, in px).
    pub container_width: f32,
    /// Item count when the drag started.
    pub item_count: usize,
    /// Last displayed track offset (px).
    pub offset_px: f32,
}

impl DragSession {
    pub fn new(
        container_width: f32,
        start_index: usize,
        item_count: usize,
    ) -> Self {
        Self {
            start_index,
            container_width,
            item_count,
            offset_px: page_offset(container_width, start_index),
        }
    }

    pub fn bounds(&self) -> TrackBounds {
        TrackBounds::new(self.container_width, self.item_count)
    }

    /// Raw translation for a cumulative pointer delta.
    #[inline]
    pub fn raw_translate(&self, delta_x: f32) -> f32 {
        page_offset(self.container_width, self.start_index) + delta_x
    }

    /// Displayed translation for a cumulative pointer delta. Depends only
    /// on `delta_x`, so skipped move events do not change the result.
    pub fn displayed_offset(&self, delta_x: f32, cfg: &ElasticConfig) -> f32 {
        self.bounds().resist(self.raw_translate(delta_x), cfg)
    }

    /// Resolve the release into the index the track should settle on.
    pub fn resolve(
        &self,
        delta_x: f32,
        velocity_x: f32,
        cfg: &SwipeConfig,
    ) -> DragOutcome {
        let direction =
            decide_direction(delta_x, velocity_x, self.container_width, cfg);
        let new_index = match direction {
            Some(dir) => dir.step(self.start_index, self.item_count),
            None => self.start_index,
        };
        DragOutcome {
            start_index: self.start_index,
            new_index,
            direction,
            release_offset_px: self.offset_px,
            settle_offset_px: page_offset(self.container_width, new_index),
        }
    }
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub start_index: usize,
    pub new_index: usize,
    /// Direction whose threshold was met, if any. A met direction can still
    /// leave the index unchanged at a boundary.
    pub direction: Option<SwipeDirection>,
    /// Offset displayed when the pointer was released.
    pub release_offset_px: f32,
    /// Exact page boundary of `new_index`.
    pub settle_offset_px: f32,
}

impl DragOutcome {
    pub fn changed(&self) -> bool {
        self.new_index != self.start_index
    }
}

/// Track translation (px) that shows page `index`.
#[inline]
pub fn page_offset(page_width: f32, index: usize) -> f32 {
    -page_width * index as f32
}
