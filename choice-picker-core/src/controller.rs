//! Committed index controller
//!
//! Owns the page the picker is settled on. The index only moves on a
//! completed drag or a directional control press, and never leaves
//! `[0, len - 1]`. Whether the compact or wide layout is shown makes no
//! difference here.

use crate::gesture::{DragOutcome, SwipeDirection};

#[derive(Debug, Clone, Default)]
pub struct IndexController {
    index: usize,
    /// Set after the first render has been observed.
    mounted: bool,
}

impl IndexController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_retreat(&self, len: usize) -> bool {
        len > 0 && self.index > 0
    }

    pub fn can_advance(&self, len: usize) -> bool {
        len > 0 && self.index < len - 1
    }

    /// Move one step toward the first item. Returns the new index when an
    /// item exists there; the caller reports it as the new selection.
    pub fn retreat_one_step(&mut self, len: usize) -> Option<usize> {
        self.step(SwipeDirection::Retreat, len)
    }

    /// Move one step toward the last item. Same contract as
    /// [`Self::retreat_one_step`].
    pub fn advance_one_step(&mut self, len: usize) -> Option<usize> {
        self.step(SwipeDirection::Advance, len)
    }

    fn step(&mut self, direction: SwipeDirection, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let new_index = direction.step(self.index, len);
        log::debug!("{direction:?}: index {} -> {new_index}", self.index);
        self.index = new_index;
        Some(new_index)
    }

    /// Commit a released drag. Returns the new index only when it differs
    /// from the drag's start index and is inside the current list.
    pub fn commit_drag(
        &mut self,
        outcome: &DragOutcome,
        len: usize,
    ) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.index = outcome.new_index.min(len - 1);
        (outcome.changed() && outcome.new_index < len)
            .then_some(outcome.new_index)
    }

    /// Keep the index inside a list that changed length between renders.
    /// Returns true when the index had to move.
    pub fn clamp_to(&mut self, len: usize) -> bool {
        let max = len.saturating_sub(1);
        if self.index <= max {
            return false;
        }
        log::warn!(
            "item list shrank to {len}; clamping index {} -> {max}",
            self.index
        );
        self.index = max;
        true
    }

    /// Observe a render. Returns true exactly once, on the first render, when
    /// the first item should be auto-selected: compact layout, no external
    /// value, and a non-empty list.
    pub fn observe_render(
        &mut self,
        wide_layout: bool,
        has_value: bool,
        len: usize,
    ) -> bool {
        let first_mount = !self.mounted;
        self.mounted = true;
        first_mount && !wide_layout && !has_value && len > 0
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(start: usize, new: usize) -> DragOutcome {
        DragOutcome {
            start_index: start,
            new_index: new,
            direction: None,
            release_offset_px: 0.0,
            settle_offset_px: 0.0,
        }
    }

    #[test]
    fn test_steps_clamp_and_report() {
        let mut c = IndexController::new();
        assert_eq!(c.advance_one_step(3), Some(1));
        assert_eq!(c.advance_one_step(3), Some(2));
        assert_eq!(c.advance_one_step(3), Some(2));
        assert_eq!(c.index(), 2);
        assert_eq!(c.retreat_one_step(3), Some(1));
        assert_eq!(c.retreat_one_step(3), Some(0));
        assert_eq!(c.retreat_one_step(3), Some(0));
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut c = IndexController::new();
        assert_eq!(c.advance_one_step(0), None);
        assert_eq!(c.retreat_one_step(0), None);
        assert!(!c.can_advance(0));
        assert!(!c.can_retreat(0));
        assert_eq!(c.commit_drag(&outcome(0, 0), 0), None);
    }

    #[test]
    fn test_control_availability() {
        let mut c = IndexController::new();
        assert!(!c.can_retreat(3));
        assert!(c.can_advance(3));
        c.advance_one_step(3);
        c.advance_one_step(3);
        assert!(c.can_retreat(3));
        assert!(!c.can_advance(3));
        assert!(!IndexController::new().can_advance(1));
    }

    #[test]
    fn test_commit_drag() {
        let mut c = IndexController::new();
        assert_eq!(c.commit_drag(&outcome(0, 1), 3), Some(1));
        assert_eq!(c.index(), 1);
        assert_eq!(c.commit_drag(&outcome(1, 1), 3), None);
        assert_eq!(c.index(), 1);
        // List shrank under an in-flight drag
        assert_eq!(c.commit_drag(&outcome(1, 2), 2), None);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_clamp_to_shorter_list() {
        let mut c = IndexController::new();
        c.commit_drag(&outcome(3, 4), 5);
        assert!(c.clamp_to(2));
        assert_eq!(c.index(), 1);
        assert!(!c.clamp_to(2));
        assert!(c.clamp_to(0));
        assert_eq!(c.index(), 0);
        assert!(!c.clamp_to(0));
    }

    #[test]
    fn test_first_render_only() {
        let mut c = IndexController::new();
        assert!(c.observe_render(false, false, 2));
        assert!(!c.observe_render(false, false, 2));

        let mut wide = IndexController::new();
        assert!(!wide.observe_render(true, false, 2));
        assert!(!wide.observe_render(false, false, 2));

        let mut valued = IndexController::new();
        assert!(!valued.observe_render(false, true, 2));

        let mut empty = IndexController::new();
        assert!(!empty.observe_render(false, false, 0));
        assert!(empty.is_mounted());
    }
}
