//! Two-state gesture tracker: `Idle -> Dragging -> Idle`

use crate::config::{ElasticConfig, PickerConfig, SwipeConfig};
use crate::error::GestureError;

use super::session::{DragOutcome, DragSession};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Translates pointer motion into track offsets and release decisions.
///
/// There is no cancelled state: every release is resolved as a potential
/// commit, and a drag without movement simply resolves to the start index.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    elastic: ElasticConfig,
    swipe: SwipeConfig,
    phase: GesturePhase,
}

impl GestureTracker {
    pub fn new(cfg: &PickerConfig) -> Self {
        Self {
            elastic: cfg.elastic,
            swipe: cfg.swipe,
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            GesturePhase::Dragging(session) => Some(session),
            GesturePhase::Idle => None,
        }
    }

    /// Replace tuning. An active session keeps its captured frame of
    /// reference and resolves with the new thresholds.
    pub fn set_config(&mut self, cfg: &PickerConfig) {
        self.elastic = cfg.elastic;
        self.swipe = cfg.swipe;
    }

    /// Start a drag anchored at `start_index`. A session that was never
    /// released is replaced.
    pub fn begin(
        &mut self,
        container_width: f32,
        start_index: usize,
        item_count: usize,
    ) -> Result<DragSession, GestureError> {
        if !container_width.is_finite() || container_width <= 0.0 {
            return Err(GestureError::InvalidWidth(container_width));
        }
        if item_count == 0 {
            return Err(GestureError::EmptyItems);
        }
        if let GesturePhase::Dragging(stale) = self.phase {
            log::debug!(
                "restarting drag; previous session from index {} never released",
                stale.start_index
            );
        }

        let session =
            DragSession::new(container_width, start_index, item_count);
        self.phase = GesturePhase::Dragging(session);
        log::debug!(
            "drag start: index={} width={} items={}",
            start_index,
            container_width,
            item_count
        );
        Ok(session)
    }

    /// Update the displayed offset for a cumulative delta since drag start.
    /// Returns `None` while idle.
    pub fn drag_to(&mut self, delta_x: f32) -> Option<f32> {
        let GesturePhase::Dragging(session) = &mut self.phase else {
            return None;
        };
        let offset = session.displayed_offset(delta_x, &self.elastic);
        session.offset_px = offset;
        log::trace!("drag move: dx={delta_x} offset={offset}");
        Some(offset)
    }

    /// End the drag and resolve it. Returns `None` when no drag was active.
    pub fn release(
        &mut self,
        delta_x: f32,
        velocity_x: f32,
    ) -> Option<DragOutcome> {
        let GesturePhase::Dragging(session) =
            std::mem::take(&mut self.phase)
        else {
            return None;
        };
        let outcome = session.resolve(delta_x, velocity_x, &self.swipe);
        log::debug!(
            "drag release: dx={} vx={} direction={:?} index {} -> {}",
            delta_x,
            velocity_x,
            outcome.direction,
            outcome.start_index,
            outcome.new_index
        );
        Some(outcome)
    }
}
