//! Rendering-side track surface
//!
//! The picker never paints. It tells the rendering layer where the paged
//! track should sit and whether the move is eased.

use std::time::Duration;

use serde::Serialize;

use crate::config::SnapConfig;
use crate::easing::EasingKind;

/// How the track moves to a new offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Jump immediately; used while the track follows the pointer.
    Immediate,
    Eased {
        #[serde(serialize_with = "millis::serialize")]
        duration: Duration,
        easing: EasingKind,
    },
}

impl Transition {
    pub fn from_snap(cfg: &SnapConfig) -> Self {
        Self::Eased {
            duration: cfg.duration(),
            easing: cfg.easing,
        }
    }
}

/// A positioning command for the rendered track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "update", rename_all = "snake_case")]
pub enum TrackUpdate {
    /// Pointer-driven offset (px) with transitions disabled.
    Follow { offset_px: f32 },
    /// Rest on `page`. `offset_px` is known when a drag measured the width;
    /// otherwise the renderer positions the track at `-100% * page`.
    Settle {
        page: usize,
        offset_px: Option<f32>,
        transition: Transition,
    },
}

/// Implemented by the rendering layer that owns the visual track.
pub trait TrackSurface {
    fn apply(&mut self, update: TrackUpdate);
}

impl<F> TrackSurface for F
where
    F: FnMut(TrackUpdate),
{
    fn apply(&mut self, update: TrackUpdate) {
        self(update)
    }
}

/// Surface that stores every update; handy for replays and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub updates: Vec<TrackUpdate>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&TrackUpdate> {
        self.updates.last()
    }

    /// Drain recorded updates, oldest first.
    pub fn take(&mut self) -> Vec<TrackUpdate> {
        std::mem::take(&mut self.updates)
    }
}

impl TrackSurface for RecordingSurface {
    fn apply(&mut self, update: TrackUpdate) {
        self.updates.push(update);
    }
}

mod millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}
