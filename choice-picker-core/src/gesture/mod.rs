//! Gesture tracking for the paged track
//!
//! Converts raw horizontal pointer motion into a displayed track offset and
//! decides, on release, whether the drag commits a page change. The math is
//! pure; side effects on the rendered track go through
//! [`crate::surface::TrackSurface`] and are issued by the picker.

pub mod decision;
pub mod session;
pub mod tracker;
pub mod velocity;

pub use decision::{SwipeDirection, decide_direction};
pub use session::{DragOutcome, DragSession};
pub use tracker::{GesturePhase, GestureTracker};
pub use velocity::{PointerSample, VelocityTracker};
