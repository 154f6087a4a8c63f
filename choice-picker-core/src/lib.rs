//! Choice picker interaction engine
//!
//! A swipeable, paged choice picker without the paint: this crate tracks
//! horizontal drags, applies elastic resistance past the first and last
//! item, decides on release whether the drag changes page (distance or
//! velocity, at most one step), and keeps the committed page consistent with
//! directional controls and first-mount auto-selection.
//!
//! Notes
//! - Rendering stays with the host. Track positioning is requested through
//!   [`surface::TrackSurface`]; selections through the callback passed to
//!   [`ChoicePicker`].
//! - Tuning lives in [`constants`] and can be overridden with
//!   [`config::PickerConfig`].

pub mod animator;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod elastic;
pub mod error;
pub mod gesture;
pub mod messages;
pub mod picker;
pub mod surface;

pub use animator::SnapAnimator;
pub use config::{PickerConfig, PickerConfigSource};
pub use controller::IndexController;
pub use easing::EasingKind;
pub use error::{ConfigError, GestureError};
pub use gesture::{DragOutcome, DragSession, GestureTracker, SwipeDirection};
pub use messages::{PickerMessage, update};
pub use picker::{ChoicePicker, ItemView, PickerProps};
pub use surface::{RecordingSurface, TrackSurface, TrackUpdate, Transition};
