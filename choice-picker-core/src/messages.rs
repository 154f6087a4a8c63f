//! Input messages and their dispatch onto a picker

use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::picker::ChoicePicker;
use crate::surface::TrackSurface;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickerMessage {
    // Gestures
    DragStart { container_width: f32 },
    /// Cumulative displacement since the drag started.
    DragMove { delta_x: f32 },
    /// Release with velocity in px/ms.
    DragEnd { delta_x: f32, velocity_x: f32 },

    // Directional controls
    Retreat,
    Advance,

    PressItem { index: usize },
}

/// Apply `msg` to `picker`. Only a rejected drag start is an error; every
/// other message is a no-op when it does not apply.
pub fn update<T, K, S>(
    picker: &mut ChoicePicker<'_, T, K, S>,
    msg: PickerMessage,
) -> Result<(), GestureError>
where
    K: PartialEq,
    S: TrackSurface,
{
    match msg {
        PickerMessage::DragStart { container_width } => {
            picker.on_drag_start(container_width)?;
        }
        PickerMessage::DragMove { delta_x } => {
            picker.on_drag_move(delta_x);
        }
        PickerMessage::DragEnd {
            delta_x,
            velocity_x,
        } => {
            picker.on_drag_end(delta_x, velocity_x);
        }
        PickerMessage::Retreat => {
            picker.retreat();
        }
        PickerMessage::Advance => {
            picker.advance();
        }
        PickerMessage::PressItem { index } => {
            picker.press_item(index);
        }
    }
    Ok(())
}
