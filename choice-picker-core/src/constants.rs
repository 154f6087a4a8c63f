//! Choice picker constants
//!
//! Compiled defaults for the swipe interaction. `PickerConfig` falls back to
//! these values, so tuning the feel of every picker happens here.

/// Rubber-band resistance applied when dragging past the first or last item.
pub mod elastic {
    /// Maximum distance (px) the track may overshoot a bound.
    pub const LENGTH: f32 = 60.0;
    /// Saturation rate of the resistance curve. Higher values reach
    /// `LENGTH` faster.
    pub const STRENGTH: f32 = 0.008;
}

/// Release heuristics deciding whether a drag changes page.
pub mod swipe {
    /// Fraction of the container width a drag must exceed to change page.
    /// Lower is more sensitive.
    pub const CHANGE_INDEX_TILE_PERCENTAGE: f32 = 0.5;
    /// Release velocity (px/ms) that changes page regardless of distance.
    /// Higher is less sensitive.
    pub const SWIPE_VELOCITY: f32 = 0.5;
    /// Look-back window (ms) used when estimating release velocity.
    pub const VELOCITY_WINDOW_MS: u64 = 100;
}

/// Settle transition re-enabled once a drag ends.
pub mod snap {
    use crate::easing::EasingKind;

    /// Duration (ms) of the eased settle onto a page boundary.
    pub const DURATION_MS: u64 = 300;
    /// Easing used for the settle transition.
    pub const EASING: EasingKind = EasingKind::EaseInOut;
}

/// Item presentation constants shared by both layouts.
pub mod layout {
    /// Flex basis of an item in the wide grid.
    pub const WIDE_ITEM_BASIS: f32 = 1.0 / 3.0;
    /// Flex basis of an item in the wide grid when `large` is set.
    pub const WIDE_LARGE_ITEM_BASIS: f32 = 0.5;
    /// Flex basis of an item in the compact (paged) layout.
    pub const COMPACT_ITEM_BASIS: f32 = 1.0;
    /// Width cap (px) for regular items in the wide grid.
    pub const WIDE_ITEM_MAX_WIDTH: f32 = 300.0;
    /// Entry animation delay (ms) of the first item.
    pub const ENTRY_DELAY_BASE_MS: u64 = 200;
    /// Additional entry animation delay (ms) per item index.
    pub const ENTRY_DELAY_STEP_MS: u64 = 100;
}
