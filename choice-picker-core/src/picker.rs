//! The choice picker component
//!
//! Wires the gesture tracker and index controller to the host: props come in
//! through [`ChoicePicker::render`], pointer and button input through the
//! `on_*`/`retreat`/`advance` methods, and the only outputs are the
//! selection-changed callback and [`TrackSurface`] updates.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::PickerConfig;
use crate::constants::layout;
use crate::controller::IndexController;
use crate::error::GestureError;
use crate::gesture::{DragOutcome, GestureTracker, VelocityTracker};
use crate::surface::{TrackSurface, TrackUpdate, Transition};

/// Inputs supplied by the parent on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerProps<T> {
    pub items: Vec<T>,
    /// Externally owned selection.
    pub value: Option<T>,
    /// Show fewer, larger items in the wide grid.
    pub large: bool,
    /// Supplied by the responsive layout detector. Wide shows every item in
    /// a grid and disables gestures.
    pub wide_layout: bool,
}

impl<T> Default for PickerProps<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            value: None,
            large: false,
            wide_layout: false,
        }
    }
}

impl<T> PickerProps<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    pub fn large(mut self, large: bool) -> Self {
        self.large = large;
        self
    }

    pub fn wide_layout(mut self, wide: bool) -> Self {
        self.wide_layout = wide;
        self
    }
}

/// Presentation details handed to the render function with each item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView {
    pub index: usize,
    pub selected: bool,
    /// Delay before the item's entry animation starts.
    pub entry_delay: Duration,
    /// Flex basis as a fraction of the row.
    pub basis: f32,
    /// Width cap in px, if any.
    pub max_width: Option<f32>,
}

type Identity<'a, T, K> = Box<dyn Fn(&T) -> K + 'a>;
type OnChange<'a, T> = Box<dyn FnMut(&T) + 'a>;

/// Swipeable picker over `T` items compared by identity `K`, driving the
/// track surface `S`.
pub struct ChoicePicker<'a, T, K, S> {
    props: PickerProps<T>,
    identity: Identity<'a, T, K>,
    on_change: OnChange<'a, T>,
    surface: S,
    config: PickerConfig,
    tracker: GestureTracker,
    controller: IndexController,
    velocity: VelocityTracker,
}

impl<T, K, S> fmt::Debug for ChoicePicker<'_, T, K, S>
where
    T: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoicePicker")
            .field("props", &self.props)
            .field("surface", &self.surface)
            .field("config", &self.config)
            .field("tracker", &self.tracker)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl<'a, T, S> ChoicePicker<'a, T, T, S>
where
    T: Clone + PartialEq + 'a,
    S: TrackSurface,
{
    /// Picker whose items are their own identity.
    pub fn new(surface: S, on_change: impl FnMut(&T) + 'a) -> Self {
        Self::with_identity(surface, T::clone, on_change)
    }
}

impl<'a, T, K, S> ChoicePicker<'a, T, K, S>
where
    K: PartialEq,
    S: TrackSurface,
{
    /// Picker comparing items through `identity`, e.g. an id field.
    pub fn with_identity(
        surface: S,
        identity: impl Fn(&T) -> K + 'a,
        on_change: impl FnMut(&T) + 'a,
    ) -> Self {
        let config = PickerConfig::default();
        Self {
            props: PickerProps::default(),
            identity: Box::new(identity),
            on_change: Box::new(on_change),
            surface,
            tracker: GestureTracker::new(&config),
            controller: IndexController::new(),
            velocity: VelocityTracker::new(Duration::from_millis(
                config.swipe.velocity_window_ms,
            )),
            config,
        }
    }

    pub fn with_config(mut self, config: PickerConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn set_config(&mut self, config: PickerConfig) {
        self.tracker.set_config(&config);
        self.velocity = VelocityTracker::new(Duration::from_millis(
            config.swipe.velocity_window_ms,
        ));
        self.config = config;
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn props(&self) -> &PickerProps<T> {
        &self.props
    }

    pub fn items(&self) -> &[T] {
        &self.props.items
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Committed page index.
    pub fn index(&self) -> usize {
        self.controller.index()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn is_wide(&self) -> bool {
        self.props.wide_layout
    }

    /// Directional controls are only shown in the compact layout.
    pub fn controls_visible(&self) -> bool {
        !self.props.wide_layout
    }

    pub fn can_retreat(&self) -> bool {
        self.controller.can_retreat(self.props.items.len())
    }

    pub fn can_advance(&self) -> bool {
        self.controller.can_advance(self.props.items.len())
    }

    /// Apply a new set of props. The first call is the mount: in compact
    /// layout, without a value and with items, it selects the first item.
    pub fn render(&mut self, props: PickerProps<T>) {
        let first_render = !self.controller.is_mounted();
        let was_wide = self.props.wide_layout;
        self.props = props;

        let len = self.props.items.len();
        let clamped = self.controller.clamp_to(len);

        if !self.props.wide_layout && (first_render || was_wide || clamped) {
            self.settle(None, Transition::Immediate);
        }

        let has_value = self.props.value.is_some();
        if self
            .controller
            .observe_render(self.props.wide_layout, has_value, len)
        {
            log::debug!("auto-selecting first item on mount");
            self.emit(0);
        }
    }

    /// Begin a drag. `container_width` is the measured page width.
    pub fn on_drag_start(
        &mut self,
        container_width: f32,
    ) -> Result<(), GestureError> {
        if self.props.wide_layout {
            log::warn!("ignoring drag start in wide layout");
            return Err(GestureError::WideLayout);
        }
        let session = self
            .tracker
            .begin(
                container_width,
                self.controller.index(),
                self.props.items.len(),
            )
            .inspect_err(|err| log::warn!("drag rejected: {err}"))?;
        self.velocity.reset();
        self.surface.apply(TrackUpdate::Follow {
            offset_px: session.offset_px,
        });
        Ok(())
    }

    /// Follow the pointer. `delta_x` is the cumulative displacement since
    /// the drag started. Returns the displayed offset while dragging.
    pub fn on_drag_move(&mut self, delta_x: f32) -> Option<f32> {
        let offset_px = self.tracker.drag_to(delta_x)?;
        self.surface.apply(TrackUpdate::Follow { offset_px });
        Some(offset_px)
    }

    /// Release the drag. `velocity_x` is in px/ms. Fires the callback when
    /// the committed index changed, then settles the track.
    pub fn on_drag_end(
        &mut self,
        delta_x: f32,
        velocity_x: f32,
    ) -> Option<DragOutcome> {
        let outcome = self.tracker.release(delta_x, velocity_x)?;
        self.velocity.reset();

        let len = self.props.items.len();
        if let Some(index) = self.controller.commit_drag(&outcome, len) {
            self.emit(index);
        }

        let offset_px = (self.controller.index() == outcome.new_index)
            .then_some(outcome.settle_offset_px);
        self.settle(offset_px, Transition::from_snap(&self.config.snap));
        Some(outcome)
    }

    /// Pointer-down variant of [`Self::on_drag_start`] that also starts
    /// velocity tracking.
    pub fn on_pointer_down(
        &mut self,
        container_width: f32,
        at: Instant,
    ) -> Result<(), GestureError> {
        self.on_drag_start(container_width)?;
        self.velocity.record(0.0, at);
        Ok(())
    }

    pub fn on_pointer_move(
        &mut self,
        delta_x: f32,
        at: Instant,
    ) -> Option<f32> {
        if self.tracker.is_dragging() {
            self.velocity.record(delta_x, at);
        }
        self.on_drag_move(delta_x)
    }

    /// Release using the velocity estimated from recorded pointer samples.
    pub fn on_pointer_release(
        &mut self,
        delta_x: f32,
        at: Instant,
    ) -> Option<DragOutcome> {
        if !self.tracker.is_dragging() {
            return None;
        }
        let velocity_x = self.velocity.velocity_at(delta_x, at);
        self.on_drag_end(delta_x, velocity_x)
    }

    /// "Previous" control. No-op while disabled.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        let len = self.props.items.len();
        match self.controller.retreat_one_step(len) {
            Some(index) => {
                self.emit(index);
                self.settle(None, Transition::from_snap(&self.config.snap));
                true
            }
            None => false,
        }
    }

    /// "Next" control. No-op while disabled.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let len = self.props.items.len();
        match self.controller.advance_one_step(len) {
            Some(index) => {
                self.emit(index);
                self.settle(None, Transition::from_snap(&self.config.snap));
                true
            }
            None => false,
        }
    }

    /// An item was pressed. Requests it as the selection without moving the
    /// committed page.
    pub fn press_item(&mut self, index: usize) -> bool {
        if index >= self.props.items.len() {
            return false;
        }
        self.emit(index);
        true
    }

    /// Whether `item` matches the external value by identity.
    pub fn is_selected(&self, item: &T) -> bool {
        self.props
            .value
            .as_ref()
            .is_some_and(|value| {
                (self.identity)(item) == (self.identity)(value)
            })
    }

    pub fn item_view(&self, index: usize) -> Option<ItemView> {
        let item = self.props.items.get(index)?;
        let layout_key = (self.props.wide_layout, self.props.large);
        let (basis, max_width) = match layout_key {
            (false, _) => (layout::COMPACT_ITEM_BASIS, None),
            (true, true) => (layout::WIDE_LARGE_ITEM_BASIS, None),
            (true, false) => {
                (layout::WIDE_ITEM_BASIS, Some(layout::WIDE_ITEM_MAX_WIDTH))
            }
        };
        let delay_ms = layout::ENTRY_DELAY_BASE_MS
            + layout::ENTRY_DELAY_STEP_MS * index as u64;
        Some(ItemView {
            index,
            selected: self.is_selected(item),
            entry_delay: Duration::from_millis(delay_ms),
            basis,
            max_width,
        })
    }

    /// Run the host's render function over every item, in order.
    pub fn render_items<R>(
        &self,
        mut render: impl FnMut(&T, ItemView) -> R,
    ) -> Vec<R> {
        self.props
            .items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.item_view(index).map(|view| render(item, view))
            })
            .collect()
    }

    fn emit(&mut self, index: usize) {
        if let Some(item) = self.props.items.get(index) {
            (self.on_change)(item);
        }
    }

    fn settle(&mut self, offset_px: Option<f32>, transition: Transition) {
        if self.props.wide_layout {
            return;
        }
        self.surface.apply(TrackUpdate::Settle {
            page: self.controller.index(),
            offset_px,
            transition,
        });
    }
}
