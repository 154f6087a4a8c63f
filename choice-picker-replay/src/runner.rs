//! Drives a `ChoicePicker` through a scenario and records what it did

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use choice_picker_core::{
    ChoicePicker, PickerConfig, PickerProps, RecordingSurface, TrackUpdate,
    update,
};
use serde::Serialize;

use crate::scenario::{Scenario, ScenarioEvent};

/// What a single step produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    pub step: usize,
    pub event: String,
    /// Items passed to the selection-changed callback, in order.
    pub selections: Vec<String>,
    pub track: Vec<TrackUpdate>,
    /// Committed index after the step.
    pub index: usize,
    /// Set when the picker refused the input (e.g. a drag in wide layout).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
    /// External value at the end of the run.
    pub final_value: Option<String>,
}

impl Transcript {
    /// Every selection reported during the run, in order.
    pub fn selections(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.selections.iter().map(String::as_str))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(
                f,
                "#{:<3} {:<32} index={}",
                entry.step, entry.event, entry.index
            )?;
            if let Some(reason) = &entry.rejected {
                write!(f, " rejected: {reason}")?;
            }
            writeln!(f)?;
            for selection in &entry.selections {
                writeln!(f, "     -> selected {selection:?}")?;
            }
            for update in &entry.track {
                writeln!(f, "     ~ {}", describe_update(update))?;
            }
        }
        match &self.final_value {
            Some(value) => writeln!(f, "final value: {value:?}"),
            None => writeln!(f, "final value: none"),
        }
    }
}

fn describe_update(update: &TrackUpdate) -> String {
    match update {
        TrackUpdate::Follow { offset_px } => {
            format!("follow {offset_px:.2}px")
        }
        TrackUpdate::Settle {
            page,
            offset_px: Some(offset_px),
            transition,
        } => {
            format!("settle page {page} at {offset_px:.2}px ({transition:?})")
        }
        TrackUpdate::Settle {
            page,
            offset_px: None,
            transition,
        } => format!("settle page {page} ({transition:?})"),
    }
}

type Picker = ChoicePicker<'static, String, String, RecordingSurface>;

/// Run `scenario` to completion with the given tuning.
pub fn run_scenario(
    scenario: &Scenario,
    config: PickerConfig,
) -> anyhow::Result<Transcript> {
    config.validate()?;

    let selected: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&selected);
    let mut picker: Picker =
        ChoicePicker::new(RecordingSurface::new(), move |item: &String| {
            sink.borrow_mut().push(item.clone())
        })
        .with_config(config);

    let mut props = PickerProps::new(scenario.items.clone())
        .with_value(scenario.value.clone())
        .large(scenario.large)
        .wide_layout(scenario.wide);
    let epoch = Instant::now();
    let mut transcript = Transcript::default();

    picker.render(props.clone());
    let mut step = record(&mut picker, &selected, 0, "mount".into(), None);
    follow(scenario, &mut picker, &mut props, &step.selections);
    transcript.entries.push(step);

    for (i, event) in scenario.events.iter().enumerate() {
        let rejected =
            apply_event(scenario, &mut picker, &mut props, event, epoch);
        if let Some(reason) = &rejected {
            log::warn!("step {}: {} rejected: {reason}", i + 1, event.label());
        }
        step =
            record(&mut picker, &selected, i + 1, event.label(), rejected);
        follow(scenario, &mut picker, &mut props, &step.selections);
        transcript.entries.push(step);
    }

    transcript.final_value = props.value;
    Ok(transcript)
}

fn apply_event(
    scenario: &Scenario,
    picker: &mut Picker,
    props: &mut PickerProps<String>,
    event: &ScenarioEvent,
    epoch: Instant,
) -> Option<String> {
    let at = |ms: u64| epoch + Duration::from_millis(ms);

    if let Some(msg) = event.as_message(scenario.container_width) {
        return update(picker, msg).err().map(|err| err.to_string());
    }

    match event {
        ScenarioEvent::Swipe {
            delta_x,
            velocity_x,
        } => {
            if let Err(err) = picker.on_drag_start(scenario.container_width) {
                return Some(err.to_string());
            }
            picker.on_drag_move(*delta_x);
            picker.on_drag_end(*delta_x, *velocity_x);
        }
        ScenarioEvent::PointerDown {
            at_ms,
            container_width,
        } => {
            let width = container_width.unwrap_or(scenario.container_width);
            if let Err(err) = picker.on_pointer_down(width, at(*at_ms)) {
                return Some(err.to_string());
            }
        }
        ScenarioEvent::PointerMove { delta_x, at_ms } => {
            picker.on_pointer_move(*delta_x, at(*at_ms));
        }
        ScenarioEvent::PointerUp { delta_x, at_ms } => {
            picker.on_pointer_release(*delta_x, at(*at_ms));
        }
        ScenarioEvent::Render {
            items,
            value,
            clear,
            wide,
            large,
        } => {
            if let Some(items) = items {
                props.items = items.clone();
            }
            if *clear {
                props.value = None;
            } else if value.is_some() {
                props.value = value.clone();
            }
            if let Some(wide) = wide {
                props.wide_layout = *wide;
            }
            if let Some(large) = large {
                props.large = *large;
            }
            picker.render(props.clone());
        }
        ScenarioEvent::DragStart { .. }
        | ScenarioEvent::DragMove { .. }
        | ScenarioEvent::DragEnd { .. }
        | ScenarioEvent::Retreat
        | ScenarioEvent::Advance
        | ScenarioEvent::PressItem { .. } => {}
    }
    None
}

fn record(
    picker: &mut Picker,
    selected: &Rc<RefCell<Vec<String>>>,
    step: usize,
    event: String,
    rejected: Option<String>,
) -> TranscriptEntry {
    TranscriptEntry {
        step,
        event,
        selections: selected.borrow_mut().drain(..).collect(),
        track: picker.surface_mut().take(),
        index: picker.index(),
        rejected,
    }
}

/// Controlled-parent behaviour: adopt the latest selection as the value
/// and re-render.
fn follow(
    scenario: &Scenario,
    picker: &mut Picker,
    props: &mut PickerProps<String>,
    selections: &[String],
) {
    if !scenario.follow_selection {
        return;
    }
    let Some(latest) = selections.last() else {
        return;
    };
    props.value = Some(latest.clone());
    picker.render(props.clone());
}
