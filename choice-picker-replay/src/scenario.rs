//! Scripted picker scenarios
//!
//! A scenario is the initial props plus an ordered list of input events.
//! Files are TOML or JSON; the extension picks the parser, anything else is
//! tried as TOML first and JSON second.

use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use choice_picker_core::PickerMessage;
use serde::{Deserialize, Serialize};

fn default_container_width() -> f32 {
    320.0
}

fn default_follow_selection() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Scenario {
    pub items: Vec<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub wide: bool,
    #[serde(default)]
    pub large: bool,
    /// Page width used by `swipe` and `pointer_down` events that do not
    /// carry their own.
    #[serde(default = "default_container_width")]
    pub container_width: f32,
    /// Feed every selection back as the external value, like a controlled
    /// parent component would.
    #[serde(default = "default_follow_selection")]
    pub follow_selection: bool,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    DragStart {
        #[serde(default)]
        container_width: Option<f32>,
    },
    DragMove {
        delta_x: f32,
    },
    DragEnd {
        delta_x: f32,
        #[serde(default)]
        velocity_x: f32,
    },
    /// Start, one move and release in a single step.
    Swipe {
        delta_x: f32,
        #[serde(default)]
        velocity_x: f32,
    },
    /// Timestamped pointer input; velocity is estimated from the samples.
    PointerDown {
        at_ms: u64,
        #[serde(default)]
        container_width: Option<f32>,
    },
    PointerMove {
        delta_x: f32,
        at_ms: u64,
    },
    PointerUp {
        delta_x: f32,
        at_ms: u64,
    },
    Retreat,
    Advance,
    PressItem {
        index: usize,
    },
    /// Parent re-render. Omitted fields keep their current value; `clear`
    /// drops the external value.
    Render {
        #[serde(default)]
        items: Option<Vec<String>>,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        clear: bool,
        #[serde(default)]
        wide: Option<bool>,
        #[serde(default)]
        large: Option<bool>,
    },
}

impl ScenarioEvent {
    /// The plain picker message for events that map onto one directly.
    pub fn as_message(&self, container_width: f32) -> Option<PickerMessage> {
        Some(match *self {
            Self::DragStart {
                container_width: width,
            } => PickerMessage::DragStart {
                container_width: width.unwrap_or(container_width),
            },
            Self::DragMove { delta_x } => PickerMessage::DragMove { delta_x },
            Self::DragEnd {
                delta_x,
                velocity_x,
            } => PickerMessage::DragEnd {
                delta_x,
                velocity_x,
            },
            Self::Retreat => PickerMessage::Retreat,
            Self::Advance => PickerMessage::Advance,
            Self::PressItem { index } => PickerMessage::PressItem { index },
            Self::Swipe { .. }
            | Self::PointerDown { .. }
            | Self::PointerMove { .. }
            | Self::PointerUp { .. }
            | Self::Render { .. } => return None,
        })
    }

    /// Short label used in transcripts.
    pub fn label(&self) -> String {
        match self {
            Self::DragStart { container_width } => match container_width {
                Some(width) => format!("drag_start width={width}"),
                None => "drag_start".to_string(),
            },
            Self::DragMove { delta_x } => format!("drag_move dx={delta_x}"),
            Self::DragEnd {
                delta_x,
                velocity_x,
            } => format!("drag_end dx={delta_x} vx={velocity_x}"),
            Self::Swipe {
                delta_x,
                velocity_x,
            } => format!("swipe dx={delta_x} vx={velocity_x}"),
            Self::PointerDown { at_ms, .. } => {
                format!("pointer_down t={at_ms}ms")
            }
            Self::PointerMove { delta_x, at_ms } => {
                format!("pointer_move dx={delta_x} t={at_ms}ms")
            }
            Self::PointerUp { delta_x, at_ms } => {
                format!("pointer_up dx={delta_x} t={at_ms}ms")
            }
            Self::Retreat => "retreat".to_string(),
            Self::Advance => "advance".to_string(),
            Self::PressItem { index } => format!("press_item {index}"),
            Self::Render { .. } => "render".to_string(),
        }
    }
}

impl Scenario {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read scenario from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&contents).with_context(|| {
                    format!("invalid scenario {}", path.display())
                })
            }
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid scenario {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse scenario {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }
}
