//! Scenario replay for the choice picker engine.
//!
//! Loads scripted input (drags, pointer samples, button presses, parent
//! re-renders), runs it against a real `ChoicePicker`, and reports every
//! selection callback and track update. The `choice-picker-replay` binary is
//! a thin CLI over [`run_scenario`].

pub mod logging;
pub mod runner;
pub mod scenario;

pub use runner::{Transcript, TranscriptEntry, run_scenario};
pub use scenario::{Scenario, ScenarioEvent};
