//! Error types for the choice picker engine
//!
//! Gesture errors are recoverable: the tracker stays idle and the host keeps
//! delivering events. Config errors surface while loading tuning overrides.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a drag session could not be started.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GestureError {
    /// The measured container width cannot anchor page offsets
    #[error("invalid container width: {0}")]
    InvalidWidth(f32),

    /// There are no items to page through
    #[error("cannot drag an empty item list")]
    EmptyItems,

    /// Gestures are not claimed while the wide grid is shown
    #[error("gestures are disabled in wide layout")]
    WideLayout,
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read picker config from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid picker config toml in {origin}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid picker config json in {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "failed to parse picker config {origin}: toml error: {toml}; json error: {json}"
    )]
    Unrecognized {
        origin: String,
        toml: toml::de::Error,
        json: serde_json::Error,
    },

    #[error("{key} out of range: {value} ({expected})")]
    OutOfRange {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },
}
