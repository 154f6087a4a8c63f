//! Picker tuning configuration
//!
//! Every field falls back to the compiled defaults in [`crate::constants`].
//! Overrides can come from a TOML/JSON file or inline JSON in the
//! environment, see [`PickerConfig::load_from_env`].

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::constants::{elastic, snap, swipe};
use crate::easing::EasingKind;
use crate::error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_PATH_ENV: &str = "CHOICE_PICKER_CONFIG_PATH";
/// Environment variable holding an inline JSON config.
pub const CONFIG_JSON_ENV: &str = "CHOICE_PICKER_CONFIG_JSON";

/// Source that produced the picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickerConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Rubber-band resistance past the first and last page.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ElasticConfig {
    /// Asymptotic overshoot limit in px. Zero turns the bounds into a hard
    /// stop.
    pub length: f32,
    /// How quickly the overshoot saturates towards `length`.
    pub strength: f32,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            length: elastic::LENGTH,
            strength: elastic::STRENGTH,
        }
    }
}

/// Thresholds deciding whether a release commits a page change.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Fraction of the container width a drag must travel.
    pub change_index_fraction: f32,
    /// Release velocity in px/ms that commits regardless of distance.
    pub velocity_threshold: f32,
    /// Window of pointer samples used to estimate release velocity.
    pub velocity_window_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            change_index_fraction: swipe::CHANGE_INDEX_TILE_PERCENTAGE,
            velocity_threshold: swipe::SWIPE_VELOCITY,
            velocity_window_ms: swipe::VELOCITY_WINDOW_MS,
        }
    }
}

/// Eased transition used when the track settles on a page.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapConfig {
    pub duration_ms: u64,
    pub easing: EasingKind,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            duration_ms: snap::DURATION_MS,
            easing: snap::EASING,
        }
    }
}

impl SnapConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Top-level picker tuning.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerConfig {
    pub elastic: ElasticConfig,
    pub swipe: SwipeConfig,
    pub snap: SnapConfig,
}

impl PickerConfig {
    /// Load picker configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$CHOICE_PICKER_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$CHOICE_PICKER_CONFIG_JSON` (inline JSON),
    /// 3) a well-known file in the working directory,
    /// 4) defaults if none of the above is present.
    pub fn load_from_env() -> Result<(Self, PickerConfigSource), ConfigError> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, PickerConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw, CONFIG_JSON_ENV)?;
            return Ok((parsed, PickerConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, PickerConfigSource::File(path)));
        }

        Ok((Self::default(), PickerConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => {
                let config: Self = toml::from_str(&contents).map_err(
                    |source| ConfigError::Toml {
                        origin: origin.clone(),
                        source,
                    },
                )?;
                config.validated()
            }
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse a config of unknown format. TOML is tried first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        let config: Self = match toml::from_str(contents) {
            Ok(config) => config,
            Err(toml) => serde_json::from_str(contents).map_err(|json| {
                ConfigError::Unrecognized {
                    origin: origin.to_string(),
                    toml,
                    json,
                }
            })?,
        };
        config.validated()
    }

    pub fn parse_json(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json {
                origin: origin.to_string(),
                source,
            })?;
        config.validated()
    }

    /// Check every tunable against the range the gesture math relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let elastic = &self.elastic;
        if !elastic.length.is_finite() || elastic.length < 0.0 {
            return Err(out_of_range(
                "elastic.length",
                elastic.length,
                "finite and >= 0",
            ));
        }
        if !elastic.strength.is_finite() || elastic.strength <= 0.0 {
            return Err(out_of_range(
                "elastic.strength",
                elastic.strength,
                "finite and > 0",
            ));
        }

        let swipe = &self.swipe;
        if !(swipe.change_index_fraction > 0.0
            && swipe.change_index_fraction <= 1.0)
        {
            return Err(out_of_range(
                "swipe.change_index_fraction",
                swipe.change_index_fraction,
                "within (0, 1]",
            ));
        }
        if !swipe.velocity_threshold.is_finite()
            || swipe.velocity_threshold <= 0.0
        {
            return Err(out_of_range(
                "swipe.velocity_threshold",
                swipe.velocity_threshold,
                "finite and > 0",
            ));
        }
        if swipe.velocity_window_ms == 0 {
            return Err(ConfigError::OutOfRange {
                key: "swipe.velocity_window_ms",
                value: 0.0,
                expected: "> 0",
            });
        }
        Ok(())
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "choice-picker.toml",
            "choice-picker.json",
            "config/choice-picker.toml",
            "config/choice-picker.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

fn out_of_range(
    key: &'static str,
    value: f32,
    expected: &'static str,
) -> ConfigError {
    ConfigError::OutOfRange {
        key,
        value: f64::from(value),
        expected,
    }
}
