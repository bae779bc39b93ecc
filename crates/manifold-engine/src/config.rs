//! Engine configuration.
//!
//! Every knob has a default matching the reality model; a TOML file may
//! override any subset. Validation happens at load time so the engine never
//! has to re-check ranges.

use serde::Deserialize;
use std::path::Path;

use manifold_quantum::assembler::{REDUCTION_THRESHOLD, ROW_WIDTH_EVEN, ROW_WIDTH_ODD};
use manifold_signal::gate::{DEFAULT_COHERENCE_THRESHOLD, DEFAULT_NOISE_THRESHOLD};

/// Default pressure when the caller does not supply one.
pub const DEFAULT_PRESSURE: f64 = 0.7;

/// Errors raised while loading or validating a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("config value out of range: {0}")]
    OutOfRange(String),
}

/// Tunable parameters of one engine instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    /// Pressure used by `create_with_default_pressure`, in [0,1].
    pub default_pressure: f64,
    /// Silence Gate noise floor, in [0,1].
    pub noise_threshold: f64,
    /// Silence Gate coherence floor, in [0,1].
    pub coherence_threshold: f64,
    /// Pixel count above which the assembler collapses the collection.
    pub reduction_threshold: usize,
    /// Grid slots on even-indexed rows.
    pub row_width_even: usize,
    /// Grid slots on odd-indexed rows.
    pub row_width_odd: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_pressure: DEFAULT_PRESSURE,
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
            coherence_threshold: DEFAULT_COHERENCE_THRESHOLD,
            reduction_threshold: REDUCTION_THRESHOLD,
            row_width_even: ROW_WIDTH_EVEN,
            row_width_odd: ROW_WIDTH_ODD,
        }
    }
}

impl EngineConfig {
    /// Load a config from a TOML file. Missing fields fall back to defaults.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: EngineConfig =
            toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("default_pressure", self.default_pressure),
            ("noise_threshold", self.noise_threshold),
            ("coherence_threshold", self.coherence_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange(format!(
                    "{name} must be in [0,1], got {value}"
                )));
            }
        }
        if self.reduction_threshold == 0 {
            return Err(ConfigError::OutOfRange(
                "reduction_threshold must be at least 1".to_string(),
            ));
        }
        if self.row_width_even == 0 || self.row_width_odd == 0 {
            return Err(ConfigError::OutOfRange(
                "row widths must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
