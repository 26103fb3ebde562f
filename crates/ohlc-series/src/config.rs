// File: crates/ohlc-series/src/config.rs
// Summary: Series styling defaults loaded from TOML and applied through the builder.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::stroke::StrokeStyle;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read series defaults: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse series defaults: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Styling applied to a series before call-site configuration.
/// Every value is optional; absent values leave the series untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesDefaults {
    pub gap: Option<f64>,
    pub spacing: Option<f64>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub line: StrokeStyle,
    pub border: StrokeStyle,
    pub highlight: HighlightDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightDefaults {
    pub visible: Option<bool>,
    pub opacity: Option<f64>,
    pub line: StrokeStyle,
    pub border: StrokeStyle,
}

impl SeriesDefaults {
    /// Load defaults from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let defaults = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded series defaults");
        Ok(defaults)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Like [`Self::load`], but falls back to empty defaults on any error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(defaults) => defaults,
            Err(err) => {
                warn!(path = %path.as_ref().display(), error = %err, "using empty series defaults");
                Self::default()
            }
        }
    }
}
