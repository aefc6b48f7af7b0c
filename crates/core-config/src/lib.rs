//! Configuration loading and parsing.
//!
//! Parses `qed.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [buffer]
//! initial_capacity = 1
//!
//! [calculator]
//! stack_limit = 32
//!
//! [layout]
//! orientation = "vertical"   # or "horizontal"
//! ```
//!
//! Every field has a default. A missing file yields defaults silently; a file
//! that fails to parse yields defaults with a warning. Unknown fields are
//! ignored so older binaries tolerate newer files.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "qed.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BufferConfig {
    #[serde(default = "BufferConfig::default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::default_initial_capacity(),
        }
    }
}

impl BufferConfig {
    const fn default_initial_capacity() -> usize {
        1
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    #[serde(default = "CalculatorConfig::default_stack_limit")]
    pub stack_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            stack_limit: Self::default_stack_limit(),
        }
    }
}

impl CalculatorConfig {
    const fn default_stack_limit() -> usize {
        32
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrientationSetting {
    /// Panes side by side.
    #[default]
    Vertical,
    /// Panes stacked.
    Horizontal,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    #[serde(default)]
    pub orientation: OrientationSetting,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub buffer: BufferConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub path: Option<PathBuf>,
    pub file: ConfigFile, // parsed (or default) data
}

/// Config path: local working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("qed").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_missing_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Initial buffer capacity, raised to 1 when configured as 0.
    pub fn initial_capacity(&self) -> usize {
        let raw = self.file.buffer.initial_capacity;
        if raw == 0 {
            info!(target: "config", raw, clamped = 1, "initial_capacity_clamped");
        }
        raw.max(1)
    }

    pub fn stack_limit(&self) -> usize {
        self.file.calculator.stack_limit
    }

    pub fn orientation(&self) -> OrientationSetting {
        self.file.layout.orientation
    }
}
