//! Configuration for Tally
//!
//! Configuration is plain serde data. Files are RON or JSON, picked by extension,
//! and every field falls back to its default when omitted.

use crate::counter::OverflowPolicy;
use crate::error::{ErrorContext, Result, TallyError};
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Counter behaviour
    pub counter: CounterConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to everything without a category override
    pub level: LogLevel,
    /// Category-specific levels (category name -> level)
    pub category_levels: BTreeMap<String, LogLevel>,
    /// Print the event target next to each message
    pub with_target: bool,
    /// Colourise output
    pub ansi: bool,
}

/// Counter behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// What `increment` does at `u64::MAX`
    pub overflow: OverflowPolicy,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let mut category_levels = BTreeMap::new();
        // Per-click traces are noisy; keep them out unless asked for.
        category_levels.insert("input".to_string(), LogLevel::Warn);

        Self {
            level: LogLevel::Info,
            category_levels,
            with_target: true,
            ansi: true,
        }
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "ron" => Some(ConfigFormat::Ron),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

impl TallyConfig {
    /// Parse a RON document
    pub fn from_ron_str(source: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| {
            TallyError::configuration(format!("invalid RON configuration: {}", e))
        })
    }

    /// Parse a JSON document
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| {
            TallyError::configuration(format!("invalid JSON configuration: {}", e))
        })
    }

    /// Parse a document in the given format
    pub fn parse(source: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Ron => Self::from_ron_str(source),
            ConfigFormat::Json => Self::from_json_str(source),
        }
    }

    /// Load configuration from a `.ron` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let context = || {
            ErrorContext::new("load", "config").with_metadata("path", path.display().to_string())
        };

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            TallyError::configuration("unsupported configuration file extension")
                .with_context(context())
        })?;
        let source = std::fs::read_to_string(path)?;

        Self::parse(&source, format).map_err(|e| e.with_context(context()))
    }

    /// Render as pretty RON
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()).map_err(|e| {
            TallyError::configuration(format!("failed to serialize configuration: {}", e))
        })
    }
}
