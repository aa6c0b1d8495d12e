//! Logging system for Tally
//!
//! Structured logging on top of `tracing`, with one target per category so the
//! filter can be tuned per category from `LoggingConfig` or `RUST_LOG`.

use crate::config::LoggingConfig;
use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert string to LogLevel
    pub fn parse(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Categories for organizing log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Core,
    Counter,
    Display,
    Input,
    Config,
}

impl LogCategory {
    /// Short name used in configuration files
    pub const fn name(&self) -> &'static str {
        match self {
            LogCategory::Core => "core",
            LogCategory::Counter => "counter",
            LogCategory::Display => "display",
            LogCategory::Input => "input",
            LogCategory::Config => "config",
        }
    }

    /// `tracing` target the category logs under
    pub const fn target(&self) -> &'static str {
        match self {
            LogCategory::Core => "tally::core",
            LogCategory::Counter => "tally::counter",
            LogCategory::Display => "tally::display",
            LogCategory::Input => "tally::input",
            LogCategory::Config => "tally::config",
        }
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build `EnvFilter` directives from a logging configuration
///
/// Category names map to `tally::<name>`; keys that already contain `::` are
/// passed through so other crates can be tuned too.
pub fn filter_directives(config: &LoggingConfig) -> String {
    let mut directives = vec![config.level.as_str().to_string()];
    for (category, level) in &config.category_levels {
        let target = if category.contains("::") {
            category.clone()
        } else {
            format!("tally::{}", category)
        };
        directives.push(format!("{}={}", target, level));
    }
    directives.join(",")
}

/// Whether log output should be colourised
///
/// Logs go to stderr, so colour is only used when stderr is a terminal.
pub fn use_ansi(config: &LoggingConfig, stderr_is_terminal: bool) -> bool {
    config.ansi && stderr_is_terminal
}

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize the logging system
///
/// Logs are written to stderr; stdout belongs to the host. `RUST_LOG` takes
/// precedence over the configured levels. Calling this more than once is a
/// no-op.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directives(config)).map_err(|e| {
            TallyError::configuration(format!("invalid log filter: {}", e))
        })?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(config.with_target)
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi(config, std::io::stderr().is_terminal()))
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| TallyError::initialization(format!("failed to install subscriber: {}", e)))?;

    let _ = INITIALIZED.set(());
    Ok(())
}

/// Whether [`init`] has completed
pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}

/// Convenience macros for categorised logging
#[macro_export]
macro_rules! tally_trace {
    ($category:expr, $($arg:tt)*) => {
        ::tracing::trace!(target: $category.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! tally_debug {
    ($category:expr, $($arg:tt)*) => {
        ::tracing::debug!(target: $category.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! tally_info {
    ($category:expr, $($arg:tt)*) => {
        ::tracing::info!(target: $category.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! tally_warn {
    ($category:expr, $($arg:tt)*) => {
        ::tracing::warn!(target: $category.target(), $($arg)*)
    };
}

#[macro_export]
macro_rules! tally_error {
    ($category:expr, $($arg:tt)*) => {
        ::tracing::error!(target: $category.target(), $($arg)*)
    };
}
