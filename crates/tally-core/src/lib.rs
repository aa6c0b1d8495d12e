//! Core functionality for Tally
//!
//! This crate provides the counter controller together with the pieces it is
//! built from: a reactive `Signal`, the display and input seams it talks
//! through, and the ambient error, configuration and logging support.

pub mod config;
pub mod counter;
pub mod display;
pub mod error;
pub mod event;
pub mod logging;
pub mod state;

pub use config::{ConfigFormat, CounterConfig, LoggingConfig, TallyConfig};
pub use counter::{CounterController, OverflowPolicy};
pub use display::{DisplayFn, DisplaySurface};
pub use error::{ErrorContext, Result, TallyError, TallyResult};
pub use event::{EventHandler, EventResult, InputEvent, InputSource};
pub use logging::{LogCategory, LogLevel};
pub use state::{Signal, Subscription};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        config::TallyConfig,
        counter::{CounterController, OverflowPolicy},
        display::{DisplayFn, DisplaySurface},
        error::{Result, TallyError},
        event::{EventResult, InputEvent, InputSource},
        state::Signal,
    };
}

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core with default configuration
pub fn init() -> Result<()> {
    init_with(&TallyConfig::default())
}

/// Initialize the core, installing the logging subscriber from `config`
pub fn init_with(config: &TallyConfig) -> Result<()> {
    logging::init(&config.logging).map_err(|e| e.with_context(ErrorContext::new("init", "core")))?;

    tally_info!(LogCategory::Core, "Tally Core v{} initialized", VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
