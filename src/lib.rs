//! Tally - a headless, reactive counter screen
//!
//! Tally keeps the counter logic in a plain `CounterController` that talks to
//! the outside world only through two seams: a `DisplaySurface` it writes text
//! to, and an `InputSource` it registers its increment and reset handlers on.
//! `tally-widgets` provides headless implementations of both, plus the
//! `CounterScreen` that wires them together.
//!
//! ```rust
//! use tally_sdk::prelude::*;
//!
//! let screen = CounterScreen::new();
//! screen.dispatch(InputEvent::Increment);
//! screen.dispatch(InputEvent::Increment);
//! assert_eq!(screen.text(), "2");
//!
//! screen.dispatch(InputEvent::Reset);
//! assert_eq!(screen.text(), "0");
//! ```

pub use tally_core;
pub use tally_widgets;

use tally_core::{Result, TallyConfig};

/// Unified prelude module that exports all commonly used types
pub mod prelude {
    pub use tally_widgets::prelude::*;
}

/// Initialize every Tally module with default configuration
pub fn init_all() -> Result<()> {
    init_with_config(&TallyConfig::default())
}

/// Initialize every Tally module
pub fn init_with_config(config: &TallyConfig) -> Result<()> {
    tally_core::init_with(config)?;
    tally_widgets::init()?;
    Ok(())
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init_all() {
        // Repeated initialization must not fail
        assert!(init_all().is_ok());
        assert!(init_all().is_ok());
    }
}
