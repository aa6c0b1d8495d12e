//! Input events and the input source seam

use crate::error::TallyError;
use std::fmt;
use std::str::FromStr;

/// Result of event handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// A handler ran
    Handled,
    /// Nothing was bound, or the source refused the event
    Ignored,
}

/// Discrete user-triggered events the counter screen understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// "increment requested"
    Increment,
    /// "reset requested"
    Reset,
}

impl InputEvent {
    /// All events, in binding order
    pub const ALL: [InputEvent; 2] = [InputEvent::Increment, InputEvent::Reset];

    /// Canonical handler name
    pub const fn name(&self) -> &'static str {
        match self {
            InputEvent::Increment => "increment",
            InputEvent::Reset => "reset",
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputEvent {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increment" | "inc" | "+" => Ok(InputEvent::Increment),
            "reset" | "r" | "0" => Ok(InputEvent::Reset),
            _ => Err(TallyError::invalid_input(s.trim())),
        }
    }
}

/// Handler invoked when an input event fires
pub type EventHandler = Box<dyn Fn() + Send + Sync>;

/// Anything that can deliver [`InputEvent`]s to registered handlers
///
/// Binding an event that already has a handler replaces it.
pub trait InputSource {
    /// Register `handler` for `event`
    fn bind(&mut self, event: InputEvent, handler: EventHandler);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        for input in ["increment", "INC", "+", "  Increment "] {
            assert_eq!(input.parse::<InputEvent>().unwrap(), InputEvent::Increment);
        }
        for input in ["reset", "R", "0"] {
            assert_eq!(input.parse::<InputEvent>().unwrap(), InputEvent::Reset);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "decrement".parse::<InputEvent>().unwrap_err();
        assert!(matches!(err, TallyError::InvalidInput { ref input } if input == "decrement"));
        assert!("".parse::<InputEvent>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(InputEvent::Increment.to_string(), "increment");
        assert_eq!(InputEvent::Reset.to_string(), "reset");
    }
}
