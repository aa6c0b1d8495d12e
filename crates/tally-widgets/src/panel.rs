//! Button panel: the counter screen's input source

use crate::button::Button;
use tally_core::{
    event::{EventHandler, EventResult, InputEvent, InputSource},
    logging::LogCategory,
    tally_trace,
};

/// Caption of the increment button
pub const INCREMENT_CAPTION: &str = "+";
/// Caption of the reset button
pub const RESET_CAPTION: &str = "Reset";

/// The two buttons of the counter screen
#[derive(Debug)]
pub struct ButtonPanel {
    increment: Button,
    reset: Button,
}

impl ButtonPanel {
    /// Create a panel with the default captions and no handlers
    pub fn new() -> Self {
        Self::with_buttons(Button::new(INCREMENT_CAPTION), Button::new(RESET_CAPTION))
    }

    /// Create a panel from custom buttons
    pub fn with_buttons(increment: Button, reset: Button) -> Self {
        Self { increment, reset }
    }

    /// Button delivering `event`
    pub fn button(&self, event: InputEvent) -> &Button {
        match event {
            InputEvent::Increment => &self.increment,
            InputEvent::Reset => &self.reset,
        }
    }

    fn button_mut(&mut self, event: InputEvent) -> &mut Button {
        match event {
            InputEvent::Increment => &mut self.increment,
            InputEvent::Reset => &mut self.reset,
        }
    }

    /// Click the button that delivers `event`
    pub fn dispatch(&self, event: InputEvent) -> EventResult {
        tally_trace!(LogCategory::Input, event = %event, "dispatch");
        self.button(event).click()
    }
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for ButtonPanel {
    fn bind(&mut self, event: InputEvent, handler: EventHandler) {
        self.button_mut(event).set_handler(handler);
    }
}
