//! Counter screen
//!
//! Builds the label, the button panel and the controller, and wires the
//! panel's buttons to the controller's handlers. This is the whole lifecycle:
//! the count starts at 0 here and goes away when the screen is dropped.

use crate::{label::Label, panel::ButtonPanel};
use tally_core::{
    config::TallyConfig,
    counter::CounterController,
    event::{EventResult, InputEvent},
    logging::LogCategory,
    tally_info,
};

/// Single counter screen
#[derive(Debug)]
pub struct CounterScreen {
    label: Label,
    panel: ButtonPanel,
    controller: CounterController,
}

impl CounterScreen {
    /// Construct a screen with the default configuration
    pub fn new() -> Self {
        Self::with_config(&TallyConfig::default())
    }

    /// Construct a screen from `config`
    pub fn with_config(config: &TallyConfig) -> Self {
        Self::with_panel(config, ButtonPanel::new())
    }

    /// Construct a screen around a pre-built panel
    pub fn with_panel(config: &TallyConfig, mut panel: ButtonPanel) -> Self {
        let label = Label::default();
        let controller = CounterController::with_config(label.clone(), &config.counter);
        controller.bind(&mut panel);

        tally_info!(
            LogCategory::Core,
            label = label.id(),
            policy = ?controller.policy(),
            "counter screen constructed"
        );

        Self {
            label,
            panel,
            controller,
        }
    }

    /// Deliver an input event through the matching button
    pub fn dispatch(&self, event: InputEvent) -> EventResult {
        self.panel.dispatch(event)
    }

    /// Text currently shown by the label
    pub fn text(&self) -> String {
        self.label.text()
    }

    /// Current count
    pub fn value(&self) -> u64 {
        self.controller.value()
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn panel(&self) -> &ButtonPanel {
        &self.panel
    }

    pub fn controller(&self) -> &CounterController {
        &self.controller
    }
}

impl Default for CounterScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_starts_at_zero() {
        let screen = CounterScreen::new();
        assert_eq!(screen.text(), "0");
        assert_eq!(screen.value(), 0);
    }

    #[test]
    fn test_buttons_are_wired() {
        let screen = CounterScreen::new();
        assert!(screen.panel().button(InputEvent::Increment).has_handler());
        assert!(screen.panel().button(InputEvent::Reset).has_handler());
    }
}
