//! Tally Widgets - headless widgets for the counter screen
//!
//! Concrete collaborators for `tally-core`: a `Label` display surface, a
//! `Button`/`ButtonPanel` input source, and the `CounterScreen` that wires them
//! to a `CounterController`.

pub mod button;
pub mod label;
pub mod panel;
pub mod screen;
pub mod widget;

pub mod prelude;

pub use button::Button;
pub use label::Label;
pub use panel::ButtonPanel;
pub use screen::CounterScreen;
pub use widget::WidgetId;

/// Initialize the widgets module
pub fn init() -> tally_core::Result<()> {
    tally_core::tally_info!(tally_core::LogCategory::Core, "Tally Widgets initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_creation() {
        let button = Button::new("Test");
        assert_eq!(button.text(), "Test");
    }
}
