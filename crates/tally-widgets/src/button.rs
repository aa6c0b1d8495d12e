//! Button widget implementation
//!
//! Headless push button: a caption, an enabled flag and a click handler. A host
//! toolkit forwards its native click to [`Button::click`].

use crate::widget::{generate_id, WidgetId};
use tally_core::{
    event::{EventHandler, EventResult},
    logging::LogCategory,
    state::Signal,
    tally_debug,
};

/// Headless push button
pub struct Button {
    id: WidgetId,
    text: String,
    enabled: Signal<bool>,
    clicks: Signal<u64>,
    on_click: Option<EventHandler>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("enabled", &self.enabled.get())
            .field("clicks", &self.clicks.get())
            .field("on_click", &self.on_click.as_ref().map(|_| "Fn() + Send + Sync"))
            .finish()
    }
}

impl Button {
    /// Create a new button with text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
            enabled: Signal::new(true),
            clicks: Signal::new(0),
            on_click: None,
        }
    }

    /// Set click handler
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Set enabled state
    pub fn enabled(self, enabled: bool) -> Self {
        self.enabled.set(enabled);
        self
    }

    /// Replace the click handler
    pub fn set_handler(&mut self, handler: EventHandler) {
        self.on_click = Some(handler);
    }

    /// Whether a click handler is bound
    pub fn has_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Get button ID
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Get button text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if button is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Enable or disable the button
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Number of clicks that reached the handler
    pub fn click_count(&self) -> u64 {
        self.clicks.get()
    }

    /// Activate the button
    pub fn click(&self) -> EventResult {
        if !self.is_enabled() {
            tally_debug!(LogCategory::Input, button = %self.text, "click on disabled button ignored");
            return EventResult::Ignored;
        }

        match &self.on_click {
            Some(handler) => {
                handler();
                self.clicks.update(|n| *n += 1);
                EventResult::Handled
            }
            None => {
                tally_debug!(LogCategory::Input, button = %self.text, "click with no handler bound");
                EventResult::Ignored
            }
        }
    }
}
