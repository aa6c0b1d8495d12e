//! Label widget
//!
//! A text-only display surface. The text lives in a `Signal`, so a clone handed
//! to a controller and the clone kept by the screen always agree.

use crate::widget::{generate_id, WidgetId};
use tally_core::{
    display::DisplaySurface,
    logging::LogCategory,
    state::{Signal, Subscription},
    tally_trace,
};

/// Headless text label
#[derive(Debug, Clone)]
pub struct Label {
    id: WidgetId,
    text: Signal<String>,
}

impl Label {
    /// Create a new label with text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            text: Signal::new(text.into()),
        }
    }

    /// Get label ID
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Get label text
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Set label text
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        tally_trace!(LogCategory::Display, label = self.id, text = %text, "label updated");
        self.text.set(text);
    }

    /// Watch text changes
    pub fn on_change<F>(&self, f: F) -> Subscription
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.text.effect(f)
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

impl DisplaySurface for Label {
    fn set_text(&mut self, text: &str) {
        Label::set_text(self, text);
    }
}
