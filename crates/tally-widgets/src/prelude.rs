//! Prelude module for Tally widgets
//!
//! Re-exports the widgets together with the core types they are used with, so
//! `use tally_widgets::prelude::*;` is enough to build and drive a screen.

pub use tally_core::prelude::*;

pub use crate::button::Button;
pub use crate::label::Label;
pub use crate::panel::ButtonPanel;
pub use crate::screen::CounterScreen;
pub use crate::widget::WidgetId;
