//! Counter controller
//!
//! Owns the count and keeps one display surface in step with it. The
//! controller knows nothing about widgets: it is handed a [`DisplaySurface`]
//! and registers its handlers on any [`InputSource`].

use crate::config::CounterConfig;
use crate::display::DisplaySurface;
use crate::event::{InputEvent, InputSource};
use crate::logging::LogCategory;
use crate::state::{Signal, Subscription};
use crate::{tally_debug, tally_trace, tally_warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What `increment` does when the count is already `u64::MAX`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Stay at `u64::MAX`
    #[default]
    Saturate,
    /// Wrap around to 0
    Wrap,
}

impl OverflowPolicy {
    /// Value following `value` under this policy
    pub fn next(self, value: u64) -> u64 {
        match self {
            OverflowPolicy::Saturate => value.saturating_add(1),
            OverflowPolicy::Wrap => value.wrapping_add(1),
        }
    }
}

/// Counter state machine with a single "ready" state
///
/// Clones share the same count, so a clone can be moved into each event
/// handler.
#[derive(Debug, Clone)]
pub struct CounterController {
    count: Signal<u64>,
    text: Signal<String>,
    policy: OverflowPolicy,
}

impl CounterController {
    /// Create a controller with the default configuration
    pub fn new<D: DisplaySurface>(display: D) -> Self {
        Self::with_config(display, &CounterConfig::default())
    }

    /// Create a controller; `display` shows `"0"` before this returns
    pub fn with_config<D: DisplaySurface>(display: D, config: &CounterConfig) -> Self {
        let count = Signal::new(0u64);
        let text = count.computed(|value| value.to_string());

        let display = Arc::new(Mutex::new(display));
        display.lock().set_text(&text.get());

        // The display stays subscribed for the lifetime of the count.
        let _ = text.effect(move |shown: &String| display.lock().set_text(shown));

        tally_debug!(LogCategory::Counter, policy = ?config.overflow, "counter created");

        Self {
            count,
            text,
            policy: config.overflow,
        }
    }

    /// `value := value + 1`, then refresh the display
    pub fn increment(&self) {
        let policy = self.policy;
        let mut at_ceiling = false;

        self.count.update(|value| {
            at_ceiling = *value == u64::MAX;
            *value = policy.next(*value);
        });

        if at_ceiling {
            match policy {
                OverflowPolicy::Saturate => {
                    tally_warn!(LogCategory::Counter, "counter saturated at u64::MAX")
                }
                OverflowPolicy::Wrap => {
                    tally_warn!(LogCategory::Counter, "counter wrapped past u64::MAX")
                }
            }
        }
        tally_trace!(LogCategory::Counter, value = self.value(), "increment");
    }

    /// `value := 0`, then refresh the display
    pub fn reset(&self) {
        self.count.set(0);
        tally_trace!(LogCategory::Counter, "reset");
    }

    /// Run the operation for `event`
    pub fn apply(&self, event: InputEvent) {
        match event {
            InputEvent::Increment => self.increment(),
            InputEvent::Reset => self.reset(),
        }
    }

    /// Current count
    pub fn value(&self) -> u64 {
        self.count.get()
    }

    /// Text last pushed to the display
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Overflow policy in effect
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Observe every new count
    ///
    /// Observers only read; the count changes solely through `increment` and
    /// `reset`.
    pub fn watch<F>(&self, f: F) -> Subscription
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        self.count.effect(move |value| f(*value))
    }

    /// Observe every text pushed to the display
    pub fn on_text<F>(&self, f: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.text.effect(move |text: &String| f(text))
    }

    /// Put the count at `value`, refreshing the display
    #[cfg(test)]
    pub(crate) fn seed(&self, value: u64) {
        self.count.set(value);
    }

    /// Register the increment and reset handlers on `input`
    pub fn bind<I: InputSource + ?Sized>(&self, input: &mut I) {
        for event in InputEvent::ALL {
            let controller = self.clone();
            input.bind(event, Box::new(move || controller.apply(event)));
        }
        tally_debug!(LogCategory::Input, "increment and reset handlers bound");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayFn;
    use crate::event::EventHandler;
    use std::collections::HashMap;

    fn recording_display() -> (Arc<Mutex<Vec<String>>>, DisplayFn<impl FnMut(&str) + Send>) {
        let shown = Arc::new(Mutex::new(Vec::new()));
        let shown_clone = shown.clone();
        let display = DisplayFn(move |text: &str| shown_clone.lock().push(text.to_string()));
        (shown, display)
    }

    #[test]
    fn test_initial_state() {
        let (shown, display) = recording_display();
        let counter = CounterController::new(display);

        assert_eq!(counter.value(), 0);
        assert_eq!(counter.text(), "0");
        assert_eq!(*shown.lock(), vec!["0"]);
    }

    #[test]
    fn test_every_mutation_refreshes_display() {
        let (shown, display) = recording_display();
        let counter = CounterController::new(display);

        counter.increment();
        counter.increment();
        counter.reset();

        assert_eq!(*shown.lock(), vec!["0", "1", "2", "0"]);
    }

    #[test]
    fn test_overflow_policies() {
        assert_eq!(OverflowPolicy::Saturate.next(u64::MAX), u64::MAX);
        assert_eq!(OverflowPolicy::Wrap.next(u64::MAX), 0);
        assert_eq!(OverflowPolicy::Wrap.next(41), 42);
    }

    #[test]
    fn test_saturates_at_ceiling() {
        let (shown, display) = recording_display();
        let counter = CounterController::new(display);

        counter.seed(u64::MAX - 1);
        counter.increment();
        counter.increment();

        assert_eq!(counter.value(), u64::MAX);
        assert_eq!(shown.lock().last().map(String::as_str), Some("18446744073709551615"));
    }

    #[test]
    fn test_wraps_at_ceiling() {
        let (_, display) = recording_display();
        let config = CounterConfig {
            overflow: OverflowPolicy::Wrap,
        };
        let counter = CounterController::with_config(display, &config);

        counter.seed(u64::MAX);
        counter.increment();

        assert_eq!(counter.value(), 0);
        assert_eq!(counter.text(), "0");
    }

    #[test]
    fn test_observers_track_value_and_text() {
        let (_, display) = recording_display();
        let counter = CounterController::new(display);
        let counts = Arc::new(Mutex::new(Vec::new()));
        let texts = Arc::new(Mutex::new(Vec::new()));
        let (counts_clone, texts_clone) = (counts.clone(), texts.clone());

        let _count_sub = counter.watch(move |value| counts_clone.lock().push(value));
        let _text_sub = counter.on_text(move |text| texts_clone.lock().push(text.to_string()));

        counter.increment();
        counter.increment();
        counter.reset();

        assert_eq!(*counts.lock(), vec![1, 2, 0]);
        assert_eq!(*texts.lock(), vec!["1", "2", "0"]);
        assert_eq!(counter.text(), counter.value().to_string());
    }

    #[test]
    fn test_disposed_observer_stops() {
        let (_, display) = recording_display();
        let counter = CounterController::new(display);
        let counts = Arc::new(Mutex::new(Vec::new()));
        let counts_clone = counts.clone();

        let sub = counter.watch(move |value| counts_clone.lock().push(value));
        counter.increment();
        assert!(sub.dispose());
        counter.increment();

        assert_eq!(*counts.lock(), vec![1]);
        assert_eq!(counter.value(), 2);
    }

    #[derive(Default)]
    struct MapSource {
        handlers: HashMap<InputEvent, EventHandler>,
    }

    impl InputSource for MapSource {
        fn bind(&mut self, event: InputEvent, handler: EventHandler) {
            self.handlers.insert(event, handler);
        }
    }

    #[test]
    fn test_bind_registers_both_handlers() {
        let (_, display) = recording_display();
        let counter = CounterController::new(display);
        let mut source = MapSource::default();

        counter.bind(&mut source);
        assert_eq!(source.handlers.len(), 2);

        source.handlers[&InputEvent::Increment]();
        source.handlers[&InputEvent::Increment]();
        assert_eq!(counter.value(), 2);

        source.handlers[&InputEvent::Reset]();
        assert_eq!(counter.text(), "0");
    }
}
