//! State management for Tally
//!
//! Provides a reactive `Signal` cell in the signals/observers style. Writes are
//! serialised together with their notification, so subscribers see values in
//! write order even when several threads write. The value lock itself is
//! released before subscribers run, so they may read the signal.

use parking_lot::{Mutex, RwLock};
use slotmap::{DefaultKey, SlotMap};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Unique identifier for a subscriber
pub type SubscriberId = DefaultKey;

/// Callback function triggered on state changes
pub type StateCallback = Box<dyn Fn(&dyn Any) + Send + Sync>;

type Subscribers = RwLock<SlotMap<SubscriberId, StateCallback>>;

/// Shared reactive value
///
/// Cloning a signal yields another handle to the same value and subscriber list.
pub struct Signal<T: Clone + Send + Sync + 'static> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<Subscribers>,
    writes: Arc<Mutex<()>>,
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Create a new signal with initial value
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(SlotMap::new())),
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Get current value
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Set new value and notify subscribers
    ///
    /// Subscribers must not write to the same signal.
    pub fn set(&self, value: T) {
        let _serial = self.writes.lock();
        *self.value.write() = value.clone();
        self.notify(&value);
    }

    /// Update value with a function, then notify subscribers with the result
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let _serial = self.writes.lock();
        let mut guard = self.value.write();
        f(&mut *guard);
        let value = guard.clone();
        drop(guard);
        self.notify(&value);
    }

    /// Subscribe to value changes
    ///
    /// Callbacks must not subscribe to the same signal from inside the callback.
    pub fn subscribe(&self, callback: StateCallback) -> Subscription {
        let id = self.subscribers.write().insert(callback);
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Run `f` with every new value
    pub fn effect<F>(&self, f: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribe(Box::new(move |value: &dyn Any| {
            if let Some(typed_value) = value.downcast_ref::<T>() {
                f(typed_value);
            }
        }))
    }

    /// Create a signal derived from this one
    pub fn computed<U, F>(&self, f: F) -> Signal<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let computed = Signal::new(f(&self.get()));
        let computed_clone = computed.clone();

        let _ = self.effect(move |value| computed_clone.set(f(value)));

        computed
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    fn notify(&self, value: &T) {
        let subscribers = self.subscribers.read();
        for callback in subscribers.values() {
            callback(value as &dyn Any);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
            writes: Arc::clone(&self.writes),
        }
    }
}

impl<T: Clone + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle returned by [`Signal::subscribe`]
///
/// Dropping the handle keeps the subscriber alive; call [`Subscription::dispose`]
/// to remove it.
#[derive(Debug)]
#[must_use = "dropping a Subscription does not unsubscribe; keep it to call dispose()"]
pub struct Subscription {
    id: SubscriberId,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    /// Identifier of the subscriber
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove the subscriber. Returns false if the signal is already gone.
    pub fn dispose(self) -> bool {
        match self.subscribers.upgrade() {
            Some(subscribers) => subscribers.write().remove(self.id).is_some(),
            None => false,
        }
    }
}
