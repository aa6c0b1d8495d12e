//! Widget identity

/// Unique identifier for widgets
pub type WidgetId = u64;

/// Generate a unique widget ID
pub fn generate_id() -> WidgetId {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
