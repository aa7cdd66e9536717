//! Reference-counted loading indicator.
//!
//! Overlapping operations each hold a token; the overlay stays up until
//! the last token drops. A plain boolean would go dark as soon as the
//! first of two concurrent fetches finished.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared busy counter for the loading overlay.
///
/// Cheaply cloneable; clones share the count.
#[derive(Debug, Clone, Default)]
pub struct LoadingGauge {
    active: Arc<AtomicUsize>,
}

impl LoadingGauge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one operation as in flight. The returned token releases its
    /// count when dropped, so a `?`-style early return still balances.
    pub fn begin(&self) -> LoadingToken {
        self.active.fetch_add(1, Ordering::SeqCst);
        LoadingToken {
            active: Arc::clone(&self.active),
        }
    }

    /// Whether any operation is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.active() > 0
    }

    /// Number of operations currently in flight.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Guard for one in-flight operation. Hold it for the duration of the
/// work; dropping it decrements the gauge.
#[must_use = "dropping the token immediately ends the loading state"]
#[derive(Debug)]
pub struct LoadingToken {
    active: Arc<AtomicUsize>,
}

impl Drop for LoadingToken {
    fn drop(&mut self) {
        // Saturate at zero; the count never owes more than it was paid.
        let _ = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_sub(1))
            });
    }
}
