//! Cancellation
//!
//! The host exposes a single abort flag that the filter polls; it is never
//! pushed. Rendering checks it once per row.

use std::sync::atomic::{AtomicBool, Ordering};

/// A cancellation flag queried by the pixel loop
pub trait AbortSignal {
    /// Whether the current render should stop
    fn aborted(&self) -> bool;
}

impl AbortSignal for AtomicBool {
    fn aborted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F: Fn() -> bool> AbortSignal for F {
    fn aborted(&self) -> bool {
        self()
    }
}

/// Signal that never fires
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverAbort;

impl AbortSignal for NeverAbort {
    fn aborted(&self) -> bool {
        false
    }
}
