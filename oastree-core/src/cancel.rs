//! Cooperative cancellation (§5, §9): the walker is pull-based so the
//! caller already controls cancellation by not advancing, but the resolver
//! can block on I/O, so every external fetch and every walk yield must
//! check a token.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheaply-cloned flag checked at external-fetch and walk-yield
/// boundaries. Cancelling is one-way: once set, a token never un-cancels.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
