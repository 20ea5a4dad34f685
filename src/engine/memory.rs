//! In-memory engines: a recording double for tests and a discarding
//! no-op for when analytics is disabled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::codec::EncodedEvent;

use super::TransportEngine;

/// Records every event it receives, in arrival order.
///
/// Test double: inject into a dispatcher, drive the code under test,
/// then inspect [`RecordingEngine::sent`]. Safe for concurrent senders;
/// under concurrency the recorded order is whatever order the lock
/// granted, which is best-effort by contract.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    sent: Mutex<Vec<EncodedEvent>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far.
    pub fn sent(&self) -> Vec<EncodedEvent> {
        self.lock().clone()
    }

    /// Drain the recorded log, leaving it empty.
    pub fn take_sent(&self) -> Vec<EncodedEvent> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<EncodedEvent>> {
        // A panicking sender must not poison the log for everyone else.
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TransportEngine for RecordingEngine {
    fn send(&self, event: EncodedEvent) {
        self.lock().push(event);
    }
}

/// Discards every event, counting as it goes.
///
/// Lets callers keep an unconditional dispatcher when analytics is
/// disabled instead of growing an `Option` code path.
#[derive(Debug, Default)]
pub struct NoopEngine {
    discarded: AtomicU64,
}

impl NoopEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total events dropped since creation.
    pub fn total_discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }
}

impl TransportEngine for NoopEngine {
    fn send(&self, event: EncodedEvent) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(name = %event.name, "analytics disabled, event dropped");
    }
}
