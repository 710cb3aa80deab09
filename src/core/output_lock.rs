//! Shared lock serializing whole-line writes

use parking_lot::{Mutex, MutexGuard};
use std::sync::{Arc, OnceLock};

static PROCESS_LOCK: OnceLock<OutputLock> = OnceLock::new();

/// Lock held while a printer writes one rendered line.
///
/// Printers default to the process-wide instance so text and JSON output
/// never interleave, even when two printers share a destination. Clones
/// share the same underlying mutex.
#[derive(Debug, Clone, Default)]
pub struct OutputLock {
    inner: Arc<Mutex<()>>,
}

impl OutputLock {
    /// An isolated lock, not shared with anything else
    pub fn new() -> Self {
        Self::default()
    }

    /// The single lock shared by every printer in the process
    pub fn process() -> Self {
        PROCESS_LOCK.get_or_init(OutputLock::new).clone()
    }

    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.inner.lock()
    }

    /// True when both handles guard the same mutex
    pub fn same_as(&self, other: &OutputLock) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
