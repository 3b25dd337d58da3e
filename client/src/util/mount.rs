//! Still-mounted flag shared between a component and its spawned tasks.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cleared when the owning component is torn down. Async completions check
/// it before touching anything the component owns.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the component as gone. Visible to every clone.
    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
