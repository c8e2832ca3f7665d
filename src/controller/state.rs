use std::sync::atomic::{AtomicBool, Ordering};

/// Per-instance bookkeeping shared by every controller
#[derive(Debug, Default)]
pub struct ControllerState {
    loaded: AtomicBool,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    // Only the route table flips this, once every binding is accepted.
    pub(crate) fn mark_loaded(&self) {
        self.loaded.store(true, Ordering::Release);
    }
}
