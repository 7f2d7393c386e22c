//! Mock pointer device for unit testing.

use std::sync::Mutex;

use edgewarp_core::Position;

use crate::application::watch_edges::PointerDevice;

/// A mock implementation of [`PointerDevice`] that records every warp.
pub struct MockPointerDevice {
    warps: Mutex<Vec<Position>>,
}

impl MockPointerDevice {
    pub fn new() -> Self {
        Self { warps: Mutex::new(Vec::new()) }
    }

    /// Returns every warp destination issued so far, in order.
    pub fn warps(&self) -> Vec<Position> {
        self.warps.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockPointerDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerDevice for MockPointerDevice {
    fn warp_to(&self, position: Position) {
        self.warps.lock().expect("lock poisoned").push(position);
    }
}
