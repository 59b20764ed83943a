//! Tracking state store

use std::sync::atomic::{AtomicBool, Ordering};

use cymple_core::Category;
use cymple_wire::TrackingFrame;
use parking_lot::RwLock;

/// Connection liveness, inferred from receive timeouts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

/// Shared tracking state.
///
/// The frame is guarded by an RwLock and written as a whole block, so a
/// reader never observes a half-updated frame. A decode is one unit; the
/// store update is atomic relative to snapshot readers.
#[derive(Debug)]
pub struct TrackingStore {
    frame: RwLock<TrackingFrame>,
    eye_active: AtomicBool,
    expression_active: AtomicBool,
    connected: AtomicBool,
}

impl TrackingStore {
    pub fn new() -> Self {
        TrackingStore {
            frame: RwLock::new(TrackingFrame::default()),
            eye_active: AtomicBool::new(false),
            expression_active: AtomicBool::new(false),
            // No timeout has been observed yet, so the first one warns.
            connected: AtomicBool::new(true),
        }
    }

    /// Replace the stored frame with a newly decoded one
    pub fn store_frame(&self, frame: TrackingFrame) {
        *self.frame.write() = frame;
    }

    /// Copy out the most recent frame
    pub fn snapshot(&self) -> TrackingFrame {
        *self.frame.read()
    }

    fn activation(&self, category: Category) -> &AtomicBool {
        match category {
            Category::Eye => &self.eye_active,
            Category::Expression => &self.expression_active,
        }
    }

    /// Latch a category active. Returns true only on the false -> true
    /// transition; the caller logs and skips data application on that tick.
    pub fn try_activate(&self, category: Category) -> bool {
        !self.activation(category).swap(true, Ordering::AcqRel)
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.activation(category).load(Ordering::Acquire)
    }

    /// Drop both activation latches; called on a disconnect edge
    pub fn reset_activation(&self) {
        self.eye_active.store(false, Ordering::Release);
        self.expression_active.store(false, Ordering::Release);
    }

    pub fn connection(&self) -> ConnectionState {
        if self.connected.load(Ordering::Acquire) {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    /// Mark connected. Returns true on the Disconnected -> Connected edge.
    pub fn mark_connected(&self) -> bool {
        !self.connected.swap(true, Ordering::AcqRel)
    }

    /// Mark disconnected. Returns true on the Connected -> Disconnected edge.
    pub fn mark_disconnected(&self) -> bool {
        self.connected.swap(false, Ordering::AcqRel)
    }
}

impl Default for TrackingStore {
    fn default() -> Self {
        TrackingStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cymple_wire::CategoryFlags;

    #[test]
    fn test_store_and_snapshot() {
        let store = TrackingStore::new();
        assert_eq!(store.snapshot().jaw_open, 0.0);

        let mut frame = TrackingFrame::default();
        frame.jaw_open = 0.75;
        frame.flags = CategoryFlags(CategoryFlags::EXPRESSION);
        store.store_frame(frame);

        let snap = store.snapshot();
        assert_eq!(snap.jaw_open, 0.75);
        assert!(snap.flags.has_expression());
    }

    #[test]
    fn test_activation_latches_once() {
        let store = TrackingStore::new();

        assert!(!store.is_active(Category::Eye));
        assert!(store.try_activate(Category::Eye));
        assert!(store.is_active(Category::Eye));
        // Second observation is not a transition
        assert!(!store.try_activate(Category::Eye));

        // Categories are independent
        assert!(!store.is_active(Category::Expression));
        assert!(store.try_activate(Category::Expression));
    }

    #[test]
    fn test_reset_activation() {
        let store = TrackingStore::new();
        store.try_activate(Category::Eye);
        store.try_activate(Category::Expression);

        store.reset_activation();
        assert!(!store.is_active(Category::Eye));
        assert!(!store.is_active(Category::Expression));
        // Both latch again after a reset
        assert!(store.try_activate(Category::Eye));
        assert!(store.try_activate(Category::Expression));
    }

    #[test]
    fn test_connection_edges() {
        let store = TrackingStore::new();
        assert_eq!(store.connection(), ConnectionState::Connected);

        // First timeout is an edge; repeats are not
        assert!(store.mark_disconnected());
        assert!(!store.mark_disconnected());
        assert_eq!(store.connection(), ConnectionState::Disconnected);

        // First receive after the outage is an edge; repeats are not
        assert!(store.mark_connected());
        assert!(!store.mark_connected());
        assert_eq!(store.connection(), ConnectionState::Connected);
    }
}
