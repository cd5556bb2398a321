use crate::RecorderId;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;
use uuid::Uuid;

/// Key-focus transitions of a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFocusEvent {
    /// The window became the key window.
    BecameKey,
    /// The window stopped being the key window.
    ResignedKey,
}

/// Subscription registry for one host window's key-focus notifications.
///
/// The host posts nothing through the hub itself; it asks for the current
/// subscribers and routes each [`WindowFocusEvent`] to them.
#[derive(Debug, Clone)]
pub struct WindowFocusHub {
    window_id: Uuid,
    subscribers: Arc<Mutex<Vec<RecorderId>>>,
}

impl WindowFocusHub {
    /// Create the hub for a new window.
    pub fn new() -> Self {
        Self {
            window_id: Uuid::new_v4(),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Identity of the window, for logs.
    pub fn window_id(&self) -> Uuid {
        self.window_id
    }

    /// Subscribe `owner` until the returned handle is dropped.
    pub fn subscribe(&self, owner: RecorderId) -> WindowSubscription {
        self.lock().push(owner);
        debug!(window_id = %self.window_id, recorder = %owner, "Subscribed to window focus");
        WindowSubscription {
            hub: self.clone(),
            owner,
        }
    }

    /// Recorders currently subscribed.
    pub fn subscribers(&self) -> Vec<RecorderId> {
        self.lock().clone()
    }

    fn unsubscribe(&self, owner: RecorderId) {
        let mut subscribers = self.lock();
        if let Some(index) = subscribers.iter().position(|id| *id == owner) {
            subscribers.remove(index);
        }
        debug!(window_id = %self.window_id, recorder = %owner, "Unsubscribed from window focus");
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecorderId>> {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for WindowFocusHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Disposable window-notification subscription.
#[derive(Debug)]
pub struct WindowSubscription {
    hub: WindowFocusHub,
    owner: RecorderId,
}

impl WindowSubscription {
    /// Window this subscription listens to.
    pub fn window_id(&self) -> Uuid {
        self.hub.window_id
    }
}

impl Drop for WindowSubscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.owner);
    }
}
