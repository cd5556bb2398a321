use crate::{RecorderId, input::EventKind, monitor::EventTap};

/// Scoped interception of raw input events.
///
/// While alive, the owning recorder sees the subscribed event kinds before
/// normal dispatch. Dropping the monitor unsubscribes it from the tap.
#[derive(Debug)]
pub struct EventMonitor {
    id: u64,
    owner: RecorderId,
    kinds: Vec<EventKind>,
    tap: EventTap,
}

impl EventMonitor {
    pub(crate) fn new(id: u64, owner: RecorderId, kinds: Vec<EventKind>, tap: EventTap) -> Self {
        Self {
            id,
            owner,
            kinds,
            tap,
        }
    }

    /// Whether events of `kind` pass through this monitor.
    pub fn intercepts(&self, kind: EventKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Recorder that installed the monitor.
    pub fn owner(&self) -> RecorderId {
        self.owner
    }
}

impl Drop for EventMonitor {
    fn drop(&mut self) {
        self.tap.remove(self.id);
    }
}
