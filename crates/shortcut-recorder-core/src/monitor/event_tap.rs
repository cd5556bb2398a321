use crate::{RecorderId, input::EventKind, monitor::EventMonitor};

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::{debug, instrument};

#[derive(Debug)]
struct TapEntry {
    id: u64,
    owner: RecorderId,
    kinds: Vec<EventKind>,
}

#[derive(Debug, Default)]
struct TapState {
    next_id: u64,
    entries: Vec<TapEntry>,
}

/// Process-scope registry of active event monitors.
///
/// The host consults it before normal dispatch to learn which recorders
/// want to see a raw event. Monitors remove themselves when dropped.
#[derive(Debug, Clone, Default)]
pub struct EventTap {
    inner: Arc<Mutex<TapState>>,
}

impl EventTap {
    /// A tap independent of the process-wide one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide tap.
    pub fn shared() -> Self {
        static SHARED: OnceLock<EventTap> = OnceLock::new();
        SHARED.get_or_init(EventTap::new).clone()
    }

    /// Start intercepting `kinds` on behalf of `owner`.
    #[instrument(skip(self))]
    pub fn install(&self, owner: RecorderId, kinds: &[EventKind]) -> EventMonitor {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(TapEntry {
            id,
            owner,
            kinds: kinds.to_vec(),
        });

        debug!(monitor_id = id, recorder = %owner, "Event monitor installed");

        EventMonitor::new(id, owner, kinds.to_vec(), self.clone())
    }

    /// Recorders intercepting `kind`, most recently installed first.
    pub fn interceptors(&self, kind: EventKind) -> Vec<RecorderId> {
        self.lock()
            .entries
            .iter()
            .rev()
            .filter(|entry| entry.kinds.contains(&kind))
            .map(|entry| entry.owner)
            .collect()
    }

    /// Number of installed monitors.
    pub fn active_monitors(&self) -> usize {
        self.lock().entries.len()
    }

    pub(crate) fn remove(&self, id: u64) {
        let mut state = self.lock();
        state.entries.retain(|entry| entry.id != id);
        debug!(monitor_id = id, "Event monitor removed");
    }

    fn lock(&self) -> MutexGuard<'_, TapState> {
        // Registry data stays consistent across a poisoning panic.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
