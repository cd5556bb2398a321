//! Process-wide pause signal for global hotkey dispatch.
//!
//! A recorder raises the signal for as long as it is recording so that a
//! global hotkey dispatcher does not fire the very shortcut being typed.
//! The signal counts active recordings and stays raised until every
//! recorder has ended its session.

use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicUsize, Ordering},
};

use tracing::debug;

/// Shared count of active recording sessions.
#[derive(Debug, Clone, Default)]
pub struct PauseFlag {
    active: Arc<AtomicUsize>,
}

impl PauseFlag {
    /// A flag independent of the process-wide one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide flag.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<PauseFlag> = OnceLock::new();
        GLOBAL.get_or_init(PauseFlag::new).clone()
    }

    /// True while at least one recorder is recording.
    pub fn is_paused(&self) -> bool {
        self.active_recordings() > 0
    }

    /// Number of recording sessions holding the flag.
    pub fn active_recordings(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Raise the flag until the returned guard is dropped.
    pub fn acquire(&self) -> PauseGuard {
        let active = self.active.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(active, "Hotkey dispatch paused");
        PauseGuard { flag: self.clone() }
    }
}

/// RAII guard that keeps the pause flag raised while alive.
#[derive(Debug)]
pub struct PauseGuard {
    flag: PauseFlag,
}

impl Drop for PauseGuard {
    fn drop(&mut self) {
        let previous = self
            .flag
            .active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .unwrap_or(0);
        debug!(active = previous.saturating_sub(1), "Hotkey dispatch pause released");
    }
}

/// Whether the process-wide flag is raised.
pub fn is_paused() -> bool {
    PauseFlag::global().is_paused()
}
