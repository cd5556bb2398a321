use crate::{RecorderId, Shortcut};

use uuid::Uuid;

/// Work posted back onto the UI loop for one recorder.
#[derive(Debug, Clone, PartialEq)]
pub struct UiTask {
    /// Recorder the task belongs to.
    pub recorder: RecorderId,
    /// What to do.
    pub kind: UiTaskKind,
}

/// Deferred UI-thread work.
#[derive(Debug, Clone, PartialEq)]
pub enum UiTaskKind {
    /// Next-turn re-enable of focusability after a window focus change.
    RestoreFocusability {
        /// Guard generation that scheduled this task; stale generations are ignored.
        generation: u64,
    },
    /// The persistence gate answered a commit attempt.
    CommitResolved {
        /// Correlates the answer with the attempt in logs.
        commit_id: Uuid,
        /// The value that was proposed.
        candidate: Option<Shortcut>,
        /// Whether the gate allowed the change.
        accepted: bool,
    },
}
