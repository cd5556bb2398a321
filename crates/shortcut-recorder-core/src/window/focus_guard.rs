use crate::{RecorderId, UiSender, UiTask, UiTaskKind};

use tracing::{debug, warn};

/// Suppresses focus capture for one UI-loop turn after a window focus change.
///
/// Re-arming clears `can_accept_focus` and posts a single-shot task that
/// restores it on the next turn. Only the task from the latest re-arm
/// restores; earlier ones are stale.
#[derive(Debug)]
pub struct FocusGuard {
    owner: RecorderId,
    ui: UiSender,
    can_accept_focus: bool,
    generation: u64,
}

impl FocusGuard {
    /// A guard that initially allows focus.
    pub fn new(owner: RecorderId, ui: UiSender) -> Self {
        Self {
            owner,
            ui,
            can_accept_focus: true,
            generation: 0,
        }
    }

    /// Whether the control may become the focus target right now.
    pub fn can_accept_focus(&self) -> bool {
        self.can_accept_focus
    }

    /// Block focus until the next UI turn.
    pub fn rearm(&mut self) {
        self.generation += 1;
        self.can_accept_focus = false;

        let task = UiTask {
            recorder: self.owner,
            kind: UiTaskKind::RestoreFocusability {
                generation: self.generation,
            },
        };

        if let Err(e) = self.ui.post(task) {
            // No loop left to run the deferred task.
            warn!(recorder = %self.owner, error = ?e, "Could not defer focus restore");
            self.can_accept_focus = true;
            return;
        }

        debug!(recorder = %self.owner, generation = self.generation, "Focus guard armed");
    }

    /// Handle the deferred restore task.
    pub fn restore(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(
                recorder = %self.owner,
                generation,
                current = self.generation,
                "Ignoring stale focus restore"
            );
            return;
        }
        self.can_accept_focus = true;
    }
}
