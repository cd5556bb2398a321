use crate::Shortcut;

use std::fmt;

/// Why a caller refused a decoded shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Human-readable reason, for logs.
    pub reason: String,
}

impl Rejection {
    /// Create a rejection.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Caller-owned policy over which shortcuts may be recorded at all, such as
/// refusing combinations reserved by the system or the host's menus.
pub trait ShortcutValidator {
    /// `Err` makes the recorder alert and keep listening.
    fn validate(&self, shortcut: &Shortcut) -> Result<(), Rejection>;
}

/// Validator that accepts every shortcut.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl ShortcutValidator for AllowAll {
    fn validate(&self, _shortcut: &Shortcut) -> Result<(), Rejection> {
        Ok(())
    }
}
