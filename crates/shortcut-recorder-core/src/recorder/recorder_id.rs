use std::fmt;

use uuid::Uuid;

/// Identity of one recorder control, used to route UI tasks and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecorderId(Uuid);

impl RecorderId {
    /// Allocate a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecorderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecorderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
