use crate::config::default_binding;

use serde::{Deserialize, Serialize};

/// Recorded global shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    /// Binding in `ctrl+shift+KeyK` form. Empty means no shortcut is bound;
    /// a missing key falls back to the default binding.
    #[serde(default = "default_binding")]
    pub binding: Option<String>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            binding: default_binding(),
        }
    }
}
