use crate::config::{default_press_label, default_record_label};

use serde::{Deserialize, Serialize};
use shortcut_recorder_core::collab::{Localizer, PlaceholderKey};

/// Placeholder strings shown by the recorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Placeholder while idle.
    #[serde(default = "default_record_label")]
    pub record_shortcut: String,

    /// Placeholder while recording.
    #[serde(default = "default_press_label")]
    pub press_shortcut: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            record_shortcut: default_record_label(),
            press_shortcut: default_press_label(),
        }
    }
}

impl Localizer for LabelsConfig {
    fn localize(&self, key: PlaceholderKey) -> String {
        match key {
            PlaceholderKey::RecordShortcut => self.record_shortcut.clone(),
            PlaceholderKey::PressShortcut => self.press_shortcut.clone(),
        }
    }
}
