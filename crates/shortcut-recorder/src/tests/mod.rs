mod input_translation;
mod recorder_window;
mod shortcut_policy;

use std::path::PathBuf;

use uuid::Uuid;

/// Unique config path under the system temp dir.
pub(crate) fn temp_config_path() -> PathBuf {
    std::env::temp_dir().join(format!("shortcut-recorder-{}.toml", Uuid::new_v4()))
}
