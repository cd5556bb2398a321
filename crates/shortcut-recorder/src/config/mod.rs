#[allow(clippy::module_inception)]
mod config;
mod labels_config;
mod logging_config;
mod shortcut_config;

pub(crate) use {
    config::Config, labels_config::LabelsConfig, logging_config::LoggingConfig,
    shortcut_config::ShortcutConfig,
};

pub(crate) const DEFAULT_BINDING: &str = "ctrl+shift+Space";
pub(crate) const DEFAULT_RECORD_LABEL: &str = "Record Shortcut";
pub(crate) const DEFAULT_PRESS_LABEL: &str = "Press Shortcut";
pub(crate) const DEFAULT_LOG_FILTER: &str = "shortcut_recorder=debug,shortcut_recorder_core=debug";

pub(crate) fn default_binding() -> Option<String> {
    Some(DEFAULT_BINDING.to_string())
}

pub(crate) fn default_record_label() -> String {
    DEFAULT_RECORD_LABEL.to_string()
}

pub(crate) fn default_press_label() -> String {
    DEFAULT_PRESS_LABEL.to_string()
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
