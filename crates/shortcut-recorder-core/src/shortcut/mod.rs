mod render;
#[allow(clippy::module_inception)]
mod shortcut;

pub(crate) use render::{key_label, normalize_modifiers};

pub use {
    render::{Platform, SHORTCUT_MODIFIERS},
    shortcut::Shortcut,
};
