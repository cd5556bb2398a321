mod builder;
mod controller;
mod display;
pub mod filter;
mod recorder_id;
mod recording_state;

pub use {
    builder::RecorderBuilder,
    controller::RecorderController,
    display::{RecorderDisplay, ShortcutChange},
    recorder_id::RecorderId,
};
