//! Process-scope event monitors installed while recording.

mod event_monitor;
mod event_tap;

pub use {event_monitor::EventMonitor, event_tap::EventTap};
