//! Platform-neutral raw input events and window geometry.

mod geometry;
mod raw_event;

pub use {
    geometry::{Point, Rect},
    raw_event::{EventKind, MouseButton, Propagation, RawInputEvent, RawKeyEvent, SpecialKey},
};
