mod event_tap;
mod filter;
mod support;
