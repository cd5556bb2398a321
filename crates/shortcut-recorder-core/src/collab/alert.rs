use tracing::debug;

/// Audible alert primitive.
pub trait AlertSink {
    /// Play the system alert sound.
    fn beep(&self);
}

/// Alert that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAlert;

impl AlertSink for SilentAlert {
    fn beep(&self) {
        debug!("Alert suppressed");
    }
}
