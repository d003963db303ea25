//! Toast configuration.

use std::time::Duration;

/// How long a toast stays visible when nobody dismisses it.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Configuration for a toast controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastConfig {
    /// Delay between showing a toast and hiding it automatically.
    pub dismiss_after: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            dismiss_after: DEFAULT_DISMISS_AFTER,
        }
    }
}

impl ToastConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auto-dismiss delay.
    pub fn with_dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }
}
