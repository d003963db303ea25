//! Shared helpers for TUI tests.

use eventdeck_events::EventCatalog;
use eventdeck_toast::{ToastConfig, ToastController};

use super::{App, Options};

/// Builds an app over the sample catalog. Needs a tokio runtime.
pub(super) fn test_app(options: Options) -> App {
    let config = ToastConfig::new().with_dismiss_after(options.dismiss_after);
    let toast = ToastController::current(config).unwrap();
    App::new(EventCatalog::sample(), toast, &options)
}

/// Lets spawned timer tasks run after the paused clock moves.
pub(super) async fn settle() {
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
}
