//! ToastController - a toast with its dismiss timer.
//!
//! The controller lives on the UI thread. Timers run on a tokio runtime and
//! report back over a channel; `poll` applies their results between UI
//! events, so state only ever changes on the UI thread.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, trace};

use crate::config::ToastConfig;
use crate::error::{Result, ToastError};
use crate::timer::{DismissTimer, TimerFired};
use crate::toast::{SessionId, Toast, ToastState};

/// Toast state plus the single pending dismiss timer.
pub struct ToastController {
    /// Hidden/Visible state.
    toast: Toast,
    /// Delay settings.
    config: ToastConfig,
    /// Runtime the timers are spawned on.
    runtime: Handle,
    /// Timer for the current session, if visible.
    timer: Option<DismissTimer>,
    /// Cloned into every timer.
    fired_tx: UnboundedSender<TimerFired>,
    /// Drained by `poll`.
    fired_rx: UnboundedReceiver<TimerFired>,
}

impl ToastController {
    /// Creates a hidden toast whose timers run on `runtime`.
    pub fn new(config: ToastConfig, runtime: Handle) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            toast: Toast::new(),
            config,
            runtime,
            timer: None,
            fired_tx,
            fired_rx,
        }
    }

    /// Creates a controller on the runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Returns `ToastError::NoRuntime` outside a tokio runtime.
    pub fn current(config: ToastConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| ToastError::NoRuntime(e.to_string()))?;
        Ok(Self::new(config, runtime))
    }

    /// Shows `message` and (re)starts the dismiss window.
    ///
    /// Showing while already visible cancels the old timer first, so the
    /// message stays up for a full delay from now.
    pub fn show(&mut self, message: impl Into<String>) -> SessionId {
        self.cancel_timer();

        let session = self.toast.show(message);
        self.timer = Some(DismissTimer::spawn(
            &self.runtime,
            session,
            self.config.dismiss_after,
            self.fired_tx.clone(),
        ));

        info!(
            %session,
            dismiss_after_ms = self.config.dismiss_after.as_millis(),
            "toast shown"
        );
        session
    }

    /// Hides the toast now. Returns false if nothing was visible.
    pub fn dismiss(&mut self) -> bool {
        self.cancel_timer();
        match self.toast.dismiss() {
            Some(session) => {
                info!(%session, "toast dismissed");
                true
            }
            None => false,
        }
    }

    /// Applies any timers that fired since the last call.
    ///
    /// Returns true if the toast was hidden by an expiry.
    pub fn poll(&mut self) -> bool {
        let mut expired = false;

        while let Ok(TimerFired(session)) = self.fired_rx.try_recv() {
            if self.toast.expire(session) {
                self.timer = None;
                info!(%session, "toast expired");
                expired = true;
            } else {
                trace!(%session, "ignoring stale dismiss timer");
            }
        }

        expired
    }

    /// Returns true while a message is shown.
    pub fn is_visible(&self) -> bool {
        self.toast.is_visible()
    }

    /// The visible message.
    pub fn message(&self) -> Option<&str> {
        self.toast.message()
    }

    /// Current state.
    pub fn state(&self) -> &ToastState {
        self.toast.state()
    }

    /// Number of timers that have not fired yet (0 or 1).
    pub fn pending_timers(&self) -> usize {
        self.timer.as_ref().map_or(0, |t| usize::from(!t.is_finished()))
    }

    /// The active configuration.
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl Drop for ToastController {
    fn drop(&mut self) {
        if self.timer.is_some() {
            debug!("toast controller dropped with pending timer");
        }
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    fn controller() -> ToastController {
        ToastController::current(ToastConfig::default()).unwrap()
    }

    #[test]
    fn test_current_without_runtime() {
        let result = ToastController::current(ToastConfig::default());
        assert!(matches!(result, Err(ToastError::NoRuntime(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires_after_default_delay() {
        let mut toast = controller();
        toast.show("hello");

        sleep(Duration::from_millis(4999)).await;
        settle().await;
        assert!(!toast.poll());
        assert!(toast.is_visible());

        sleep(Duration::from_millis(1)).await;
        settle().await;
        assert!(toast.poll());
        assert!(!toast.is_visible());
        assert_eq!(toast.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let mut toast = controller();
        toast.show("hello");

        sleep(Duration::from_millis(1000)).await;
        assert!(toast.dismiss());
        assert!(!toast.is_visible());
        assert_eq!(toast.pending_timers(), 0);

        sleep(Duration::from_millis(5000)).await;
        settle().await;
        assert!(!toast.poll());
        assert!(!toast.is_visible());
        // the aborted timer never reported back
        assert!(toast.fired_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reshow_resets_window() {
        let mut toast = controller();
        let first = toast.show("one");

        sleep(Duration::from_millis(3000)).await;
        let second = toast.show("two");
        assert_ne!(first, second);
        assert_eq!(toast.pending_timers(), 1);

        // past the first window, inside the second
        sleep(Duration::from_millis(2500)).await;
        settle().await;
        assert!(!toast.poll());
        assert_eq!(toast.message(), Some("two"));

        sleep(Duration::from_millis(2500)).await;
        settle().await;
        assert!(toast.poll());
        assert!(!toast.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_fire_is_ignored() {
        let mut toast = controller();
        let first = toast.show("one");
        toast.show("two");

        // simulate a timer that fired just before it was cancelled
        toast.fired_tx.send(TimerFired(first)).unwrap();
        assert!(!toast.poll());
        assert_eq!(toast.message(), Some("two"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let mut toast = controller();

        // watch the channel the timer reports on after the controller is gone
        let (tx, mut rx) = mpsc::unbounded_channel();
        toast.fired_tx = tx.clone();
        toast.show("hello");
        assert_eq!(toast.pending_timers(), 1);

        sleep(Duration::from_millis(1000)).await;
        drop(toast);

        sleep(Duration::from_millis(5000)).await;
        settle().await;
        assert_eq!(rx.try_recv(), Err(mpsc::error::TryRecvError::Empty));
        drop(tx);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_when_hidden() {
        let mut toast = controller();
        assert!(!toast.dismiss());
        assert_eq!(toast.state(), &ToastState::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let config = ToastConfig::new().with_dismiss_after(Duration::from_millis(250));
        let mut toast = ToastController::current(config).unwrap();
        toast.show("quick");

        sleep(Duration::from_millis(250)).await;
        settle().await;
        assert!(toast.poll());
        assert_eq!(toast.config().dismiss_after, Duration::from_millis(250));
    }
}
