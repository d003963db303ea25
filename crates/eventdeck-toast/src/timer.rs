//! Cancellable one-shot dismiss timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::trace;

use crate::toast::SessionId;

/// Message sent when a dismiss timer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired(pub SessionId);

/// Handle to a pending dismiss delay.
///
/// The delay runs as a tokio task that sends `TimerFired` once it elapses.
/// Cancelling, or dropping the handle, aborts the task, so the message is
/// never sent for a session that has already ended.
#[derive(Debug)]
pub struct DismissTimer {
    session: SessionId,
    task: JoinHandle<()>,
}

impl DismissTimer {
    /// Schedules `TimerFired(session)` on `tx` after `after` has elapsed.
    ///
    /// The deadline is fixed here, not when the task first runs.
    pub fn spawn(
        runtime: &Handle,
        session: SessionId,
        after: Duration,
        tx: UnboundedSender<TimerFired>,
    ) -> Self {
        let _guard = runtime.enter();
        let deadline = Instant::now() + after;

        let task = runtime.spawn(async move {
            sleep_until(deadline).await;
            trace!(%session, "dismiss timer fired");
            // receiver gone means the owner was torn down
            let _ = tx.send(TimerFired(session));
        });

        Self { session, task }
    }

    /// Returns true once the task has fired or been aborted.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancels the timer.
    pub fn cancel(self) {
        trace!(session = %self.session, "dismiss timer cancelled");
        // Drop aborts the task.
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
