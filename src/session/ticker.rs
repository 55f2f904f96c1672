//! Cancellable tick source.
//!
//! The game clock is driven from outside the engine: a background task
//! emits one unit per period over a channel, and the session loop
//! forwards each unit to [`GameEngine::tick`]. Pausing does not stop
//! this task — the engine ignores ticks while paused, so resume picks
//! the countdown up exactly where it left off.
//!
//! [`GameEngine::tick`]: crate::game::GameEngine::tick

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Background 1 Hz (by default) tick producer.
///
/// Dropping the ticker cancels the task.
#[derive(Debug)]
pub struct Ticker {
    rx: mpsc::UnboundedReceiver<()>,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawns the tick task. The first tick arrives one full period
    /// after the call, not immediately.
    #[must_use]
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    () = task_cancel.cancelled() => {
                        debug!("tick task cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if tx.send(()).is_err() {
                            // Receiver dropped; nothing left to drive.
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, cancel, handle }
    }

    /// Waits for the next tick. Returns `None` once the ticker has been
    /// cancelled and the channel drained.
    pub async fn next(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Stops the tick task.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the background task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
