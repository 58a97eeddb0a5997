//! Cooperative stop signal

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Shared stop flag with a wake-up for tasks sleeping between sends.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop. Idempotent.
    pub fn trigger(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Sleep for `duration` unless a stop is requested first.
    ///
    /// Returns `true` if the full duration elapsed, `false` if the sleep was
    /// cut short (or never started) because of a stop request.
    pub async fn sleep(&self, duration: Duration) -> bool {
        let notified = self.notify.notified();
        if self.is_triggered() {
            return false;
        }

        tokio::select! {
            _ = tokio::time::sleep(duration) => !self.is_triggered(),
            _ = notified => false,
        }
    }

    /// Trigger this signal on the first Ctrl-C (SIGINT).
    ///
    /// The handler is installed by the time this returns, so an interrupt
    /// arriving later no longer terminates the process. Must be called from
    /// within a tokio runtime.
    pub async fn listen_for_ctrl_c(&self) -> JoinHandle<()> {
        let signal = self.clone();
        let handle = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received, stopping");
                    signal.trigger();
                }
                Err(e) => warn!(error = %e, "Unable to listen for Ctrl-C"),
            }
        });

        // ctrl_c registers on first poll; let the listener run once
        tokio::task::yield_now().await;
        handle
    }
}
