// Signal handling module
//
// Supported signals:
// - SIGINT:  Graceful shutdown (Ctrl+C)
// - SIGTERM: Graceful shutdown (Unix only)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Shutdown trigger shared between the signal task and the accept loop
pub struct SignalHandler {
    /// Woken once on shutdown; the permit is kept if nobody waits yet
    pub shutdown: Notify,
    pub shutdown_requested: AtomicBool,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Notify::new(),
            shutdown_requested: AtomicBool::new(false),
        }
    }

    /// Request shutdown of the accept loop
    pub fn trigger(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        self.shutdown.notify_one();
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a task that triggers `handler` on the first interrupt or terminate
/// signal.
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        let name = tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
                    return;
                }
                "SIGINT"
            }
            () = terminate() => "SIGTERM",
        };

        logger::log_signal(name);
        handler.trigger();
    });
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to register SIGTERM handler: {e}"));
            std::future::pending::<()>().await;
        }
    }
}

/// Only Ctrl+C is delivered outside Unix
#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_before_wait_is_not_lost() {
        let handler = SignalHandler::new();
        handler.trigger();
        assert!(handler.is_shutdown_requested());

        tokio::time::timeout(Duration::from_secs(1), handler.shutdown.notified())
            .await
            .expect("stored permit should wake the waiter");
    }

    #[tokio::test]
    async fn test_trigger_wakes_waiter() {
        let handler = Arc::new(SignalHandler::new());
        let waiter = {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move { handler.shutdown.notified().await })
        };
        tokio::task::yield_now().await;
        handler.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }
}
