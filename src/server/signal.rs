// Shutdown signal handling
//
// SIGTERM and SIGINT (Ctrl+C) stop the accept loop; the process then
// exits 0.

use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state shared with the accept loop.
pub struct SignalHandler {
    /// Fired once when a shutdown signal arrives.
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener task (Unix).
#[cfg(unix)]
pub fn start_signal_handler(handler: &SignalHandler) {
    use tokio::signal::unix::{signal, SignalKind};

    let shutdown = Arc::clone(&handler.shutdown);
    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => println!("\n[SIGNAL] SIGTERM received, shutting down..."),
            _ = sigint.recv() => println!("\n[SIGNAL] SIGINT received, shutting down..."),
        }

        // notify_one stores a permit, so a signal arriving before the
        // accept loop reaches `notified()` is not lost.
        shutdown.notify_one();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: &SignalHandler) {
    let shutdown = Arc::clone(&handler.shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n[SIGNAL] Ctrl+C received, shutting down...");
            shutdown.notify_one();
        }
    });
}
