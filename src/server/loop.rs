// Server loop module
// Accepts connections until shutdown is requested

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

/// Accept connections until `signals` fires, then drop the listener.
///
/// Accept errors are logged and the loop keeps going. Connections still in
/// flight at shutdown are left to finish or be abandoned with the runtime.
/// Returns the number of connections in flight when the listener closed.
pub async fn serve_until_shutdown(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) -> usize {
    let active_connections = Arc::new(AtomicUsize::new(0));

    while !signals.is_shutdown_requested() {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(
                            stream,
                            Arc::clone(&state),
                            Arc::clone(&active_connections),
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = signals.shutdown.notified() => break,
        }
    }

    drop(listener);
    active_connections.load(Ordering::SeqCst)
}
