// Server module entry point
// Listener creation, connection serving, signal handling and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as `server_loop`
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_listener;
pub use server_loop::serve_until_shutdown;
pub use signal::{start_signal_handler, SignalHandler};
