use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

use crate::config::{AppState, Config};
use crate::error::ServerError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_fatal(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Everything up to and including the base directory check happens before
/// the runtime exists, so a missing directory never binds a socket.
fn run() -> Result<(), ServerError> {
    let base = executable_dir()?;
    std::env::set_current_dir(&base)?;

    let cfg = Config::load_from(&base)?;
    logger::init(&cfg)?;

    let state = Arc::new(AppState::new(cfg, &base)?);
    let addr = state
        .config
        .get_socket_addr()
        .map_err(ServerError::Address)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = state.config.server.workers {
        runtime_builder.worker_threads(workers.get());
    }
    logger::log_workers(state.config.server.workers.map(NonZeroUsize::get));

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(addr, state))
}

async fn async_main(addr: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener =
        server::create_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;

    logger::log_banner(&listener.local_addr()?, &state.root, &state.config);

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    let in_flight = server::serve_until_shutdown(listener, state, signals).await;
    if in_flight > 0 {
        logger::log_warning(&format!(
            "Abandoning {in_flight} connection(s) still in flight"
        ));
    }

    logger::log_shutdown();
    Ok(())
}

/// Directory containing the running executable
fn executable_dir() -> Result<PathBuf, ServerError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        ServerError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        ))
    })
}
