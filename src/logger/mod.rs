//! Logger module
//!
//! Console output for the server lifecycle (startup banner, shutdown) and
//! error/warning reporting. Requests are not access-logged.

pub mod writer;

use std::net::SocketAddr;
use std::path::Path;

use crate::config::Config;

/// Initialize the logger with configuration
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(config.logging.error_log_file.as_deref())
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Lines of the startup banner
///
/// Wildcard listen addresses are shown as `localhost` so the URLs can be
/// opened directly in a browser.
pub fn banner_lines(addr: &SocketAddr, root: &Path, config: &Config) -> Vec<String> {
    let host = if addr.ip().is_unspecified() {
        "localhost".to_string()
    } else {
        addr.ip().to_string()
    };
    let base = format!("http://{host}:{}", addr.port());

    vec![
        format!("🌐 Frontend server running at {base}"),
        format!("📁 Serving files from: {}", root.display()),
        "🔗 Available pages:".to_string(),
        format!("   • Main page: {base}"),
        format!("   • Customer: {base}/customer.html"),
        format!("   • Driver: {base}/driver.html"),
        String::new(),
        format!(
            "💡 Make sure your backend is running on {}",
            config.server.backend_url
        ),
        "⏹️  Press Ctrl+C to stop the server".to_string(),
    ]
}

pub fn log_banner(addr: &SocketAddr, root: &Path, config: &Config) {
    for line in banner_lines(addr, root, config) {
        write_info(&line);
    }
}

pub fn log_workers(workers: Option<usize>) {
    if let Some(workers) = workers {
        write_info(&format!("[CONFIG] Using {workers} worker threads"));
    }
}

pub fn log_shutdown() {
    write_info("\n👋 Frontend server stopped");
}

pub fn log_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, shutting down..."));
}

/// Startup failures go to the console even when errors are redirected to a
/// file
pub fn log_fatal(message: &str) {
    match writer::get() {
        Some(w) => w.write_fatal(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
