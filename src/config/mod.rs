// Configuration module entry point
// Loads startup configuration and builds the shared application state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::Path;

pub use state::AppState;
pub use types::Config;

/// Config file looked up next to the executable
pub const CONFIG_FILE: &str = "frontend-server.toml";

impl Config {
    /// Load configuration from `<dir>/frontend-server.toml` if present.
    ///
    /// The defaults reproduce the fixed reference setup: port 8080 on all
    /// interfaces, serving `frontend/`.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let path = dir.join(CONFIG_FILE);
        Self::builder()?
            .add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()
    }

    /// Configuration with no file source
    #[cfg(test)]
    pub fn defaults() -> Result<Self, config::ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.backend_url", "http://localhost:3001")?
            .set_default("files.root", "frontend")?
            .set_default("files.index_files", vec!["index.html", "index.htm"])?
            .set_default("files.directory_listing", true)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn test_defaults_match_reference_setup() {
        let cfg = Config::defaults().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.server.backend_url, "http://localhost:3001");
        assert_eq!(cfg.files.root, "frontend");
        assert_eq!(cfg.files.index_files, vec!["index.html", "index.htm"]);
        assert!(cfg.files.directory_listing);
        assert!(cfg.logging.error_log_file.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(dir.path()).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.files.root, "frontend");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("frontend-server.toml"),
            "[server]\nport = 9090\nworkers = 2\n\n[files]\nroot = \"public\"\ndirectory_listing = false\n",
        )
        .unwrap();

        let cfg = Config::load_from(dir.path()).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.workers.map(NonZeroUsize::get), Some(2));
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.files.root, "public");
        assert!(!cfg.files.directory_listing);
    }

    #[test]
    fn test_zero_workers_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("frontend-server.toml"),
            "[server]\nworkers = 0\n",
        )
        .unwrap();

        let err = Config::load_from(dir.path()).unwrap_err();
        let err = crate::error::ServerError::from(err);
        assert!(err.to_string().starts_with("Invalid configuration"), "{err}");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::defaults().unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host_is_reported() {
        let mut cfg = Config::defaults().unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().unwrap_err().starts_with("Invalid address"));
    }
}
