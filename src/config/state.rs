// Application state module
// Read-only state shared by every connection task

use std::path::{Path, PathBuf};

use super::types::{Config, FilesConfig};
use crate::error::ServerError;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Canonical base directory, resolved once at startup
    pub root: PathBuf,
}

impl AppState {
    /// Resolve `files.root` against `base` and verify it is a directory.
    ///
    /// Nothing is bound before this succeeds.
    pub fn new(config: Config, base: &Path) -> Result<Self, ServerError> {
        let root = resolve_root(&config.files, base)?;
        Ok(Self { config, root })
    }

    pub fn files(&self) -> &FilesConfig {
        &self.config.files
    }
}

fn resolve_root(files: &FilesConfig, base: &Path) -> Result<PathBuf, ServerError> {
    let candidate = base.join(&files.root);
    if !candidate.is_dir() {
        return Err(ServerError::MissingRoot(files.root.clone()));
    }
    candidate
        .canonicalize()
        .map_err(|_| ServerError::MissingRoot(files.root.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_missing_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::defaults().unwrap();

        let err = AppState::new(config, dir.path()).err().unwrap();
        assert!(matches!(err, ServerError::MissingRoot(ref name) if name == "frontend"));
        assert_eq!(err.to_string(), "Error: frontend directory not found!");
    }

    #[test]
    fn test_root_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("frontend"), b"not a dir").unwrap();
        let config = Config::defaults().unwrap();

        assert!(AppState::new(config, dir.path()).is_err());
    }

    #[test]
    fn test_root_is_canonicalized() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("frontend")).unwrap();
        let config = Config::defaults().unwrap();

        let state = AppState::new(config, dir.path()).unwrap();
        assert!(state.root.is_absolute());
        assert_eq!(state.root, dir.path().join("frontend").canonicalize().unwrap());
    }
}
