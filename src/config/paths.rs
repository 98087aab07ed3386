//! Path management for finboard
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` on the command line (handled by the caller via [`FinboardPaths::with_base_dir`])
//! 2. `FINBOARD_DATA_DIR` environment variable (if set)
//! 3. The platform config directory from `directories`
//!    (e.g. `~/.config/finboard` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinboardError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINBOARD_DATA_DIR";

/// Manages all paths used by finboard
#[derive(Debug, Clone)]
pub struct FinboardPaths {
    base_dir: PathBuf,
}

impl FinboardPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinboardError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "finboard")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinboardError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory holding the fetched record snapshot
    pub fn snapshot_dir(&self) -> PathBuf {
        self.base_dir.join("snapshot")
    }

    /// Ensure the base and snapshot directories exist
    pub fn ensure_directories(&self) -> Result<(), FinboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.snapshot_dir()).map_err(|e| {
            FinboardError::Io(format!("Failed to create snapshot directory: {}", e))
        })?;

        Ok(())
    }
}
