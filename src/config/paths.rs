//! Path management for spendcard
//!
//! Resolves where settings, the card request log and the diagnostic log live.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDCARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/spendcard` on Linux, `%APPDATA%\spendcard` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SpendError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDCARD_DATA_DIR";

/// Manages all paths used by spendcard
#[derive(Debug, Clone)]
pub struct SpendPaths {
    /// Base directory for all spendcard files
    base_dir: PathBuf,
}

impl SpendPaths {
    /// Create a new SpendPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SpendError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the card request log (one JSON line per created card)
    pub fn request_log(&self) -> PathBuf {
        self.base_dir.join("requests.log")
    }

    /// Get the path to the diagnostic log written while the TUI owns the screen
    pub fn diagnostic_log(&self) -> PathBuf {
        self.base_dir.join("spendcard.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendError> {
    ProjectDirs::from("", "", "spendcard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SpendError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.request_log(), temp_dir.path().join("requests.log"));
        assert_eq!(paths.diagnostic_log(), temp_dir.path().join("spendcard.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("spendcard");
        let paths = SpendPaths::with_base_dir(nested.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
