//! Path management for the income list
//!
//! ## Path Resolution Order
//!
//! 1. `INCOME_LIST_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/income-list` or `~/.config/income-list`
//! 3. Windows: `%APPDATA%\income-list`

use std::path::PathBuf;

use crate::error::IncomeError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "INCOME_LIST_DATA_DIR";

/// Resolves the files the income list reads and writes
#[derive(Debug, Clone)]
pub struct IncomePaths {
    base_dir: PathBuf,
}

impl IncomePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, IncomeError> {
        Self::from_override(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    /// Use `custom` when given, otherwise the platform default
    pub fn from_override(custom: Option<PathBuf>) -> Result<Self, IncomeError> {
        let base_dir = match custom {
            Some(custom) => custom,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (useful for testing)
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

    pub fn ensure_directories(&self) -> Result<(), IncomeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| IncomeError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, IncomeError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                IncomeError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("income-list"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, IncomeError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| IncomeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("income-list"))
}
