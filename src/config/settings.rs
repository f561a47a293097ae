//! User settings and the budget mode preference store
//!
//! `Settings` is what lands in `config.json`. `Preferences` is the shared,
//! process-wide view of it that renderers read the budget mode from.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use super::paths::IncomePaths;
use crate::error::{IncomeError, IncomeResult};
use crate::models::BudgetMode;
use crate::storage::{read_json_opt, write_json_atomic};

/// User settings for the income list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budgeting mode; unknown values load as rollover
    #[serde(default)]
    pub budget_type: BudgetMode,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            budget_type: BudgetMode::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Defaults are not written back; the caller decides when to persist.
    pub fn load_or_create(paths: &IncomePaths) -> IncomeResult<Self> {
        let settings = read_json_opt(paths.settings_file()).map_err(|e| {
            IncomeError::Config(format!("Failed to load settings: {}", e))
        })?;
        Ok(settings.unwrap_or_default())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &IncomePaths) -> IncomeResult<()> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

/// Read access to the display preferences
pub trait PreferenceSource {
    fn budget_mode(&self) -> BudgetMode;

    fn currency_symbol(&self) -> String;
}

impl PreferenceSource for Settings {
    fn budget_mode(&self) -> BudgetMode {
        self.budget_type
    }

    fn currency_symbol(&self) -> String {
        self.currency_symbol.clone()
    }
}

/// Shared settings that may change while the list is on screen
#[derive(Debug)]
pub struct Preferences {
    paths: Option<IncomePaths>,
    settings: RwLock<Settings>,
}

impl Preferences {
    /// Preferences kept only in memory
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            paths: None,
            settings: RwLock::new(settings),
        }
    }

    /// Load preferences backed by the settings file
    pub fn load(paths: IncomePaths) -> IncomeResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self {
            paths: Some(paths),
            settings: RwLock::new(settings),
        })
    }

    /// Copy of the current settings
    pub fn settings(&self) -> IncomeResult<Settings> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|e| IncomeError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    /// Change the budget mode, persisting it when file-backed
    pub fn set_budget_mode(&self, mode: BudgetMode) -> IncomeResult<()> {
        let mut settings = self
            .settings
            .write()
            .map_err(|e| IncomeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        settings.budget_type = mode;
        if let Some(paths) = &self.paths {
            settings.save(paths)?;
        }

        tracing::info!(mode = %mode, "budget mode changed");
        Ok(())
    }
}

impl PreferenceSource for Preferences {
    fn budget_mode(&self) -> BudgetMode {
        // A poisoned lock still holds the last written value
        match self.settings.read() {
            Ok(settings) => settings.budget_type,
            Err(poisoned) => poisoned.into_inner().budget_type,
        }
    }

    fn currency_symbol(&self) -> String {
        match self.settings.read() {
            Ok(settings) => settings.currency_symbol.clone(),
            Err(poisoned) => poisoned.into_inner().currency_symbol.clone(),
        }
    }
}
