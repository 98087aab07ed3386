//! User settings for finboard
//!
//! Display preferences and the caps applied to dashboard lists. Every field
//! has a default so older or hand-written config files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::FinboardPaths;
use crate::error::FinboardError;
use crate::storage::file_io::write_json_atomic;

/// User settings for finboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Notifications shown per kind on the dashboard
    #[serde(default = "default_notification_limit")]
    pub notification_limit: usize,

    /// Expenses listed under "recent" on the dashboard
    #[serde(default = "default_recent_expenses")]
    pub recent_expenses: usize,

    /// Incomes listed under "recent" on the dashboard
    #[serde(default = "default_recent_incomes")]
    pub recent_incomes: usize,

    /// Default row limit for the transaction listing
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_notification_limit() -> usize {
    3
}

fn default_recent_expenses() -> usize {
    5
}

fn default_recent_incomes() -> usize {
    3
}

fn default_recent_transactions() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            notification_limit: default_notification_limit(),
            recent_expenses: default_recent_expenses(),
            recent_incomes: default_recent_incomes(),
            recent_transactions: default_recent_transactions(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &FinboardPaths) -> Result<Self, FinboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, writing defaults");
            let settings = Settings::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinboardError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinboardError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        tracing::debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Reject values that would break rendering later on
    pub fn validate(&self) -> Result<(), FinboardError> {
        let has_bad_item =
            StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if has_bad_item {
            return Err(FinboardError::Config(format!(
                "Invalid date_format: {:?}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinboardPaths) -> Result<(), FinboardError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
