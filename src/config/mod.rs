//! Application configuration: display locale and currency preferences.
//!
//! Only preferences are persisted. Finance data itself (ledger, goals,
//! earnings) is session state and never touches disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::currency::DigitGrouping;
use crate::errors::FinanceError;

const CONFIG_DIR: &str = "finance_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency_symbol: String,
    pub grouping: DigitGrouping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency_symbol: "₹".into(),
            grouping: DigitGrouping::Indian,
        }
    }
}

/// Loads and saves the config file under the platform config directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, FinanceError> {
        let base = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR);
        Self::from_base(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, FinanceError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, FinanceError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, FinanceError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the config via a temp file then rename.
    pub fn save(&self, config: &Config) -> Result<(), FinanceError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<(), FinanceError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_returns_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.locale, "en-IN");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.grouping, DigitGrouping::Indian);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            locale: "en-US".into(),
            currency_symbol: "$".into(),
            grouping: DigitGrouping::Western,
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.locale, "en-US");
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.grouping, DigitGrouping::Western);
    }
}
