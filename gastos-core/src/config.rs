//! Configuration management
//!
//! Stored in `<data_dir>/settings.json`:
//! ```json
//! {
//!   "app": {
//!     "categories": ["Comida", "Transporte", "Salud", "Educación", "Otros"],
//!     "strictCategories": false,
//!     "currencySymbol": "$"
//!   }
//! }
//! ```
//! Every field is optional. Keys this crate does not know about are kept
//! when the file is saved.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapters::json_file::write_json_atomic;
use crate::domain::result::{Error, Result};

/// Settings file name inside the data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Categories offered when nothing is configured
pub const DEFAULT_CATEGORIES: &[&str] = &["Comida", "Transporte", "Salud", "Educación", "Otros"];

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_categories")]
    categories: Vec<String>,
    #[serde(default)]
    strict_categories: bool,
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            strict_categories: false,
            currency_symbol: default_currency_symbol(),
            other: HashMap::new(),
        }
    }
}

/// gastos configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Suggested categories, in display order
    pub categories: Vec<String>,
    /// Reject categories not in `categories`
    pub strict_categories: bool,
    pub currency_symbol: String,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        let app = AppSettings::default();
        Self {
            categories: app.categories.clone(),
            strict_categories: app.strict_categories,
            currency_symbol: app.currency_symbol.clone(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A malformed settings file falls back to defaults. Strict categories
    /// can also be switched with `GASTOS_STRICT_CATEGORIES`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %settings_path.display(), error = %e, "ignoring malformed settings");
                SettingsFile::default()
            })
        } else {
            SettingsFile::default()
        };

        let strict_categories = match std::env::var("GASTOS_STRICT_CATEGORIES").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.strict_categories,
        };

        let mut categories = raw.app.categories.clone();
        categories.retain(|c| !c.trim().is_empty());
        if categories.is_empty() && strict_categories {
            return Err(Error::Config(
                "strictCategories is on but no categories are configured".to_string(),
            ));
        }

        Ok(Self {
            categories,
            strict_categories,
            currency_symbol: raw.app.currency_symbol.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves other settings this crate doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        if self.strict_categories && self.categories.is_empty() {
            return Err(Error::Config(
                "strictCategories needs at least one category".to_string(),
            ));
        }

        let mut settings = self._raw_settings.clone();
        settings.app.categories = self.categories.clone();
        settings.app.strict_categories = self.strict_categories;
        settings.app.currency_symbol = self.currency_symbol.clone();

        let path = data_dir.join(SETTINGS_FILE);
        write_json_atomic(&path, &settings)?;
        tracing::debug!(path = %path.display(), categories = self.categories.len(), "saved settings");
        Ok(())
    }

    /// Append a suggested category; `Ok(false)` if it is already listed
    pub fn add_category(&mut self, category: &str) -> Result<bool> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::validation("category cannot be empty"));
        }
        if self.categories.iter().any(|c| c == category) {
            return Ok(false);
        }
        self.categories.push(category.to_string());
        Ok(true)
    }

    /// Drop a suggested category; `false` if it was not listed
    pub fn remove_category(&mut self, category: &str) -> bool {
        let category = category.trim();
        let before = self.categories.len();
        self.categories.retain(|c| c != category);
        self.categories.len() != before
    }

    /// Category used when the caller does not pick one
    pub fn default_category(&self) -> &str {
        self.categories.last().map(String::as_str).unwrap_or("Otros")
    }

    /// Format an amount with the configured currency symbol, two decimals
    pub fn format_amount(&self, amount: rust_decimal::Decimal) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.categories, DEFAULT_CATEGORIES);
        assert!(!config.strict_categories);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_category(), "Otros");
    }

    #[test]
    fn test_partial_settings_merge_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"app": {"currencySymbol": "€"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.categories, DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "nope").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.categories, DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"app": {"theme": "dark"}, "extra": {"a": 1}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.categories = vec!["Casa".to_string(), "Ocio".to_string()];
        config.save(dir.path()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap()).unwrap();
        assert_eq!(raw["app"]["theme"], "dark");
        assert_eq!(raw["extra"]["a"], 1);
        assert_eq!(raw["app"]["categories"][1], "Ocio");

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.default_category(), "Ocio");
    }

    #[test]
    fn test_edit_categories() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::load(dir.path()).unwrap();

        assert!(config.add_category(" Casa ").unwrap());
        assert!(!config.add_category("Casa").unwrap());
        assert!(config.add_category("  ").is_err());
        assert!(config.remove_category("Otros"));
        assert!(!config.remove_category("Otros"));
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.categories, ["Comida", "Transporte", "Salud", "Educación", "Casa"]);
        assert_eq!(reloaded.default_category(), "Casa");
    }

    #[test]
    fn test_save_refuses_strict_without_categories() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::load(dir.path()).unwrap();
        config.categories.clear();
        config.strict_categories = true;

        assert!(matches!(config.save(dir.path()).unwrap_err(), Error::Config(_)));
        assert!(!dir.path().join(SETTINGS_FILE).exists());
    }

    #[test]
    fn test_format_amount() {
        let config = Config::default();
        assert_eq!(config.format_amount(Decimal::new(35, 1)), "$3.50");
        assert_eq!(config.format_amount(Decimal::new(16, 0)), "$16.00");
    }
}
