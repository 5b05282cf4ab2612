//! User settings for spendcard
//!
//! Manages display preferences and the timings of the login and drawer
//! sequences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::SpendPaths;
use super::theme::ThemeName;
use crate::error::SpendError;

/// Timings of every timed phase sequence, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationTimings {
    /// How long the welcome banner stays up
    pub welcome_hide_ms: u64,
    /// When the login form appears (after the welcome fades)
    pub form_show_ms: u64,
    /// Length of the loading animation after submitting the login form
    pub loading_ms: u64,
    /// Delay between mounting a drawer and sliding it in
    pub drawer_open_delay_ms: u64,
    /// Slide-out duration before a drawer unmounts
    pub drawer_close_ms: u64,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            welcome_hide_ms: 2500,
            form_show_ms: 3500,
            loading_ms: 3000,
            drawer_open_delay_ms: 50,
            drawer_close_ms: 300,
        }
    }
}

impl AnimationTimings {
    pub fn welcome_hide(&self) -> Duration {
        Duration::from_millis(self.welcome_hide_ms)
    }

    pub fn form_show(&self) -> Duration {
        Duration::from_millis(self.form_show_ms)
    }

    pub fn loading(&self) -> Duration {
        Duration::from_millis(self.loading_ms)
    }

    pub fn drawer_open_delay(&self) -> Duration {
        Duration::from_millis(self.drawer_open_delay_ms)
    }

    pub fn drawer_close(&self) -> Duration {
        Duration::from_millis(self.drawer_close_ms)
    }
}

/// User settings for spendcard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Skip the welcome/login sequence and open the dashboard directly
    #[serde(default)]
    pub skip_intro: bool,

    /// Colour palette
    #[serde(default)]
    pub theme: ThemeName,

    /// Login and drawer timings
    #[serde(default)]
    pub animation: AnimationTimings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            tick_rate_ms: default_tick_rate_ms(),
            skip_intro: false,
            theme: ThemeName::default(),
            animation: AnimationTimings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendPaths) -> Result<Self, SpendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendPaths) -> Result<(), SpendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SpendError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Event loop tick interval
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "€");
        assert!(!settings.skip_intro);
        assert_eq!(settings.animation.welcome_hide_ms, 2500);
        assert_eq!(settings.animation.form_show_ms, 3500);
        assert_eq!(settings.animation.drawer_close(), Duration::from_millis(300));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.skip_intro = true;
        settings.theme = ThemeName::HighContrast;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded.skip_intro);
        assert_eq!(loaded.theme, ThemeName::HighContrast);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"skip_intro": true}"#).unwrap();
        assert!(loaded.skip_intro);
        assert_eq!(loaded.tick_rate_ms, 50);
        assert_eq!(loaded.animation, AnimationTimings::default());
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.tick_rate(), Duration::from_millis(10));
    }
}
