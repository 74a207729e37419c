use crate::families;
use crate::libs::clipboard::ack_delay;
use crate::libs::theme::ThemeMode;
use crate::state::paths;
use crate::utils::constants::COPY_ACK_DEFAULT_MS;
use crate::utils::data::{ self, DataError };
use crate::{ always_eprint, debug_eprint, debug_print };
use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    // Metadata
    pub version: String,
    pub last_updated: DateTime<Utc>,
    // UI settings
    pub theme: ThemeMode,
    pub copy_ack_ms: u64, // clamped to the 1200-2000ms window when used
    pub last_family: String, // registry id reopened at startup
}

impl AppConfig {
    pub fn load() -> Self {
        Self::load_from(&paths::data::config_json())
    }

    /// Load config from `path`, falling back to (and writing) defaults if it
    /// is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        match data::load_json_from_file::<AppConfig>(path) {
            Ok(config) => {
                debug_print!("⚙️ Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                debug_eprint!("⚠️ {}. Using defaults.", e);
                let default_config = Self::default();
                if let Err(e) = default_config.save_to(path) {
                    always_eprint!("❌ Failed to write default config: {}", e);
                }
                default_config
            }
        }
    }

    pub fn save(&self) -> Result<(), DataError> {
        self.save_to(&paths::data::config_json())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), DataError> {
        data::save_json_to_file(self, path)
    }

    /// Acknowledgement delay for copy buttons
    pub fn ack_delay(&self) -> Duration {
        ack_delay(self.copy_ack_ms)
    }

    /// Family to open at startup; unknown ids fall back to the first family
    pub fn start_family(&self) -> &'static dyn families::UtilityFamily {
        families::find(&self.last_family).unwrap_or_else(families::default_family)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: crate::utils::constants::APP_VERSION.to_string(),
            last_updated: Utc::now(),
            theme: ThemeMode::default(),
            copy_ack_ms: COPY_ACK_DEFAULT_MS,
            last_family: families::default_family().id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{ COPY_ACK_MAX_MS, COPY_ACK_MIN_MS };
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults_and_writes_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig::load_from(&path);
        assert_eq!(config.copy_ack_ms, COPY_ACK_DEFAULT_MS);
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(path.exists());
    }

    #[test]
    fn saved_settings_are_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.theme = ThemeMode::Dim;
        config.last_family = "font-weight".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded, config);
        assert_eq!(loaded.start_family().id(), "font-weight");
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "theme": "Dark" }"#).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.theme, ThemeMode::Dark);
        assert_eq!(loaded.copy_ack_ms, COPY_ACK_DEFAULT_MS);
        assert_eq!(loaded.last_family, families::default_family().id());
    }

    #[test]
    fn ack_delay_is_clamped() {
        let mut config = AppConfig::default();
        config.copy_ack_ms = 0;
        assert_eq!(config.ack_delay(), Duration::from_millis(COPY_ACK_MIN_MS));
        config.copy_ack_ms = 9_000;
        assert_eq!(config.ack_delay(), Duration::from_millis(COPY_ACK_MAX_MS));
    }

    #[test]
    fn unknown_family_falls_back_to_default() {
        let mut config = AppConfig::default();
        config.last_family = "removed-family".to_string();
        assert_eq!(config.start_family().id(), families::default_family().id());
    }
}
