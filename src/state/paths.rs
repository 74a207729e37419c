/// Centralized path definitions
///
/// ## Path Structure
/// - `<config dir>/config.json` - application configuration
///
/// The config directory is the platform one from `directories`
/// (e.g. `~/.config/tailref` on Linux, `%APPDATA%\tailref\tailref\config` on
/// Windows) unless `TAILREF_CONFIG_DIR` points somewhere else.
use crate::debug_print;
use crate::utils::constants::{ APP_NAME_LOWERCASE, APP_ORGANIZATION, APP_QUALIFIER, CONFIG_DIR_ENV };
use std::path::PathBuf;

/// Resolve the configuration directory, honouring the environment override
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    match directories::ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME_LOWERCASE) {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            // No home directory; keep data next to the working directory
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            debug_print!("📂 No platform config dir, using {}", cwd.display());
            cwd.join("data")
        }
    }
}

/// Application data directory paths
pub mod data {
    use super::config_dir;
    use std::path::PathBuf;

    /// Application configuration file
    pub fn config_json() -> PathBuf {
        config_dir().join("config.json")
    }
}
