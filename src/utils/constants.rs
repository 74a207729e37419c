/// Application constants used throughout the application
/// This file centralizes all application naming and branding constants

/// The display name of the application (with proper casing)
pub const APP_NAME: &str = "TailRef";

/// The display name with spaces for better readability
pub const APP_NAME_DISPLAY: &str = "TailRef · Tailwind utility reference";

/// The lowercase version for file names, config directories, etc.
pub const APP_NAME_LOWERCASE: &str = "tailref";

/// Qualifier and organization used to resolve platform directories
pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORGANIZATION: &str = "tailref";

/// Version of the application (should match Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "TAILREF_CONFIG_DIR";

/// How long the "Copied" acknowledgement stays visible (milliseconds)
pub const COPY_ACK_DEFAULT_MS: u64 = 1500;
pub const COPY_ACK_MIN_MS: u64 = 1200;
pub const COPY_ACK_MAX_MS: u64 = 2000;

/// Tailwind browser runtime, so arbitrary classes typed in a playground render live
pub const TAILWIND_BROWSER_URL: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// daisyUI component styles for the reference UI itself
pub const DAISYUI_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
