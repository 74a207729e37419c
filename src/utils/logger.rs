/// Logging setup and the crate's print macros
///
/// The macros keep their console-style names but go through the `log`
/// facade, so `RUST_LOG` decides what is shown.

/// Initialize env_logger; `RUST_LOG` overrides the default filter
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info,tailref=debug");
    // A second init (tests, hot reload) keeps the first logger
    let _ = env_logger::Builder::from_env(env).format_timestamp_millis().try_init();
}

/// Debug print macro - developer diagnostics
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

/// Debug error print macro - recoverable problems
#[macro_export]
macro_rules! debug_eprint {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

/// Always print macro - for messages that should show with the default filter
#[macro_export]
macro_rules! always_print {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

/// Always error print macro - for critical errors
#[macro_export]
macro_rules! always_eprint {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}
