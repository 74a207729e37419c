use crate::state::config::AppConfig;
use crate::{ always_eprint, debug_print };
use dioxus::prelude::*;
use std::rc::Rc;

pub type ConfigUpdater = Rc<dyn Fn(Box<dyn FnOnce(&mut AppConfig)>)>;

/// Creates a config updater function that applies changes, saves and
/// publishes the new config through the signal
pub fn create_config_updater(config_signal: Signal<AppConfig>) -> ConfigUpdater {
    Rc::new(move |updater: Box<dyn FnOnce(&mut AppConfig)>| {
        let mut signal = config_signal;
        let mut new_config = signal.peek().clone();
        updater(&mut new_config);
        new_config.last_updated = chrono::Utc::now();
        if let Err(e) = new_config.save() {
            always_eprint!("❌ Failed to save config: {}", e);
        }

        signal.set(new_config);
        debug_print!("[config_utils] Config updated");
    })
}

/// Provide the config signal to the whole tree; called once by the root component
pub fn use_config_provider(init: impl FnOnce() -> AppConfig) -> Signal<AppConfig> {
    let config = use_signal(init);
    use_context_provider(move || config)
}

/// Hook for managing configuration state with automatic updates
///
/// Returns a tuple of (config_signal, update_config_fn)
/// The update function can be used to make atomic config updates
pub fn use_config() -> (Signal<AppConfig>, ConfigUpdater) {
    let config = use_context::<Signal<AppConfig>>();
    let update_config = use_hook(move || create_config_updater(config));
    (config, update_config)
}
