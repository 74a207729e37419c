#![windows_subsystem = "windows"]
#![allow(non_snake_case)]

mod components;
mod families;
mod libs;
mod state;
mod utils;

use dioxus::desktop::{ Config, LogicalSize, WindowBuilder };
use dioxus::prelude::*;
use libs::ui;
use utils::constants::{ APP_NAME, APP_NAME_DISPLAY, APP_VERSION };

fn main() {
    utils::logger::init_logging();

    always_print!("🚀 Starting {} v{}", APP_NAME, APP_VERSION);

    // Registry data is static; report anything inconsistent before the UI hides it
    for family in families::all() {
        if let Err(e) = families::validate(*family) {
            always_eprint!("❌ {}", e);
        }
    }
    debug_print!("📚 {} utility families registered", families::all().len());

    let window_builder = WindowBuilder::default()
        .with_title(APP_NAME_DISPLAY)
        .with_inner_size(LogicalSize::new(1280, 860))
        .with_min_inner_size(LogicalSize::new(900, 600))
        .with_resizable(true);

    let config = Config::new()
        .with_window(window_builder)
        .with_menu(None);

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app_with_stylesheets)
}

fn app_with_stylesheets() -> Element {
    rsx! {
        ui::app {}
    }
}
