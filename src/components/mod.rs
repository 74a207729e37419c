pub mod code_block;
pub mod copy_button;
pub mod header;
pub mod option_selector;
pub mod playground;
pub mod preview_renderer;
pub mod sidebar;
pub mod theme_toggler;
pub mod ui;
pub mod usage_examples;
pub mod utility_grid;
pub mod utility_page;
