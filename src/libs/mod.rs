pub mod clipboard;
pub mod markup;
pub mod playground;
pub mod preview;
pub mod theme;
pub mod ui;
