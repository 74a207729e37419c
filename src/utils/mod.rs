pub mod config;
pub mod constants;
pub mod data;
pub mod delay;
pub mod logger;
pub mod spacing;
