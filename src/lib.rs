pub mod config;
pub mod logging;
pub mod plugin;
pub mod version;
