pub mod config;
pub mod settings;

pub use config::{AppConfig, ConfigError};
