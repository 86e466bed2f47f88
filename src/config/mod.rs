//! Layered application configuration

mod app_config;

pub use app_config::{AppConfig, JotformConfig, LogFormat, LoggingConfig, ServerConfig};
