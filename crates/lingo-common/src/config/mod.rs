//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig,
    TranslatorConfig,
};
