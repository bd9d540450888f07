//! # lingo-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, Claims, JwtService};
pub use config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig,
    TranslatorConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
