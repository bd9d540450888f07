//! Connection pool management

mod postgres;

pub use postgres::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig};

/// Re-export the pool type used throughout the workspace
pub use sqlx::PgPool;
