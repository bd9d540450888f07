//! Server setup and initialization
//!
//! Provides the application builder and server runner. Every dependency is
//! constructed here and passed down explicitly.

use std::sync::Arc;

use axum::Router;
use lingo_common::{AppConfig, AppError, JwtService};
use lingo_core::traits::TranslationProvider;
use lingo_db::{create_pool, run_migrations, PgTranslationRepository, PgUserRepository};
use lingo_service::ServiceContext;
use lingo_translator::{HttpTranslationProvider, ProviderConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let is_production = state.config().env.is_production();
    let cors = state.config().cors.clone();
    let router = apply_middleware(router, &cors, is_production);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let provider = Arc::new(HttpTranslationProvider::new(ProviderConfig::from(
        &config.translator,
    )));
    create_app_state_with_provider(config, provider).await
}

/// Initialize AppState with a caller-supplied translation provider.
///
/// Tests inject a stub provider here so no request leaves the process.
pub async fn create_app_state_with_provider(
    config: AppConfig,
    provider: Arc<dyn TranslationProvider>,
) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = lingo_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create the schema idempotently
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let translation_repo = Arc::new(PgTranslationRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContext::new(user_repo, translation_repo, provider, jwt_service);

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{address}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.server.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &address).await
}
