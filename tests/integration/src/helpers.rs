//! Test helpers for integration tests
//!
//! Provides utilities for spawning in-process test servers and making HTTP
//! requests. The translation provider is replaced with an in-process stub so
//! no request ever leaves the test.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use lingo_api::{create_app, create_app_state_with_provider};
use lingo_common::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig, TranslatorConfig,
};
use lingo_core::traits::{TranslatedChunk, TranslationProvider};
use lingo_core::value_objects::LanguageCode;
use lingo_core::DomainError;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Marker that makes the stub provider fail a chunk
pub const FAILING_MARKER: &str = "[provider-error]";

/// Stub translation provider: uppercases chunks and always detects "en".
/// A chunk containing [`FAILING_MARKER`] fails, for exercising the 500 path.
struct StubProvider;

#[async_trait]
impl TranslationProvider for StubProvider {
    async fn translate_chunk(
        &self,
        text: &str,
        _target: &LanguageCode,
    ) -> Result<TranslatedChunk, DomainError> {
        if text.contains(FAILING_MARKER) {
            return Err(DomainError::TranslationFailed(
                "stub provider failure".to_string(),
            ));
        }
        Ok(TranslatedChunk::new(text.to_uppercase(), "en"))
    }
}

/// Check that the test environment is available, printing a skip notice
/// otherwise. Tests return early when this is false.
pub async fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping integration test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Build a test configuration against the test database
fn test_config() -> Result<AppConfig> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| anyhow!("DATABASE_URL not set"))?;

    Ok(AppConfig {
        env: Environment::Development,
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-key".to_string(),
            access_token_expiry: 1800,
        },
        translator: TranslatorConfig {
            // Never contacted; the stub provider is injected instead
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: None,
        },
        cors: CorsConfig::default(),
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with the stub provider
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        let state = create_app_state_with_provider(config, Arc::new(StubProvider)).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with JSON body and auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with a form-urlencoded body
    pub async fn post_form<T: Serialize>(&self, path: &str, form: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).form(form).send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }
}

/// Assert the response status, returning the response for further checks
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "Expected status {expected}, got {status}. Body: {body}"
        ));
    }
    Ok(response)
}

/// Assert the response status and deserialize the JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let response = assert_status(response, expected).await?;
    Ok(response.json::<T>().await?)
}
