//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance and the DATABASE_URL
//! environment variable; they skip gracefully otherwise. The translation
//! provider is an in-process stub (uppercase echo, detects "en").
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::helpers::FAILING_MARKER;
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and log in, returning (username, token)
async fn register_and_login(server: &TestServer) -> (String, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/register", &request).await.unwrap();
    let user: UserOut = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.username, request.username);

    let response = server
        .post_form(
            "/login",
            &LoginForm {
                username: request.username.clone(),
                password: request.password.clone(),
            },
        )
        .await
        .unwrap();
    let token: TokenOut = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(token.token_type, "bearer");

    (request.username, token.access_token)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/register", &request).await.unwrap();
    let user: UserOut = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert!(user.id > 0);
    assert!(!user.created_at.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password_is_401_with_challenge() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_form(
            "/login",
            &LoginForm {
                username: request.username.clone(),
                password: "definitely-wrong".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
}

#[tokio::test]
async fn test_login_correct_password_yields_accepted_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    // Token is accepted by the verifier on a protected endpoint
    let response = server
        .get_auth("/translations/history", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_protected_endpoint_rejects_missing_and_garbage_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/translations/history").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/translations/history", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Translation Tests
// ============================================================================

#[tokio::test]
async fn test_translate_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/translate", &TranslateRequest::new("hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_translate_returns_result_and_detected_language() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server
        .post_auth("/translate", &TranslateRequest::new("hello world"), &token)
        .await
        .unwrap();
    let translation: TranslationOut = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(translation.translated_text, "HELLO WORLD");
    assert_eq!(translation.source_lang, "en");
}

#[tokio::test]
async fn test_translate_long_text_concatenates_chunks_in_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    // 501 characters: two chunks through the stub, joined in order
    let text = format!("{}b", "a".repeat(500));
    let response = server
        .post_auth("/translate", &TranslateRequest::new(text), &token)
        .await
        .unwrap();
    let translation: TranslationOut = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(translation.translated_text, format!("{}B", "A".repeat(500)));
}

#[tokio::test]
async fn test_translate_empty_text_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server
        .post_auth("/translate", &TranslateRequest::new(""), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_provider_failure_is_500_and_leaves_no_history() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server
        .post_auth(
            "/translate",
            &TranslateRequest::new(format!("text {FAILING_MARKER}")),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    let response = server
        .get_auth("/translations/history", &token)
        .await
        .unwrap();
    let history: Vec<HistoryEntryOut> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history.is_empty());
}

// ============================================================================
// History Tests
// ============================================================================

#[tokio::test]
async fn test_history_lists_newest_first_with_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    for i in 0..3 {
        let response = server
            .post_auth(
                "/translate",
                &TranslateRequest::new(format!("text {i}")),
                &token,
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth("/translations/history", &token)
        .await
        .unwrap();
    let history: Vec<HistoryEntryOut> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].source_text, "text 2");
    assert_eq!(history[2].source_text, "text 0");
    assert_eq!(history[0].target_lang, "ja");
    assert_eq!(history[0].source_lang, "en");

    let response = server
        .get_auth("/translations/history?skip=1&limit=1", &token)
        .await
        .unwrap();
    let page: Vec<HistoryEntryOut> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].source_text, "text 1");
}

#[tokio::test]
async fn test_cannot_delete_another_users_record() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = register_and_login(&server).await;
    let (_, intruder_token) = register_and_login(&server).await;

    let response = server
        .post_auth("/translate", &TranslateRequest::new("private"), &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/translations/history", &owner_token)
        .await
        .unwrap();
    let history: Vec<HistoryEntryOut> = assert_json(response, StatusCode::OK).await.unwrap();
    let record_id = history[0].id;

    // Intruder sees not-found, indistinguishable from a bogus id
    let response = server
        .delete_auth(&format!("/translations/history/{record_id}"), &intruder_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Record is still there for the owner
    let response = server
        .delete_auth(&format!("/translations/history/{record_id}"), &owner_token)
        .await
        .unwrap();
    let out: MessageOut = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!out.message.is_empty());
}

#[tokio::test]
async fn test_clear_history_scopes_to_caller() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice_token) = register_and_login(&server).await;
    let (_, bob_token) = register_and_login(&server).await;

    for i in 0..3 {
        let response = server
            .post_auth(
                "/translate",
                &TranslateRequest::new(format!("alice {i}")),
                &alice_token,
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server
        .post_auth("/translate", &TranslateRequest::new("bob keeps this"), &bob_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth("/translations/history", &alice_token)
        .await
        .unwrap();
    let out: MessageOut = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(out.message.contains('3'));

    let response = server
        .get_auth("/translations/history", &alice_token)
        .await
        .unwrap();
    let alice_history: Vec<HistoryEntryOut> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(alice_history.is_empty());

    let response = server
        .get_auth("/translations/history", &bob_token)
        .await
        .unwrap();
    let bob_history: Vec<HistoryEntryOut> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bob_history.len(), 1);
    assert_eq!(bob_history[0].source_text, "bob keeps this");
}
