//! Integration tests for login, token persistence, and session resume.
//!
//! The wiremock server stands in for the backend; the token file lives in
//! a tempdir so every test starts from a fresh CLI-like environment.

use quanngon_api::error::AuthError;
use quanngon_api::token::{FileTokenStore, TokenStore};
use quanngon_integration_tests::{api_with_token_file, profile_json};
use quanngon_shell::SessionShell;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Login Tests
// =============================================================================

#[tokio::test]
async fn test_login_persists_token_to_disk() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let token_file = dir.path().join("token");
    let api = api_with_token_file(&server, &token_file);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "lan@example.com",
            "password": "secret123",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-disk"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    api.auth()
        .login("lan@example.com", "secret123")
        .await
        .expect("login succeeds");

    let stored = std::fs::read_to_string(&token_file).expect("token file written");
    assert_eq!(stored.trim(), "tok-disk");
}

#[tokio::test]
async fn test_rejection_maps_backend_code_over_http() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let api = api_with_token_file(&server, &dir.path().join("token"));

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(
            json!({"code": "INVALID_CREDENTIALS", "message": "Unauthorized"}),
        ))
        .mount(&server)
        .await;

    let err = api
        .auth()
        .login("lan@example.com", "wrong")
        .await
        .expect_err("login rejected");
    match err {
        AuthError::Rejected(message) => {
            assert_eq!(message, "Thông tin đăng nhập không hợp lệ");
        }
        AuthError::Http(e) => panic!("expected rejection, got {e}"),
    }
}

#[tokio::test]
async fn test_token_survives_process_restart() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let token_file = dir.path().join("token");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("u1", "Lan", "cus")))
        .mount(&server)
        .await;

    let first = api_with_token_file(&server, &token_file);
    first
        .auth()
        .login("lan@example.com", "secret123")
        .await
        .expect("login succeeds");

    // A second Api over the same file is what a fresh CLI invocation builds.
    let second = api_with_token_file(&server, &token_file);
    let profile = second.auth().me().await.expect("profile loads");
    assert_eq!(profile.name, "Lan");
}

// =============================================================================
// Session Resume Tests
// =============================================================================

#[tokio::test]
async fn test_stale_token_file_removed_on_resume() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let token_file = dir.path().join("token");

    FileTokenStore::new(&token_file)
        .set("tok-stale")
        .expect("seed token");

    let shell = SessionShell::new(api_with_token_file(&server, &token_file));

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-stale"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})),
        )
        .mount(&server)
        .await;

    assert!(shell.resume().await.is_none());
    assert!(!shell.is_authenticated());
    assert!(!token_file.exists(), "stale token file should be removed");
}

#[tokio::test]
async fn test_resume_without_token_file_stays_offline() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let shell = SessionShell::new(api_with_token_file(&server, &dir.path().join("token")));

    assert!(shell.resume().await.is_none());
    assert!(
        server
            .received_requests()
            .await
            .expect("requests recorded")
            .is_empty(),
        "no token means no network"
    );
}
