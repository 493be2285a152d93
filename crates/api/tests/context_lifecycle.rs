//! Integration tests for AppContext lifecycle
//!
//! A context is wired against a mock ORION server with a file-backed
//! credential store, so restarts can be simulated by building a second
//! context over the same session file.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use orion_app::AppContext;
use orion_core::{Navigator, TokenStore};
use orion_domain::constants::{BRANDS_PATH, CURRENT_USER_PATH, LOGIN_PATH, TOKEN_REFRESH_PATH};
use orion_domain::{Config, Language, LoginCredentials, StorageBackend, StorageConfig};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct CountingNavigator(AtomicUsize);

impl CountingNavigator {
    fn redirects(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn redirect_to_landing(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn config_for(server: &MockServer, session_file: &Path) -> Config {
    let mut config = Config {
        storage: StorageConfig {
            backend: StorageBackend::File,
            path: session_file.to_path_buf(),
            ..Default::default()
        },
        ..Config::default()
    };
    config.api.base_url = server.uri();
    config
}

fn user_json() -> Value {
    json!({"id": 7, "username": "linh", "email": "linh@example.com"})
}

#[tokio::test]
async fn session_survives_a_restart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "access-1", "refresh": "refresh-1", "user": user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CURRENT_USER_PATH))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    let navigator = Arc::new(CountingNavigator::default());

    let first = AppContext::new(config_for(&server, &session_file), navigator.clone()).unwrap();
    first.session.login(&LoginCredentials::new("linh", "secret")).await.unwrap();
    drop(first);

    let second = AppContext::new(config_for(&server, &session_file), navigator.clone()).unwrap();
    let state = second.start().await;

    assert!(!state.is_loading);
    assert_eq!(state.user.map(|u| u.id), Some(7));
    assert_eq!(navigator.redirects(), 0);
}

#[tokio::test]
async fn start_without_stored_session_is_signed_out() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir.path().join("session.json"));
    let ctx = AppContext::new(config, Arc::new(CountingNavigator::default())).unwrap();

    assert!(ctx.session.is_loading());
    let state = ctx.start().await;

    assert!(state.user.is_none());
    assert!(!state.is_loading);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejected_refresh_signs_the_user_out_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "access-1", "refresh": "refresh-1", "user": user_json()
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(BRANDS_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_REFRESH_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir.path().join("session.json"));
    let navigator = Arc::new(CountingNavigator::default());
    let ctx = AppContext::new(config, navigator.clone()).unwrap();
    ctx.session.login(&LoginCredentials::new("linh", "secret")).await.unwrap();
    assert!(ctx.session.is_authenticated());

    let err = ctx.api.brands.list().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!ctx.session.is_authenticated());
    assert_eq!(navigator.redirects(), 1);
    assert_eq!(ctx.stores.tokens.access_token().await.unwrap(), None);
}

#[tokio::test]
async fn language_choice_outlives_logout() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let session_file = dir.path().join("session.json");
    let navigator = Arc::new(CountingNavigator::default());

    let ctx = AppContext::new(config_for(&server, &session_file), navigator.clone()).unwrap();
    assert_eq!(ctx.language(Some("en-US")).await, Language::En);
    assert_eq!(ctx.language(None).await, Language::Vi);

    ctx.change_language(Language::En).await.unwrap();
    ctx.stores.tokens.clear().await.unwrap();
    drop(ctx);

    let reopened = AppContext::new(config_for(&server, &session_file), navigator).unwrap();
    assert_eq!(reopened.language(Some("vi-VN")).await, Language::En);
}
