//! Token refresh across resource clients and persistent stores.

mod support;

use std::sync::Arc;

use futures::future::join_all;
use orion_core::TokenStore;
use orion_domain::constants::{CONTENT_PATH, TOKEN_REFRESH_PATH};
use orion_domain::{ContentQuery, CredentialPair};
use orion_infra::{ApiClient, ApiClientConfig, FileTokenStore, MemoryTokenStore, OrionApi};
use serde_json::json;
use support::{CountingNavigator, Harness};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn burst_of_expired_requests_refreshes_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/v1/content/\d+/$"))
        .and(header("Authorization", "Bearer renewed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "brand": 3, "title": "Tet campaign"
        })))
        .expect(5)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "renewed"}))
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_credentials(CredentialPair::new("expired", "refresh-1"));
    let h = Harness::new(&server, store);

    let results = join_all((1..=5).map(|id| h.api.content.get(id))).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(h.navigator.redirects(), 0);
}

#[tokio::test]
async fn refreshed_token_is_persisted_to_the_session_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONTENT_PATH))
        .and(header("Authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CONTENT_PATH))
        .and(header("Authorization", "Bearer renewed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "renewed", "refresh": "refresh-2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session_path = dir.path().join("session.json");
    let store = Arc::new(FileTokenStore::new(&session_path));
    store.store_credentials(&CredentialPair::new("expired", "refresh-1")).await.unwrap();

    let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
    let client = ApiClient::builder()
        .config(config)
        .token_store(store.clone())
        .navigator(Arc::new(CountingNavigator::default()))
        .build()
        .unwrap();
    let api = OrionApi::new(Arc::new(client));

    let page = api.content.list(&ContentQuery::default()).await.unwrap();
    assert!(page.is_empty());

    let reopened = FileTokenStore::new(&session_path);
    assert_eq!(reopened.access_token().await.unwrap().as_deref(), Some("renewed"));
    assert_eq!(reopened.refresh_token().await.unwrap().as_deref(), Some("refresh-2"));
}

#[tokio::test]
async fn revoked_refresh_token_redirects_once_for_concurrent_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_delay(std::time::Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_credentials(CredentialPair::new("expired", "revoked"));
    let h = Harness::new(&server, store);

    let results = join_all((1..=3).map(|id| h.api.data_sources.get(id))).await;

    assert!(results.iter().all(|r| r.as_ref().is_err_and(|e| e.is_unauthorized())));
    assert_eq!(h.navigator.redirects(), 1);
    assert_eq!(h.store.access_token().await.unwrap(), None);
    assert_eq!(h.store.refresh_token().await.unwrap(), None);
}
