//! Shared fixtures for the infra integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use orion_core::{AuthSession, Navigator};
use orion_infra::{ApiClient, ApiClientConfig, AuthApi, MemoryTokenStore, OrionApi};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Navigator that counts redirects to the landing route.
#[derive(Default)]
pub struct CountingNavigator {
    redirects: AtomicUsize,
}

impl CountingNavigator {
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn redirect_to_landing(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// A session controller, API clients and store wired against a mock server.
pub struct Harness {
    pub store: Arc<MemoryTokenStore>,
    pub navigator: Arc<CountingNavigator>,
    pub api: OrionApi,
    pub session: AuthSession,
}

impl Harness {
    pub fn new(server: &MockServer, store: MemoryTokenStore) -> Self {
        let store = Arc::new(store);
        let navigator = Arc::new(CountingNavigator::default());
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        let client = ApiClient::builder()
            .config(config)
            .token_store(store.clone())
            .navigator(navigator.clone())
            .build()
            .expect("api client");

        let api = OrionApi::new(Arc::new(client));
        let gateway: Arc<AuthApi> = api.auth.clone();
        let session = AuthSession::new(gateway, store.clone());

        Self { store, navigator, api, session }
    }
}

pub fn user_json() -> Value {
    json!({
        "id": 7,
        "username": "linh",
        "email": "linh@example.com",
        "first_name": "Linh",
        "last_name": "Tran"
    })
}

pub fn login_json(access: &str, refresh: &str) -> Value {
    json!({"token": access, "refresh": refresh, "user": user_json()})
}
