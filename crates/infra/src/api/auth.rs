//! Authentication endpoints
//!
//! [`AuthApi`] is the HTTP side of the session controller: it implements the
//! [`AuthGateway`] port on top of the shared [`ApiClient`].

use std::sync::Arc;

use async_trait::async_trait;
use orion_core::AuthGateway;
use orion_domain::constants::{
    APPLE_LOGIN_PATH, CURRENT_USER_PATH, GOOGLE_LOGIN_PATH, LOGIN_PATH, LOGOUT_PATH,
    REGISTER_PATH,
};
use orion_domain::{
    AppleLoginRequest, GoogleLoginRequest, LoginCredentials, LoginResponse, OrionError,
    RegisterData, Result, User,
};
use tracing::{debug, instrument};

use super::client::ApiClient;

pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        let response: LoginResponse =
            self.client.post(LOGIN_PATH, credentials).await.map_err(OrionError::from)?;
        debug!(user_id = response.user.id, "login accepted");
        Ok(response)
    }

    #[instrument(skip(self, data), fields(username = %data.username))]
    async fn register(&self, data: &RegisterData) -> Result<LoginResponse> {
        let response: LoginResponse =
            self.client.post(REGISTER_PATH, data).await.map_err(OrionError::from)?;
        debug!(user_id = response.user.id, "registration accepted");
        Ok(response)
    }

    #[instrument(skip(self, access_token))]
    async fn login_with_google(&self, access_token: &str) -> Result<LoginResponse> {
        let body = GoogleLoginRequest { access_token: access_token.to_string() };
        Ok(self.client.post(GOOGLE_LOGIN_PATH, &body).await?)
    }

    #[instrument(skip(self, identity_token))]
    async fn login_with_apple(&self, identity_token: &str) -> Result<LoginResponse> {
        let body = AppleLoginRequest { identity_token: identity_token.to_string() };
        Ok(self.client.post(APPLE_LOGIN_PATH, &body).await?)
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<User> {
        Ok(self.client.get(CURRENT_USER_PATH).await?)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<()> {
        let _: serde_json::Value = self.client.post_empty(LOGOUT_PATH).await?;
        Ok(())
    }
}
