//! ORION HTTP API client
//!
//! [`ApiClient`] owns transport, bearer authentication and the token
//! refresh cycle. The resource clients ([`AuthApi`], [`BrandApi`],
//! [`DataSourceApi`], [`ContentApi`]) share one client through an `Arc` and
//! only know paths and payload types.

pub mod auth;
pub mod brands;
pub mod client;
pub mod content;
pub mod data_sources;
pub mod errors;
pub mod request;

use std::sync::Arc;

pub use auth::AuthApi;
pub use brands::BrandApi;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use content::ContentApi;
pub use data_sources::DataSourceApi;
pub use errors::{ApiError, ApiErrorCategory};
pub use request::ApiRequest;

/// All resource clients over one shared [`ApiClient`].
pub struct OrionApi {
    pub auth: Arc<AuthApi>,
    pub brands: BrandApi,
    pub data_sources: DataSourceApi,
    pub content: ContentApi,
}

impl OrionApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            auth: Arc::new(AuthApi::new(client.clone())),
            brands: BrandApi::new(client.clone()),
            data_sources: DataSourceApi::new(client.clone()),
            content: ContentApi::new(client),
        }
    }
}
