//! # ORION Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP transport and the authenticated API client with
//!   its token-refresh interceptor
//! - Typed clients for the auth, brand, data source and content endpoints
//! - Credential stores (memory, JSON file, OS keychain)
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `orion-core`
//! - Depends on `orion-domain` and `orion-core`
//! - Contains all "impure" code (network, filesystem, keychain)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientConfig, ApiError, ApiErrorCategory, AuthApi, BrandApi, ContentApi,
    DataSourceApi, OrionApi,
};
pub use errors::InfraError;
pub use http::HttpClient;
pub use storage::{
    build_token_store, FileTokenStore, KeychainTokenStore, MemoryTokenStore, SessionStores,
};
