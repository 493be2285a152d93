//! # ORION App
//!
//! Composition root for a dashboard front end.
//!
//! This crate contains:
//! - [`AppContext`], which builds the credential store, the API client, the
//!   endpoint clients and the session controller from one [`Config`]
//! - Logging helpers shared by whatever drives the context
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Holds no business logic of its own
//!
//! [`Config`]: orion_domain::Config

pub mod context;
pub mod utils;

pub use context::AppContext;
