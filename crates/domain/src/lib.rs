//! # ORION Domain
//!
//! Data model shared by every ORION crate.
//!
//! This crate contains:
//! - API record and payload types (brands, data sources, content, users)
//! - Pagination envelope and list normalization
//! - Domain error type and Result definition
//! - Configuration structures
//! - Endpoint paths and storage keys
//!
//! ## Architecture
//! - No dependencies on other ORION crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
