//! Configuration loading
//!
//! Builds an [`orion_domain::Config`] from `.env`, config files and
//! `ORION_*` environment variables.

pub mod loader;

pub use loader::{apply_env_overrides, load, load_from_env, load_from_file, probe_config_paths};
