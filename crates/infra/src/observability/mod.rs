//! Observability
//!
//! Structured logging through `tracing`. Call sites log with fields and
//! never include credential values.

pub mod logging;

pub use logging::init;
