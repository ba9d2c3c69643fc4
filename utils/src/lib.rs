//! Shared utilities for wallet database maintenance tools.

pub mod logging;

pub use logging::init_tracing;
