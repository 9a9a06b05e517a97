//! Command implementations for statusgen-cli

pub mod sync;

pub use sync::run_sync;
