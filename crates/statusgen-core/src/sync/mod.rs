//! SyncEngine for keeping generated regions in line with a status registry
//!
//! This module provides:
//! - **plan**: Read the file pair and compute the spliced contents
//! - **write**: Persist the spliced contents
//! - **compare**: Report drift between current and spliced contents

mod check;
mod engine;

pub use check::{CheckReport, CheckStatus};
pub use engine::{FilePlan, SyncEngine, SyncOptions, SyncPlan};
