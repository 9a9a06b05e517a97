//! Status registry, code generation, and file synchronization for statusgen
//!
//! Generates enumerator and `case`/`return` fragments from an ordered status
//! registry and splices them into the marked regions of a declaration file
//! and an implementation file.

pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod registry;
pub mod sync;

pub use config::{CONFIG_FILE_NAME, SyncConfig, load_document};
pub use error::{Error, Result};
pub use generator::{GeneratedCode, GeneratorStyle, generate};
pub use registry::{EnumerationSource, RegistryFile, StatusEntry, StatusRegistry};
pub use sync::{CheckReport, CheckStatus, FilePlan, SyncEngine, SyncOptions, SyncPlan};
