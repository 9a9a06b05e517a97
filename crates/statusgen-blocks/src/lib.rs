//! Generated-region splicing and drift detection for statusgen.
//!
//! A generated region is the run of lines between a begin and an end marker
//! line inside an otherwise hand-maintained file:
//!
//! ```text
//! enum Status {
//!     //! BEGIN GENERATED CODE
//!     RUNNING = 0x1,  // running
//!     //! END GENERATED CODE
//! };
//! ```
//!
//! The [`splice`] module rewrites the interior of that region, and the
//! [`drift`] module answers whether a rewrite would change anything.
//!
//! All operations work on line sequences: `Vec<String>` where every line
//! keeps its own terminator, so splitting and joining a file is lossless.

pub mod drift;
pub mod error;
pub mod lines;
pub mod marker;
pub mod splice;

pub use drift::{Drift, compare, unified_diff};
pub use error::{Error, Result};
pub use lines::{join_lines, split_lines};
pub use marker::MarkerPair;
pub use splice::{RegionStatus, Splice, SpliceMode, splice};
