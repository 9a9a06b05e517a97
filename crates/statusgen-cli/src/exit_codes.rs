//! Stable exit codes for the statusgen binary.

/// Previews printed, files written, or no drift found.
pub const SUCCESS: i32 = 0;
/// Drift found, or a file or registry could not be read.
pub const FAILURE: i32 = 1;
/// Invalid flags; no file was touched.
pub const USAGE: i32 = 2;
