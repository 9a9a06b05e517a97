//! Region splicing.
//!
//! Replaces the interior of a marked region with a generated fragment while
//! copying every other line through verbatim:
//!
//! ```text
//! header                        header
//! //! BEGIN GENERATED CODE      //! BEGIN GENERATED CODE
//! stale line            --->    fresh line 1
//! //! END GENERATED CODE        fresh line 2
//! footer                        //! END GENERATED CODE
//!                               footer
//! ```
//!
//! Malformed marker layouts are not rejected here. A missing begin marker
//! leaves the file untouched, and a begin marker with no end marker drops
//! everything after it. Both cases are reported through [`RegionStatus`] so
//! the caller can decide, via [`SpliceMode`], whether they are fatal.

use crate::error::{Error, Result};
use crate::marker::MarkerPair;

/// How a splice pass went, judged from the marker layout it encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStatus {
    /// Every begin marker was followed by an end marker.
    Replaced {
        /// Number of begin markers that received the fragment.
        regions: usize,
    },
    /// No begin marker; the output equals the input.
    NoMarkerFound,
    /// The last begin marker is never closed; the output ends with the fragment.
    UnterminatedRegion,
}

/// Whether a non-[`RegionStatus::Replaced`] outcome is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpliceMode {
    /// Accept every outcome and keep the spliced lines as produced.
    #[default]
    Lenient,
    /// Treat a missing or unterminated region as an error.
    Strict,
}

/// Result of a splice pass: the new line sequence plus what was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub lines: Vec<String>,
    pub status: RegionStatus,
}

impl Splice {
    /// Applies the splice mode to this result.
    ///
    /// In lenient mode the result is returned untouched. In strict mode a
    /// missing or unterminated region becomes an error naming `label`.
    pub fn check(self, mode: SpliceMode, label: &str) -> Result<Self> {
        match (mode, self.status) {
            (SpliceMode::Lenient, _) | (_, RegionStatus::Replaced { .. }) => Ok(self),
            (SpliceMode::Strict, RegionStatus::NoMarkerFound) => Err(Error::MissingMarker {
                label: label.to_string(),
            }),
            (SpliceMode::Strict, RegionStatus::UnterminatedRegion) => {
                Err(Error::UnterminatedRegion {
                    label: label.to_string(),
                })
            }
        }
    }
}

/// Splices `replacement` into every marked region of `original`.
///
/// Lines are copied while replaying. An end marker turns replay back on
/// before it is considered, so the end marker line itself is always kept.
/// A begin marker is copied, replay stops, and the whole replacement is
/// appended right after it. Lines inside the region are skipped until the
/// next end marker.
///
/// # Example
/// ```
/// use statusgen_blocks::{MarkerPair, RegionStatus, splice};
///
/// let original = vec![
///     "//! BEGIN GENERATED CODE\n".to_string(),
///     "old\n".to_string(),
///     "//! END GENERATED CODE\n".to_string(),
/// ];
/// let result = splice(&original, &["new\n".to_string()], &MarkerPair::default());
///
/// assert_eq!(result.lines[1], "new\n");
/// assert_eq!(result.status, RegionStatus::Replaced { regions: 1 });
/// ```
pub fn splice<S: AsRef<str>>(original: &[S], replacement: &[String], markers: &MarkerPair) -> Splice {
    let mut lines = Vec::with_capacity(original.len() + replacement.len());
    let mut replay = true;
    let mut regions = 0;

    for line in original {
        let line = line.as_ref();
        if markers.is_end(line) {
            replay = true;
        }
        if replay {
            lines.push(line.to_string());
        }
        if markers.is_begin(line) {
            replay = false;
            regions += 1;
            lines.extend(replacement.iter().cloned());
        }
    }

    let status = if regions == 0 {
        RegionStatus::NoMarkerFound
    } else if !replay {
        RegionStatus::UnterminatedRegion
    } else {
        RegionStatus::Replaced { regions }
    };

    match status {
        RegionStatus::NoMarkerFound => tracing::debug!("no begin marker, output left unchanged"),
        RegionStatus::UnterminatedRegion => {
            tracing::debug!("begin marker never closed, trailing lines dropped")
        }
        RegionStatus::Replaced { regions } => tracing::debug!(regions, "spliced generated region"),
    }

    Splice { lines, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        crate::lines::split_lines(text)
    }

    #[test]
    fn test_replaces_region_interior() {
        let original = lines("a\n//! BEGIN GENERATED CODE\nold\n//! END GENERATED CODE\nb\n");
        let result = splice(&original, &lines("new\n"), &MarkerPair::default());
        assert_eq!(
            result.lines,
            lines("a\n//! BEGIN GENERATED CODE\nnew\n//! END GENERATED CODE\nb\n")
        );
        assert_eq!(result.status, RegionStatus::Replaced { regions: 1 });
    }

    #[test]
    fn test_no_marker_is_noop() {
        let original = lines("a\nb\n");
        let result = splice(&original, &lines("new\n"), &MarkerPair::default());
        assert_eq!(result.lines, original);
        assert_eq!(result.status, RegionStatus::NoMarkerFound);
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let original = lines("a\n//! END GENERATED CODE\nb\n");
        let result = splice(&original, &lines("new\n"), &MarkerPair::default());
        assert_eq!(result.lines, original);
        assert_eq!(result.status, RegionStatus::NoMarkerFound);
    }

    #[test]
    fn test_strict_rejects_unterminated() {
        let original = lines("//! BEGIN GENERATED CODE\nold\n");
        let result = splice(&original, &lines("new\n"), &MarkerPair::default());
        assert!(matches!(
            result.check(SpliceMode::Strict, "header"),
            Err(Error::UnterminatedRegion { .. })
        ));
    }

    #[test]
    fn test_strict_rejects_missing_marker() {
        let result = splice(&lines("a\n"), &lines("new\n"), &MarkerPair::default());
        assert!(matches!(
            result.check(SpliceMode::Strict, "header"),
            Err(Error::MissingMarker { .. })
        ));
    }

    #[test]
    fn test_lenient_accepts_everything() {
        let result = splice(&lines("a\n"), &lines("new\n"), &MarkerPair::default());
        let checked = result.clone().check(SpliceMode::Lenient, "header").unwrap();
        assert_eq!(checked, result);
    }
}
