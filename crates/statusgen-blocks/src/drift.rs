//! Drift detection between a file's current lines and its regenerated lines.

use std::fmt;

use similar::TextDiff;

/// The first divergence between two line sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// Lines at the same position differ.
    LineMismatch {
        label: String,
        /// Zero-based index of the first differing line.
        line: usize,
        before: String,
        after: String,
    },
    /// Every shared position matches but the line counts differ.
    LengthMismatch {
        label: String,
        before: usize,
        after: usize,
    },
}

impl Drift {
    pub fn label(&self) -> &str {
        match self {
            Drift::LineMismatch { label, .. } | Drift::LengthMismatch { label, .. } => label,
        }
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drift::LineMismatch {
                label,
                line,
                before,
                after,
            } => write!(
                f,
                "The generated {} file is different at line {}.\n{}\n\tvs\n{}",
                label,
                line + 1,
                before.trim_end_matches(['\r', '\n']),
                after.trim_end_matches(['\r', '\n'])
            ),
            Drift::LengthMismatch {
                label,
                before,
                after,
            } => write!(
                f,
                "The generated {} file has a different line count ({} vs {}).",
                label, before, after
            ),
        }
    }
}

/// Compares `before` against `after` and reports the first divergence.
///
/// Positions are walked up to the shorter length and the first differing
/// line wins; later differences are not reported. Only when every shared
/// position matches is the line count compared. Returns `None` when the
/// sequences are identical.
///
/// # Example
/// ```
/// use statusgen_blocks::{Drift, compare};
///
/// let before = vec!["a\n", "b\n"];
/// let after = vec!["a\n", "c\n"];
///
/// match compare("h", &before, &after) {
///     Some(Drift::LineMismatch { line, .. }) => assert_eq!(line, 1),
///     other => panic!("unexpected {:?}", other),
/// }
/// assert!(compare("h", &before, &before).is_none());
/// ```
pub fn compare<A: AsRef<str>, B: AsRef<str>>(label: &str, before: &[A], after: &[B]) -> Option<Drift> {
    for (index, (old, new)) in before.iter().zip(after).enumerate() {
        if old.as_ref() != new.as_ref() {
            return Some(Drift::LineMismatch {
                label: label.to_string(),
                line: index,
                before: old.as_ref().to_string(),
                after: new.as_ref().to_string(),
            });
        }
    }

    if before.len() != after.len() {
        return Some(Drift::LengthMismatch {
            label: label.to_string(),
            before: before.len(),
            after: after.len(),
        });
    }

    None
}

/// Renders a unified diff between two line sequences.
///
/// Returns an empty string when the sequences are equal.
pub fn unified_diff<A: AsRef<str>, B: AsRef<str>>(label: &str, before: &[A], after: &[B]) -> String {
    let old: String = before.iter().map(AsRef::as_ref).collect();
    let new: String = after.iter().map(AsRef::as_ref).collect();
    if old == new {
        return String::new();
    }

    TextDiff::from_lines(&old, &new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string()
}
