//! Marker lines delimiting a generated region.

/// Marker text opening a generated region.
pub const BEGIN_MARKER: &str = "BEGIN GENERATED CODE";

/// Marker text closing a generated region.
pub const END_MARKER: &str = "END GENERATED CODE";

/// Comment sentinel placed before the marker text in C-family sources.
pub const DEFAULT_COMMENT_PREFIX: &str = "//!";

/// The begin/end literal pair a line must match, ignoring surrounding
/// whitespace, to count as a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    begin: String,
    end: String,
}

impl MarkerPair {
    /// Builds markers from explicit literals.
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// Builds the standard markers behind a comment sentinel, e.g. `#` or `--`.
    ///
    /// # Example
    /// ```
    /// use statusgen_blocks::MarkerPair;
    ///
    /// let markers = MarkerPair::with_prefix("#");
    /// assert_eq!(markers.begin(), "# BEGIN GENERATED CODE");
    /// ```
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Self::new(BEGIN_MARKER, END_MARKER);
        }
        Self::new(
            format!("{} {}", prefix, BEGIN_MARKER),
            format!("{} {}", prefix, END_MARKER),
        )
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// True when the line, stripped of surrounding whitespace, is exactly
    /// the begin marker. Trailing content on the line prevents a match.
    pub fn is_begin(&self, line: &str) -> bool {
        line.trim() == self.begin
    }

    /// True when the line, stripped of surrounding whitespace, is exactly
    /// the end marker.
    pub fn is_end(&self, line: &str) -> bool {
        line.trim() == self.end
    }
}

impl Default for MarkerPair {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_COMMENT_PREFIX)
    }
}
