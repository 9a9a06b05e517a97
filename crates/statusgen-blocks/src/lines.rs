//! Conversion between file text and line sequences.

/// Splits text into lines, keeping each line's `\n` terminator.
///
/// The final line has no terminator when the text does not end with one.
/// `join_lines(&split_lines(s)) == s` holds for every input.
///
/// # Example
/// ```
/// use statusgen_blocks::lines::split_lines;
///
/// let lines = split_lines("a\nb\r\nc");
/// assert_eq!(lines, vec!["a\n", "b\r\n", "c"]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Concatenates a line sequence back into file text.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(AsRef::as_ref).collect()
}
