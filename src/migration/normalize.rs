//! Line ending normalization functions

/// Normalize line endings in a string to LF (\n)
///
/// Text pasted into the browser input could carry CRLF or lone CR; both are
/// stored as LF so the file diffs cleanly across platforms.
pub fn normalize_string_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
