//! Shared utility functions.

/// Single-line preview of `s` for log messages.
///
/// Runs of whitespace (including newlines) collapse to one space and the
/// result is cut to at most `max_chars` characters, with `...` appended when
/// anything was dropped.
pub fn log_preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}...", cut)
}
