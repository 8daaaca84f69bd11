//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use cube_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}
