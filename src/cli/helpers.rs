//! Shared helper functions for CLI commands

use std::io::{self, IsTerminal};

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Check if stdin has piped input available
///
/// Returns `true` if stdin is not a terminal (i.e., data is being piped in).
pub fn stdin_has_data() -> bool {
    !io::stdin().is_terminal()
}

/// Plural suffix for counts in status lines
pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
