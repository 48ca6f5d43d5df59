//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Duration in minutes as "01h 30m".
pub fn mins2readable(mins: i64) -> String {
    let m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Wrap a note body for terminal display, quoting every line.
pub fn quote_wrapped(text: &str, width: usize) -> String {
    textwrap::wrap(text, width.saturating_sub(2).max(10))
        .iter()
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `s` to at most `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
