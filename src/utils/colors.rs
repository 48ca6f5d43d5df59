/// ANSI color helper utilities for terminal output.
use crate::models::notification::NotificationKind;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colour of a notification line in the inbox.
pub fn color_for_notification(kind: NotificationKind, read: bool) -> &'static str {
    if read {
        return GREY;
    }
    match kind {
        NotificationKind::Note => MAGENTA,
        NotificationKind::Booking => GREEN,
        NotificationKind::EmergencyAlert => RED,
    }
}

/// Attendance marker: ✔ attended, ✘ missed, grey dash when unknown.
pub fn colorize_attended(attended: Option<bool>) -> String {
    match attended {
        Some(true) => format!("{GREEN}✔{RESET}"),
        Some(false) => format!("{RED}✘{RESET}"),
        None => format!("{GREY}-{RESET}"),
    }
}

/// Grey out empty cells so real values stand out.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
