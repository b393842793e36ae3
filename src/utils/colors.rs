/// ANSI color helper utilities for terminal output.
use crate::models::priority::Priority;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// high → red, medium → yellow, low → grey
pub fn color_for_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => GREY,
    }
}

/// Done tasks are greyed out, open ones keep the default color.
pub fn colorize_status(completed: bool) -> String {
    if completed {
        format!("{GREY}done{RESET}")
    } else {
        format!("{GREEN}open{RESET}")
    }
}
