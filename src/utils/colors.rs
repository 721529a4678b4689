//! ANSI escapes for plain (non-raw-mode) command output.
//! The full-screen views use crossterm colors instead.

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Wrap `value` in `color`, resetting afterwards.
pub fn paint<T: std::fmt::Display>(color: &str, value: T) -> String {
    format!("{color}{value}{RESET}")
}

/// Green for worked time above the goal, red below it, uncolored when even.
pub fn color_for_balance(seconds: i64) -> &'static str {
    match seconds.signum() {
        1 => GREEN,
        -1 => RED,
        _ => RESET,
    }
}

pub fn colorize_balance(value: &str, seconds: i64) -> String {
    paint(color_for_balance(seconds), value)
}

/// Placeholder text (`--`) for values that are missing.
pub fn missing() -> String {
    paint(GREY, "--")
}
