//! User-facing status lines for the plain (non-interactive) commands.
//!
//! Every line is `<icon> <message>` with the icon colored by level. Errors go
//! to stderr, everything else to stdout.

use std::fmt;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Bold ANSI color of the icon.
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[1;34m",
            Level::Success => "\x1b[1;32m",
            Level::Warning => "\x1b[1;33m",
            Level::Error => "\x1b[1;31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

/// The printable status line for `level`.
pub fn status_line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{}{}{} {}", level.color(), level.icon(), RESET, msg)
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = status_line(level, msg);
    if level == Level::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Dimmed follow-up line under a status message (what to run next).
pub fn hint<T: fmt::Display>(msg: T) {
    println!("   {DIM}{msg}{RESET}");
}

/// Section title above a report table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}=== {} ==={}", Level::Info.color(), msg, RESET);
}
