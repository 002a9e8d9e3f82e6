//! Icon-prefixed status lines for human mode.
//!
//! `info` and `success` go to stdout; `warning` and `error` go to stderr so
//! that a `--json` run keeps exactly one object on stdout.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (BLUE, "ℹ️"),
            Level::Success => (GREEN, "✅"),
            Level::Warning => (YELLOW, "⚠️"),
            Level::Error => (RED, "❌"),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn print_line<T: fmt::Display>(level: Level, msg: T) {
    let (color, icon) = level.style();
    let line = format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    if level.to_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    print_line(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    print_line(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    print_line(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    print_line(Level::Error, msg);
}

/// Bold section title followed by a blank line.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}{}{}\n", BLUE, BOLD, msg, RESET);
}
