//! Shared UI utilities for consistent terminal output.
//!
//! Status lines go to stderr; stdout is reserved for generated documents.

use colored::Colorize;

/// Standard symbols used throughout the CLI for consistent visual language.
pub mod symbols {
    pub const ARROW: &str = "→";
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "!";
    pub const BULLET: &str = "•";
}

/// Print a step header with the action arrow.
pub fn print_step(message: &str) {
    eprintln!("{} {}", symbols::ARROW.blue().bold(), message);
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", symbols::SUCCESS.green().bold(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", symbols::WARNING.yellow().bold(), message);
}

/// Print a dimmed, indented bullet line.
pub fn print_item(message: &str) {
    eprintln!("  {} {}", symbols::BULLET.dimmed(), message);
}

/// Print a section header.
pub fn print_section(title: &str) {
    eprintln!();
    eprintln!("{}", title.bold());
    eprintln!("{}", "─".repeat(50).dimmed());
}
