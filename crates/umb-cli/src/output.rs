//! Output formatting utilities for the CLI
//!
//! Colored status lines for the terminal. Write errors are swallowed;
//! a broken pipe should not take the command down with it.

use std::io::Write;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

fn status_line(mut out: impl Write, color: Color, glyph: &str, msg: &str) {
    let _ = crossterm::execute!(
        out,
        SetForegroundColor(color),
        Print(glyph),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print a success message with a green checkmark
pub fn print_success(msg: &str) {
    status_line(std::io::stdout(), Color::Green, "✓ ", msg);
}

/// Print an error message with a red cross to stderr
pub fn print_error(msg: &str) {
    status_line(std::io::stderr(), Color::Red, "✗ ", msg);
}

/// Print a warning message with a yellow marker to stderr
pub fn print_warning(msg: &str) {
    status_line(std::io::stderr(), Color::Yellow, "⚠ ", msg);
}

/// Print an informational message with a cyan marker
pub fn print_info(msg: &str) {
    status_line(std::io::stdout(), Color::Cyan, "ℹ ", msg);
}
