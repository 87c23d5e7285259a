//! Terminal output formatting with colors
//!
//! Diagnostics go to stderr, results to stdout.
//! `colored` honors NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use std::fmt::Display;

use colored::Colorize;

/// `error: <msg>` in red on stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// `Warning: <msg>` in yellow on stderr
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Verdict line with a green checkmark
pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// `<label>: <msg>` with a green label
pub fn action(label: &str, msg: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Section header (cyan bold)
pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Indented detail line
pub fn detail(msg: &(impl Display + ?Sized)) {
    println!("  {}", msg);
}

/// Plain data line
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

/// Pre-formatted multi-line block that brings its own trailing newline
pub fn block(msg: &(impl Display + ?Sized)) {
    print!("{}", msg);
}
