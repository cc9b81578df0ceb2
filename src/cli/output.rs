//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints
//! - Bold: headers, values
//! - Dimmed: labels
//!
//! Diagnostics go to stderr so stdout stays machine-readable.

use console::style;
use std::fmt::Display;

const LABEL_WIDTH: usize = 10;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ configuration missing: DATABASE_URL`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ pass -c stage=<stage>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  region     eu-central-1`
pub fn kv(label: &str, value: impl Display) {
    let label = format!("{:<width$}", label, width = LABEL_WIDTH);
    if colors_enabled() {
        println!("  {} {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {} {}", label, value);
    }
}
