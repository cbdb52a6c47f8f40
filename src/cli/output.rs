//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use chrono::{DateTime, Utc};
use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::crypto::Strength;
use crate::vault::{is_expired, Entry};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

fn status_cell(entry: &Entry, now: DateTime<Utc>) -> String {
    if is_expired(entry, now) {
        style("EXPIRED").red().bold().to_string()
    } else {
        let days = (entry.expires_at - now).num_days();
        style(format!("{days}d left")).green().to_string()
    }
}

fn platforms_cell(entry: &Entry) -> String {
    if entry.platforms.is_empty() {
        "-".to_string()
    } else {
        entry.platforms.to_string()
    }
}

/// Print a table of entries (Label, Platforms, Expires, Status).
pub fn print_entries_table(entries: &[Entry], now: DateTime<Utc>) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Label", "Platforms", "Expires", "Status"]);

    for e in entries {
        table.add_row(vec![
            e.label.clone(),
            platforms_cell(e),
            e.expires_at.format("%Y-%m-%d").to_string(),
            status_cell(e, now),
        ]);
    }

    println!("{table}");
}

/// Print one entry's details. The digest is never shown.
pub fn print_entry(entry: &Entry, now: DateTime<Utc>) {
    println!("{:<10} {}", style("Label").bold(), entry.label);
    println!("{:<10} {}", style("Platforms").bold(), platforms_cell(entry));
    println!(
        "{:<10} {}",
        style("Expires").bold(),
        entry.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("{:<10} {}", style("Status").bold(), status_cell(entry, now));
}

/// Print a strength score with its suggestions.
pub fn print_strength(strength: &Strength) {
    let label = match strength.level {
        0 | 1 => style(strength.label()).red(),
        2 => style(strength.label()).color256(208),
        3 => style(strength.label()).yellow(),
        _ => style(strength.label()).green(),
    };
    println!("{} {}", style("Strength:").bold(), label.bold());
    for hint in &strength.suggestions {
        tip(hint);
    }
}
