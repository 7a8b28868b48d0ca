//! Formatting utilities used for CLI and export outputs.

use chrono::{DateTime, Local};
use regex::Regex;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Remove ANSI escape sequences so padded columns line up.
pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Display form used across the CLI: `07/08/2026 08:03`.
pub fn fmt_datetime(ts: &DateTime<Local>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}

/// Clock form with seconds: `08:03:41`.
pub fn fmt_clock(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}

/// Short record id for listings: first 8 chars plus ellipsis.
pub fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        id.to_string()
    } else {
        let head: String = id.chars().take(8).collect();
        format!("{head}...")
    }
}
