//! Human-readable formatting for sizes and listing entries.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with one decimal digit and a unit from B through TB.
///
/// The walk stops at TB, so anything larger keeps the TB unit. Exactly zero
/// renders as `"0 B"` rather than `"0.0 B"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a single listing entry: bare name for directories, name plus a
/// parenthesized human size for files.
pub fn format_entry(name: &str, size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!("{} ({})", name, format_size(bytes)),
        None => name.to_string(),
    }
}
