//! Utility functions for time labels, string handling, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - The "last updated" label shown in the page header
//! - String truncation for logging
//! - File system validation for the output directory

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Europe::Moscow;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Abbreviated month names as the ru-RU locale writes them after a day number.
const RU_MONTHS_SHORT: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

/// Format an instant as the header's "last updated" label.
///
/// The label uses Moscow time and the ru-RU short style: numeric day,
/// abbreviated month, then 24-hour `HH:MM`.
///
/// # Examples
///
/// ```ignore
/// // 2026-02-21 11:05 UTC is 14:05 in Moscow
/// assert_eq!(updated_label(utc), "21 февр., 14:05");
/// ```
pub fn updated_label(now: DateTime<Utc>) -> String {
    let local = now.with_timezone(&Moscow);
    format!(
        "{} {}, {:02}:{:02}",
        local.day(),
        RU_MONTHS_SHORT[local.month0() as usize],
        local.hour(),
        local.minute()
    )
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last character boundary at or before `max`
/// bytes, with an ellipsis and the dropped byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then writes and removes a
/// probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    if let Err(e) = stdfs::remove_file(&probe_path) {
        warn!(path = %probe_path, error = %e, "Failed to remove write probe file");
    }
    info!("Output directory is writable");
    Ok(())
}
