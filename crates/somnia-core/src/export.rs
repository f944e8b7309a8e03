//! CSV export encoding for the dream journal.

use crate::model::DreamRecord;
use chrono::{DateTime, Local, Utc};

/// Base name of exported CSV files.
const EXPORT_FILE_PREFIX: &str = "dream-journal-export";

/// Header row of the export format.
const CSV_HEADER: &str = "Date,Description,Emotions,Rating";

/// Encode the full record set as CSV text.
///
/// One row per record in current order, after a fixed header. The
/// description is the only quoted cell, with internal quotes doubled;
/// emotions join with ", " and stay unquoted. The date cell uses a
/// comma-free long form so unquoted cells cannot split a row. An empty
/// journal encodes to an empty string and callers must not produce a
/// file for it.
pub fn encode_csv(records: &[DreamRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let mut lines = vec![CSV_HEADER.to_string()];
    for record in records {
        let date = date_cell(record.timestamp);
        let description = record.description.replace('"', "\"\"");
        let emotions = record
            .emotions
            .iter()
            .map(|emotion| emotion.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{date},\"{description}\",{emotions},{}",
            record.rating
        ));
    }
    lines.join("\n")
}

/// File name for an export produced on the given date (UTC calendar).
pub fn export_file_name(date: DateTime<Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}-{}.csv", date.format("%Y-%m-%d"))
}

/// Render a timestamp for the date cell, local time, without commas.
fn date_cell(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-d %B %Y %-I:%M %p")
        .to_string()
}
