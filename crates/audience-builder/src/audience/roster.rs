//! CSV roster import for directory exports.
//!
//! Rows are mapped onto the participant record shape and decoded by the same
//! rules as [`participants_from_source_config`](super::participants_from_source_config).

use super::participants::{decode_participant, AudienceParticipant};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster header contains duplicate column '{0}'")]
    DuplicateColumn(String),
    #[error("roster header has no user id column (expected one of userId, user_id, id)")]
    MissingUserIdColumn,
}

static COLUMN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn column_map() -> &'static HashMap<&'static str, &'static str> {
    COLUMN_MAP.get_or_init(|| {
        const HEADER_TO_FIELD: &[(&str, &str)] = &[
            ("userid", "userId"),
            ("user_id", "userId"),
            ("id", "id"),
            ("supervisorid", "supervisorId"),
            ("supervisor_id", "supervisorId"),
            ("managerid", "managerId"),
            ("manager_id", "managerId"),
            ("department", "department"),
        ];
        HEADER_TO_FIELD.iter().copied().collect()
    })
}

fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Column index to participant field, for the columns that carry one.
fn resolve_columns(
    headers: &csv::StringRecord,
) -> Result<Vec<(usize, &'static str)>, RosterImportError> {
    let mut seen_headers: Vec<String> = Vec::new();
    let mut columns: Vec<(usize, &'static str)> = Vec::new();

    for (index, header) in headers.iter().enumerate() {
        let normalized = normalize_header(header);
        if normalized.is_empty() {
            continue;
        }
        if seen_headers.contains(&normalized) {
            return Err(RosterImportError::DuplicateColumn(normalized));
        }

        if let Some(&field) = column_map().get(normalized.as_str()) {
            if columns.iter().any(|(_, existing)| *existing == field) {
                return Err(RosterImportError::DuplicateColumn(normalized));
            }
            columns.push((index, field));
        }
        seen_headers.push(normalized);
    }

    if !columns
        .iter()
        .any(|(_, field)| matches!(*field, "userId" | "id"))
    {
        return Err(RosterImportError::MissingUserIdColumn);
    }

    Ok(columns)
}

fn row_record(columns: &[(usize, &'static str)], row: &csv::StringRecord) -> Value {
    let mut record = Map::new();
    for (index, field) in columns {
        if let Some(cell) = row.get(*index).filter(|cell| !cell.is_empty()) {
            record.insert((*field).to_string(), Value::String(cell.to_string()));
        }
    }
    Value::Object(record)
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<AudienceParticipant>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AudienceParticipant>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = resolve_columns(&headers)?;
        let mut participants = Vec::new();

        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            if row.iter().all(str::is_empty) {
                continue;
            }

            match decode_participant(&row_record(&columns, &row)) {
                Some(participant) => participants.push(participant),
                // Line numbers count the header as line 1.
                None => debug!(line = index + 2, "skipping roster row without a user id"),
            }
        }

        Ok(participants)
    }
}
