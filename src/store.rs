//! Reading and writing the club dataset (`clubs.json`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::model::ClubRecord;

/// A record that failed boundary validation, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position in the source array.
    pub index: usize,
    pub raw: Value,
}

/// Records accepted from a dataset file, plus the ones turned away.
///
/// Rejected records are excluded from matching but written back untouched
/// by [`save_loaded`], so a load/save cycle never loses data.
#[derive(Debug, Default)]
pub struct LoadedClubs {
    pub clubs: Vec<ClubRecord>,
    pub rejected: Vec<RejectedRecord>,
}

/// Load a dataset, validating every record at the boundary.
///
/// A record with missing fields or broken invariants is set aside with a
/// warning; only an unreadable or non-array file is an error.
pub fn load_clubs(path: &Path) -> Result<LoadedClubs> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: display.clone(),
        source,
    })?;
    let raw: Vec<Value> = serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: display,
        source,
    })?;

    let mut loaded = LoadedClubs::default();
    for (index, value) in raw.into_iter().enumerate() {
        match parse_record(&value) {
            Ok(record) => loaded.clubs.push(record),
            Err(reason) => {
                let label = value.get("name").and_then(Value::as_str).unwrap_or("<unnamed>");
                warn!("[SKIP] record {} ({}): {}", index, label, reason);
                loaded.rejected.push(RejectedRecord { index, raw: value });
            }
        }
    }

    Ok(loaded)
}

fn parse_record(value: &Value) -> std::result::Result<ClubRecord, String> {
    let record = ClubRecord::deserialize(value).map_err(|e| e.to_string())?;
    record.validate().map_err(|e| e.to_string())?;
    Ok(record)
}

/// Write records as a 2-space indented JSON array, non-ASCII kept as-is.
pub fn save_clubs(path: &Path, clubs: &[ClubRecord]) -> Result<()> {
    write_json(path, clubs)
}

#[derive(Serialize)]
#[serde(untagged)]
enum Entry<'a> {
    Club(&'a ClubRecord),
    Raw(&'a Value),
}

/// Write a loaded dataset back, rejected records at their original positions.
pub fn save_loaded(path: &Path, loaded: &LoadedClubs) -> Result<()> {
    let total = loaded.clubs.len() + loaded.rejected.len();
    let mut clubs = loaded.clubs.iter();
    let mut rejected = loaded.rejected.iter().peekable();
    let mut entries = Vec::with_capacity(total);

    for position in 0..total {
        if let Some(r) = rejected.next_if(|r| r.index == position) {
            entries.push(Entry::Raw(&r.raw));
        } else if let Some(club) = clubs.next() {
            entries.push(Entry::Club(club));
        }
    }
    entries.extend(rejected.map(|r| Entry::Raw(&r.raw)));

    write_json(path, &entries)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let display = path.display().to_string();
    let json = serde_json::to_string_pretty(value).map_err(|source| AppError::Json {
        path: display.clone(),
        source,
    })?;
    std::fs::write(path, json + "\n").map_err(|source| AppError::Write {
        path: display,
        source,
    })
}
