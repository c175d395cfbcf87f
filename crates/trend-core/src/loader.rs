// File: crates/trend-core/src/loader.rs
// Summary: Loads the Year/Genre/Count trends CSV into memory with explicit schema checks.

use std::path::Path;

use serde::Deserialize;

use crate::error::{TrendError, TrendResult};

/// One (year, genre) observation from the input CSV.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TrendRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

const REQUIRED_COLUMNS: [&str; 3] = ["Year", "Genre", "Count"];

/// Read the whole trends CSV into memory. The file is bounded and small;
/// no streaming.
///
/// Fails with `NotFound` if the path does not exist, `Schema` if a required
/// column is absent from the header, and `Parse` on malformed content.
pub fn load_trend_csv(path: impl AsRef<Path>) -> TrendResult<Vec<TrendRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TrendError::not_found(path));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    // Fail fast on schema mismatch before touching any data row.
    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(TrendError::schema(required));
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: TrendRow = record?;
        rows.push(row);
    }
    Ok(rows)
}
