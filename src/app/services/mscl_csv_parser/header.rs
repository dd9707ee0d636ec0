//! Header row resolution for MSCL CSV exports
//!
//! MSCL exports carry the data header in the 4th raw row, except for some
//! instrument versions that push it down one row. A candidate row is accepted
//! as the header when its first label is non-empty; an empty leading cell
//! marks the synthetic/unnamed layout that a misplaced probe produces.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::constants::HEADER_ROW_OFFSETS;
use crate::{Error, Result};

/// A source file parsed below its resolved header row
#[derive(Debug, Clone)]
pub struct ResolvedTable {
    /// Raw-row offset the header was found at
    pub header_offset: usize,
    columns: Vec<String>,
    name_to_index: HashMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl ResolvedTable {
    /// Resolved column labels, in source order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of a column by its source label
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.name_to_index.get(label).copied()
    }

    /// Data rows below the header
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }
}

/// Locate the header row of a raw MSCL export and parse the table below it.
///
/// Probes the candidate offsets in order; fails with [`Error::HeaderNotFound`]
/// when no candidate row carries a usable label set.
pub fn resolve_table(path: &Path) -> Result<ResolvedTable> {
    let records = read_raw_records(path)?;

    for &offset in HEADER_ROW_OFFSETS {
        if let Some(candidate) = records.get(offset) {
            if is_header_like(candidate) {
                debug!(
                    "Resolved header at row {} in {}: {} columns",
                    offset,
                    path.display(),
                    candidate.len()
                );
                return Ok(build_table(offset, candidate, &records[offset + 1..]));
            }
        }
    }

    Err(Error::header_not_found(path.display().to_string()))
}

/// Read every raw record of the file, without header interpretation.
///
/// Rows are ragged (the title and metadata rows have their own field counts),
/// so the reader runs in flexible mode.
fn read_raw_records(path: &Path) -> Result<Vec<StringRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to open source file",
                Some(e),
            )
        })?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "malformed record", Some(e))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// A candidate header is usable when its first label is non-empty
fn is_header_like(record: &StringRecord) -> bool {
    record
        .get(0)
        .map(str::trim)
        .is_some_and(|label| !label.is_empty())
}

fn build_table(offset: usize, header: &StringRecord, data: &[StringRecord]) -> ResolvedTable {
    let columns: Vec<String> = header.iter().map(|label| label.trim().to_string()).collect();

    // First occurrence wins for duplicate labels
    let mut name_to_index = HashMap::new();
    for (index, label) in columns.iter().enumerate() {
        name_to_index.entry(label.clone()).or_insert(index);
    }

    ResolvedTable {
        header_offset: offset,
        columns,
        name_to_index,
        rows: data.to_vec(),
    }
}
