//! Per-file measurement extraction
//!
//! Copies every canonical measurement column out of a resolved table into
//! [`MeasurementRow`]s linked to the file's batch ordinal, and tracks which
//! optional properties carry data anywhere in the file.

use std::path::Path;

use tracing::debug;

use super::column_mapping::resolve_column;
use super::header::ResolvedTable;
use crate::app::models::{MeasurementColumn, MeasurementRow};
use crate::Result;

/// Measurement rows and populated-property names extracted from one file
#[derive(Debug, Clone)]
pub struct DatasetExtraction {
    /// One row per data record, in source order
    pub rows: Vec<MeasurementRow>,
    /// Canonical names of optional columns with at least one non-empty value,
    /// in canonical schema order
    pub populated: Vec<String>,
}

/// Extract all measurement rows from a resolved table.
///
/// `ordinal` is the 1-based position of the file in the batch; it becomes
/// `borehole_header_id` on every row. A canonical column that resolves to no
/// source column aborts the extraction.
pub fn extract_datasets(
    table: &ResolvedTable,
    ordinal: u32,
    file: &Path,
) -> Result<DatasetExtraction> {
    let mut rows: Vec<MeasurementRow> = table
        .rows()
        .iter()
        .map(|_| MeasurementRow::new(ordinal))
        .collect();
    let mut populated = Vec::new();

    for column in MeasurementColumn::ALL {
        let index = resolve_column(column, table, file)?;

        let mut any_present = false;
        for (row, record) in rows.iter_mut().zip(table.rows()) {
            let value = record
                .get(index)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string);

            any_present |= value.is_some();
            row.set(column, value);
        }

        if any_present && column.tracks_presence() {
            populated.push(column.name().to_string());
        }
    }

    debug!(
        "Extracted {} measurement rows from {} ({} populated properties)",
        rows.len(),
        file.display(),
        populated.len()
    );

    Ok(DatasetExtraction { rows, populated })
}
