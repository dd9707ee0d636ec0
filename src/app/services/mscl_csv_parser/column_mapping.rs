//! Column alias resolution against a resolved table
//!
//! Each canonical measurement is known under one or two source labels,
//! depending on the MSCL export version that produced the file. Resolution is
//! order-sensitive: the first listed alias present in the table wins.

use std::path::Path;

use super::header::ResolvedTable;
use crate::app::models::MeasurementColumn;
use crate::{Error, Result};

/// Resolve a canonical measurement column to its index in the source table.
///
/// Fails with [`Error::ColumnMissing`] when none of the column's aliases is
/// present; a file lacking any required column invalidates the whole run.
pub fn resolve_column(
    column: MeasurementColumn,
    table: &ResolvedTable,
    file: &Path,
) -> Result<usize> {
    column
        .aliases()
        .iter()
        .find_map(|alias| table.column_index(alias))
        .ok_or_else(|| Error::column_missing(column.name(), file.display().to_string()))
}
