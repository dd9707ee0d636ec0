//! Borehole feature extraction from the fixed metadata row
//!
//! The second raw row of every MSCL export describes the borehole itself:
//! name, custodian, description, drill dates, projected and geographic
//! coordinates, dimensions, and an external borehole identifier in the last
//! position. Fields with no counterpart in the row get fixed values.

use std::path::Path;

use csv::StringRecord;

use crate::constants::{
    BOREHOLE_ID_FIELD_INDEX, METADATA_ROW_INDEX, SYNTHESIZED_ID_OFFSET, feature_defaults,
};
use crate::app::models::BoreholeFeature;
use crate::{Error, Result};

/// Build the borehole feature for one source file.
///
/// `ordinal` is the file's 1-based position in the batch and becomes the
/// feature's unique `identifier`. `dataset_url` is the public URL of the
/// archived source file, already published by the upload collaborator.
///
/// Coordinates and dimensions are carried as raw text; numeric validation
/// happens during geometry encoding.
pub fn extract_feature(path: &Path, ordinal: u32, dataset_url: &str) -> Result<BoreholeFeature> {
    let record = read_metadata_row(path)?;
    let field = |index: usize| {
        record
            .get(index)
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    };

    let borehole_id = match field(BOREHOLE_ID_FIELD_INDEX) {
        raw if raw.is_empty() => synthesized_borehole_id(),
        raw => raw,
    };

    Ok(BoreholeFeature {
        identifier: ordinal,
        borehole_id,
        name: field(0),
        custodian: field(1),
        description: field(2),
        drill_start_date: field(3),
        drill_end_date: field(4),
        // positions 5 and 6 hold the projected easting/northing, which the
        // published feature does not carry
        elevation_m: field(7),
        borehole_length_m: field(8),
        longitude: field(9),
        latitude: field(10),
        nvcl_collection: feature_defaults::NVCL_COLLECTION.to_string(),
        drilling_method: feature_defaults::DRILLING_METHOD.to_string(),
        driller: feature_defaults::DRILLER.to_string(),
        start_point: feature_defaults::START_POINT.to_string(),
        inclination_type: feature_defaults::INCLINATION_TYPE.to_string(),
        elevation_srs: feature_defaults::ELEVATION_SRS.to_string(),
        operator: feature_defaults::OPERATOR.to_string(),
        dataset_url: dataset_url.to_string(),
    })
}

/// Identifier assigned when the metadata row leaves position 11 empty.
///
/// Derived from the metadata row index plus a large offset, so it cannot
/// collide with small legitimate identifiers. It CAN collide across files
/// that all omit their identifier; `identifier` remains the unique key.
fn synthesized_borehole_id() -> String {
    (METADATA_ROW_INDEX as u32 + SYNTHESIZED_ID_OFFSET).to_string()
}

fn read_metadata_row(path: &Path) -> Result<StringRecord> {
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

    match reader.records().nth(METADATA_ROW_INDEX) {
        Some(Ok(record)) => Ok(record),
        Some(Err(e)) => Err(Error::csv_parsing(
            path.display().to_string(),
            "malformed metadata row",
            Some(e),
        )),
        None => Err(Error::csv_parsing(
            path.display().to_string(),
            "metadata row missing",
            None,
        )),
    }
}
