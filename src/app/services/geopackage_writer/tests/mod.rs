//! Unit tests for the GeoPackage writer
//!
//! Organized by component, with shared builders for borehole features and
//! measurement rows.

pub mod writer_tests;

use crate::app::models::{BoreholeBatch, BoreholeFeature, MeasurementRow};

/// Build a borehole feature with the given identifier and raw coordinates
pub fn test_feature(identifier: u32, longitude: &str, latitude: &str) -> BoreholeFeature {
    BoreholeFeature {
        identifier,
        borehole_id: format!("BH{:04}", identifier),
        name: format!("GC-{:02} Test Bore", identifier),
        custodian: "Geological Survey Core Store".to_string(),
        description: "Diamond drill core".to_string(),
        drill_start_date: "2019-03-11".to_string(),
        drill_end_date: "2019-03-15".to_string(),
        elevation_m: "412.5".to_string(),
        borehole_length_m: "150.2".to_string(),
        longitude: longitude.to_string(),
        latitude: latitude.to_string(),
        nvcl_collection: "false".to_string(),
        drilling_method: "unknown".to_string(),
        driller: "unknown".to_string(),
        start_point: "natural ground surface".to_string(),
        inclination_type: "vertical".to_string(),
        elevation_srs: "http://www.opengis.net/def/crs/EPSG/0/5711".to_string(),
        operator: "unknown".to_string(),
        dataset_url: format!("https://bucket.s3.ap-southeast-2.amazonaws.com/test/gc{:02}.zip",
                             identifier),
    }
}

/// Build a measurement row with a depth and a density reading
pub fn test_row(borehole_header_id: u32, depth: &str, density: Option<&str>) -> MeasurementRow {
    MeasurementRow {
        borehole_header_id,
        depth: Some(depth.to_string()),
        depth_point: Some(depth.to_string()),
        density: density.map(str::to_string),
        ..Default::default()
    }
}

/// Batch with two located boreholes and three measurement rows
pub fn test_batch() -> BoreholeBatch {
    let mut batch = BoreholeBatch::default();
    batch.record_file(
        test_feature(1, "117.5210", "-28.9031"),
        vec![
            test_row(1, "0.025", Some("1.921")),
            test_row(1, "0.050", Some("1.934")),
        ],
        vec!["density".to_string()],
    );
    batch.record_file(
        test_feature(2, "118.0042", "-29.1277"),
        vec![test_row(2, "0.020", None)],
        vec![],
    );
    batch
}
