//! Tests for two-phase container construction

use super::{test_batch, test_feature, test_row};
use crate::app::models::BoreholeBatch;
use crate::app::services::geopackage_writer::writer::{GeoPackageWriter, write_geopackage};
use crate::Error;
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn test_phases_build_the_location_lookup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");
    let batch = test_batch();

    let mut writer = GeoPackageWriter::create(&path).unwrap();
    writer.write_boreholes(&batch).unwrap();

    assert_eq!(writer.location(1), Some((117.5210, -28.9031)));
    assert_eq!(writer.location(2), Some((118.0042, -29.1277)));
    assert_eq!(writer.location(99), None);

    writer.write_datasets(&batch).unwrap();
}

#[test]
fn test_writes_valid_geopackage_structure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");

    let stats = write_geopackage(&path, &test_batch()).unwrap();
    assert_eq!(stats.boreholes_written, 2);
    assert_eq!(stats.boreholes_skipped, 0);
    assert_eq!(stats.datasets_written, 3);

    let conn = Connection::open(&path).unwrap();

    let application_id: i32 = conn
        .query_row("PRAGMA application_id", [], |row| row.get(0))
        .unwrap();
    assert_eq!(application_id, 0x4750_4B47);

    let srs_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM gpkg_spatial_ref_sys WHERE srs_id = 4326",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(srs_count, 1);

    let mut stmt = conn
        .prepare("SELECT table_name FROM gpkg_contents WHERE data_type = 'features' ORDER BY table_name")
        .unwrap();
    let layers: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(layers, vec!["boreholes", "datasets"]);

    let geometry_type: String = conn
        .query_row(
            "SELECT geometry_type_name FROM gpkg_geometry_columns WHERE table_name = 'boreholes'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(geometry_type, "POINT");
}

#[test]
fn test_borehole_rows_and_properties() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");

    write_geopackage(&path, &test_batch()).unwrap();
    let conn = Connection::open(&path).unwrap();

    let identifiers: Vec<i64> = conn
        .prepare("SELECT identifier FROM boreholes ORDER BY identifier")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(identifiers, vec![1, 2]);

    let properties: String = conn
        .query_row(
            "SELECT datasetProperties FROM boreholes WHERE identifier = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(properties, "density");

    let (longitude, url): (f64, String) = conn
        .query_row(
            "SELECT long, datasetURL FROM boreholes WHERE identifier = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(longitude, 117.5210);
    assert!(url.ends_with("gc01.zip"));
}

#[test]
fn test_dataset_rows_inherit_borehole_geometry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");

    write_geopackage(&path, &test_batch()).unwrap();
    let conn = Connection::open(&path).unwrap();

    let (borehole_geom, dataset_geom): (Vec<u8>, Vec<u8>) = (
        conn.query_row(
            "SELECT geom FROM boreholes WHERE identifier = 2",
            [],
            |row| row.get(0),
        )
        .unwrap(),
        conn.query_row(
            "SELECT geom FROM datasets WHERE borehole_header_id = 2",
            [],
            |row| row.get(0),
        )
        .unwrap(),
    );

    assert_eq!(borehole_geom, dataset_geom);
    assert_eq!(&borehole_geom[0..2], b"GP");

    let depth: f64 = conn
        .query_row(
            "SELECT depth FROM datasets WHERE borehole_header_id = 2",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(depth, 0.020);
}

#[test]
fn test_invalid_coordinate_drops_feature_but_not_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");

    let mut batch = test_batch();
    // no measurement rows reference the unplaceable bore
    batch.record_file(test_feature(3, "not-a-number", "-28.0"), vec![], vec![]);

    let stats = write_geopackage(&path, &batch).unwrap();
    assert_eq!(stats.boreholes_written, 2);
    assert_eq!(stats.boreholes_skipped, 1);

    let conn = Connection::open(&path).unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM boreholes WHERE identifier = 3",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_orphan_dataset_row_aborts_and_removes_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");

    let mut batch = test_batch();
    batch.measurements.push(test_row(99, "0.5", None));

    let result = write_geopackage(&path, &batch);

    match result {
        Err(Error::LocationNotFound {
            borehole_header_id,
        }) => assert_eq!(borehole_header_id, 99),
        other => panic!("expected LocationNotFound, got {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
fn test_dataset_rows_of_skipped_borehole_abort_the_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");

    let mut batch = BoreholeBatch::default();
    batch.record_file(
        test_feature(1, "bad", "-28.0"),
        vec![test_row(1, "0.025", None)],
        vec![],
    );

    let result = write_geopackage(&path, &batch);
    assert!(matches!(result, Err(Error::LocationNotFound { .. })));
    assert!(!path.exists());
}

#[test]
fn test_existing_output_file_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");
    std::fs::write(&path, "something else").unwrap();

    let result = write_geopackage(&path, &test_batch());

    assert!(matches!(result, Err(Error::Geopackage { .. })));
    // the pre-existing file is left untouched
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "something else");
}

#[test]
fn test_empty_batch_writes_empty_layers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.gpkg");

    let stats = write_geopackage(&path, &BoreholeBatch::default()).unwrap();
    assert_eq!(stats.boreholes_written, 0);
    assert_eq!(stats.datasets_written, 0);

    let conn = Connection::open(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM datasets", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
