//! GeoPackage container construction
//!
//! Two-phase writer. Phase 1 writes the `boreholes` layer and builds the
//! coordinate lookup keyed by feature identifier; phase 2 writes the
//! `datasets` layer, placing each measurement row at its borehole's point.
//! Both layers share one WGS84 spatial reference and geometry header.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{Connection, params};
use tracing::{debug, info, warn};

use super::geometry::{GeomHeader, encode_point, parse_coordinate};
use super::schema::{BOREHOLE_FIELDS, DATASET_FIELDS, create_table_sql, insert_sql};
use crate::app::models::BoreholeBatch;
use crate::constants::{
    BOREHOLES_TABLE, DATASETS_TABLE, GEOMETRY_COLUMN, GPKG_APPLICATION_ID, GPKG_USER_VERSION,
    SRS_ORGANIZATION, WGS84_SRS_ID, WGS84_SRS_NAME, WGS84_WKT,
};
use crate::{Error, Result};

/// Row counts reported by a completed write
#[derive(Debug, Default, Clone, Copy)]
pub struct WriteStats {
    pub boreholes_written: usize,
    pub boreholes_skipped: usize,
    pub datasets_written: usize,
}

/// Writer over one freshly created GeoPackage
pub struct GeoPackageWriter {
    conn: Connection,
    header: GeomHeader,
    locations: HashMap<u32, (f64, f64)>,
}

impl GeoPackageWriter {
    /// Create a new GeoPackage file with its required metadata tables.
    ///
    /// Fails if the file already exists; an existing container is never
    /// updated or appended to.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(Error::geopackage(format!(
                "output file already exists: {}",
                path.display()
            )));
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "application_id", GPKG_APPLICATION_ID)?;
        conn.pragma_update(None, "user_version", GPKG_USER_VERSION)?;

        conn.execute_batch(
            "CREATE TABLE gpkg_spatial_ref_sys (
                srs_name TEXT NOT NULL,
                srs_id INTEGER PRIMARY KEY,
                organization TEXT NOT NULL,
                organization_coordsys_id INTEGER NOT NULL,
                definition TEXT NOT NULL,
                description TEXT
            );
            INSERT INTO gpkg_spatial_ref_sys VALUES
                ('Undefined Cartesian SRS', -1, 'NONE', -1, 'undefined', NULL),
                ('Undefined geographic SRS', 0, 'NONE', 0, 'undefined', NULL);
            CREATE TABLE gpkg_contents (
                table_name TEXT NOT NULL PRIMARY KEY,
                data_type TEXT NOT NULL,
                identifier TEXT UNIQUE,
                description TEXT DEFAULT '',
                last_change DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now')),
                min_x DOUBLE,
                min_y DOUBLE,
                max_x DOUBLE,
                max_y DOUBLE,
                srs_id INTEGER
            );
            CREATE TABLE gpkg_geometry_columns (
                table_name TEXT NOT NULL,
                column_name TEXT NOT NULL,
                geometry_type_name TEXT NOT NULL,
                srs_id INTEGER NOT NULL,
                z TINYINT NOT NULL,
                m TINYINT NOT NULL,
                PRIMARY KEY (table_name, column_name)
            );",
        )?;

        conn.execute(
            "INSERT INTO gpkg_spatial_ref_sys
                (srs_name, srs_id, organization, organization_coordsys_id, definition)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                WGS84_SRS_NAME,
                WGS84_SRS_ID,
                SRS_ORGANIZATION,
                WGS84_SRS_ID,
                WGS84_WKT
            ],
        )?;

        Ok(Self {
            conn,
            header: GeomHeader::new(WGS84_SRS_ID),
            locations: HashMap::new(),
        })
    }

    /// Phase 1: write the `boreholes` layer.
    ///
    /// Features whose coordinates do not parse as finite numbers are dropped
    /// from the layer with a warning and leave no entry in the coordinate
    /// lookup. Returns (written, skipped) counts.
    pub fn write_boreholes(&mut self, batch: &BoreholeBatch) -> Result<(usize, usize)> {
        self.create_feature_table(BOREHOLES_TABLE, BOREHOLE_FIELDS)?;

        let sql = insert_sql(BOREHOLES_TABLE, BOREHOLE_FIELDS);
        let header = self.header;
        let mut written = 0;
        let mut skipped = 0;

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for feature in &batch.features {
                let (x, y) = match (
                    parse_coordinate(&feature.longitude),
                    parse_coordinate(&feature.latitude),
                ) {
                    (Ok(x), Ok(y)) => (x, y),
                    _ => {
                        warn!(
                            "Skipping borehole {} ('{}'): coordinates ('{}', '{}') are not numeric",
                            feature.identifier, feature.name, feature.longitude, feature.latitude
                        );
                        skipped += 1;
                        continue;
                    }
                };

                self.locations.insert(feature.identifier, (x, y));
                let geom = encode_point(&header, x, y);
                let dataset_properties = batch.dataset_properties(feature.identifier);

                stmt.execute(params![
                    geom,
                    feature.identifier,
                    feature.borehole_id,
                    feature.name,
                    dataset_properties,
                    feature.custodian,
                    feature.description,
                    feature.drill_start_date,
                    feature.drill_end_date,
                    feature.elevation_m,
                    feature.borehole_length_m,
                    feature.longitude,
                    feature.latitude,
                    feature.nvcl_collection,
                    feature.drilling_method,
                    feature.driller,
                    feature.start_point,
                    feature.inclination_type,
                    feature.elevation_srs,
                    feature.operator,
                    feature.dataset_url,
                ])?;
                written += 1;
            }
        }
        tx.commit()?;

        debug!("Wrote {} borehole features ({} skipped)", written, skipped);
        Ok((written, skipped))
    }

    /// Phase 2: write the `datasets` layer.
    ///
    /// Every measurement row must resolve a coordinate through the lookup
    /// built in phase 1. A borehole skipped for a bad coordinate left no
    /// entry there, so its dataset rows fail the whole run with
    /// [`Error::LocationNotFound`]: a dataset row that cannot be placed on
    /// the map invalidates the container.
    pub fn write_datasets(&mut self, batch: &BoreholeBatch) -> Result<usize> {
        self.create_feature_table(DATASETS_TABLE, DATASET_FIELDS)?;

        let sql = insert_sql(DATASETS_TABLE, DATASET_FIELDS);
        let header = self.header;
        let mut written = 0;

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for row in &batch.measurements {
                let &(x, y) = self
                    .locations
                    .get(&row.borehole_header_id)
                    .ok_or_else(|| Error::location_not_found(row.borehole_header_id))?;

                let geom = encode_point(&header, x, y);
                stmt.execute(params![
                    geom,
                    row.borehole_header_id,
                    row.depth,
                    row.depth_point,
                    row.diameter,
                    row.p_wave_amplitude,
                    row.p_wave_velocity,
                    row.density,
                    row.magnetic_susceptibility,
                    row.impedance,
                    row.natural_gamma,
                    row.resistivity,
                ])?;
                written += 1;
            }
        }
        tx.commit()?;

        debug!("Wrote {} dataset rows", written);
        Ok(written)
    }

    /// Resolved coordinate of a written borehole feature
    pub fn location(&self, identifier: u32) -> Option<(f64, f64)> {
        self.locations.get(&identifier).copied()
    }

    fn write_layers(&mut self, batch: &BoreholeBatch) -> Result<WriteStats> {
        let (boreholes_written, boreholes_skipped) = self.write_boreholes(batch)?;
        let datasets_written = self.write_datasets(batch)?;
        Ok(WriteStats {
            boreholes_written,
            boreholes_skipped,
            datasets_written,
        })
    }

    /// Create a feature table and register it in the GeoPackage metadata
    fn create_feature_table(
        &self,
        table: &str,
        fields: &[super::schema::FieldDef],
    ) -> Result<()> {
        self.conn.execute(&create_table_sql(table, fields), [])?;
        self.conn.execute(
            "INSERT INTO gpkg_contents (table_name, data_type, identifier, srs_id)
             VALUES (?1, 'features', ?2, ?3)",
            params![table, table, WGS84_SRS_ID],
        )?;
        self.conn.execute(
            "INSERT INTO gpkg_geometry_columns
                (table_name, column_name, geometry_type_name, srs_id, z, m)
             VALUES (?1, ?2, 'POINT', ?3, 0, 0)",
            params![table, GEOMETRY_COLUMN, WGS84_SRS_ID],
        )?;
        Ok(())
    }
}

/// Write a complete batch into a new GeoPackage at `path`.
///
/// On any failure after the file is created, the partial container is
/// removed; no partial output survives a failed run.
pub fn write_geopackage(path: &Path, batch: &BoreholeBatch) -> Result<WriteStats> {
    info!("Writing {}", path.display());

    let mut writer = GeoPackageWriter::create(path)?;
    match writer.write_layers(batch) {
        Ok(stats) => Ok(stats),
        Err(error) => {
            drop(writer);
            let _ = std::fs::remove_file(path);
            Err(error)
        }
    }
}
