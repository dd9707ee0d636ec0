//! Application constants for the MSCL geopackager
//!
//! This module contains the canonical measurement schema, the column alias
//! table for the two known MSCL export variants, fixed borehole feature
//! values, and the GeoPackage/spatial-reference constants.

// =============================================================================
// Source File Layout
// =============================================================================

/// Candidate raw-row offsets (0-indexed) for the data header row.
///
/// MSCL exports place the column header in the 4th raw row; some instrument
/// versions push it down one row. Offsets are probed in order.
pub const HEADER_ROW_OFFSETS: &[usize] = &[3, 4];

/// Raw-row offset (0-indexed) of the single borehole metadata row
pub const METADATA_ROW_INDEX: usize = 1;

/// Position of the external borehole identifier within the metadata row
pub const BOREHOLE_ID_FIELD_INDEX: usize = 11;

/// Offset added to the metadata row index when the external borehole
/// identifier is absent and one must be synthesized.
///
/// Known weakness carried over from the original workflow: the synthesized
/// value is the same for every file with a missing identifier, so it can
/// collide across files. `identifier` (the batch ordinal) remains the unique
/// key; `borehole_id` never was one.
pub const SYNTHESIZED_ID_OFFSET: u32 = 100_000;

/// Glob pattern for source files within the input directory
pub const SOURCE_FILE_PATTERN: &str = "*.csv";

// =============================================================================
// Column Aliases
// =============================================================================

/// Source column labels accepted for each canonical measurement.
///
/// Different MSCL export formats label the same quantity differently; the
/// first listed alias present in a file wins.
pub mod aliases {
    pub const DEPTH: &[&str] = &["DEPTH"];
    pub const DEPTH_POINT: &[&str] = &["DEPTH"];
    pub const DIAMETER: &[&str] = &["DIAMETER"];
    pub const P_WAVE_AMPLITUDE: &[&str] = &["P-WAVE AMP.", "P-WAVE AMPLITUDE"];
    pub const P_WAVE_VELOCITY: &[&str] = &["P-WAVE VEL.", "P-WAVE VELOCITY"];
    pub const DENSITY: &[&str] = &["DENSITY"];
    pub const MAGNETIC_SUSCEPTIBILITY: &[&str] = &["MAG. SUS", "MAG. SUSC."];
    pub const IMPEDANCE: &[&str] = &["IMPEDANCE"];
    pub const NATURAL_GAMMA: &[&str] = &["N. GAMMA", "NAT. GAMMA"];
    pub const RESISTIVITY: &[&str] = &["RESISTIVITY"];
}

/// Delimiter used to join populated property names into `datasetProperties`
pub const DATASET_PROPERTIES_DELIMITER: &str = ",";

// =============================================================================
// Fixed Borehole Feature Values
// =============================================================================

/// Fixed values for borehole feature fields that have no counterpart in the
/// MSCL metadata row.
pub mod feature_defaults {
    pub const NVCL_COLLECTION: &str = "false";
    pub const DRILLING_METHOD: &str = "unknown";
    pub const DRILLER: &str = "unknown";
    pub const START_POINT: &str = "natural ground surface";
    pub const INCLINATION_TYPE: &str = "vertical";
    pub const ELEVATION_SRS: &str = "http://www.opengis.net/def/crs/EPSG/0/5711";
    pub const OPERATOR: &str = "unknown";
}

// =============================================================================
// Spatial Reference
// =============================================================================

/// EPSG code for the single spatial reference used by both output layers
pub const WGS84_SRS_ID: i32 = 4326;

/// Spatial reference name recorded in `gpkg_spatial_ref_sys`
pub const WGS84_SRS_NAME: &str = "WGS84";

/// Authority that defines the spatial reference
pub const SRS_ORGANIZATION: &str = "EPSG";

/// Well-known text definition of WGS84 (EPSG:4326)
pub const WGS84_WKT: &str = concat!(
    "GEOGCS[\"WGS 84\",",
    "DATUM[\"WGS_1984\",",
    "SPHEROID[\"WGS 84\",6378137,298.257223563,",
    "AUTHORITY[\"EPSG\",\"7030\"]],",
    "AUTHORITY[\"EPSG\",\"6326\"]],",
    "PRIMEM[\"Greenwich\",0,",
    "AUTHORITY[\"EPSG\",\"8901\"]],",
    "UNIT[\"degree\",0.0174532925199433,",
    "AUTHORITY[\"EPSG\",\"9122\"]],",
    "AUTHORITY[\"EPSG\",\"4326\"]]"
);

// =============================================================================
// GeoPackage Container
// =============================================================================

/// SQLite application_id identifying a GeoPackage ("GPKG" in ASCII)
pub const GPKG_APPLICATION_ID: i32 = 0x4750_4B47;

/// SQLite user_version for GeoPackage 1.3
pub const GPKG_USER_VERSION: i32 = 10300;

/// Required file extension for the output container
pub const GEOPACKAGE_EXTENSION: &str = ".gpkg";

/// Name of the borehole feature layer
pub const BOREHOLES_TABLE: &str = "boreholes";

/// Name of the depth-measurement feature layer
pub const DATASETS_TABLE: &str = "datasets";

/// Name of the geometry column in both feature layers
pub const GEOMETRY_COLUMN: &str = "geom";

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default directory scanned for MSCL source files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default S3 bucket settings for dataset publication
pub const DEFAULT_BUCKET_NAME: &str = "bucket";
pub const DEFAULT_BUCKET_REGION: &str = "ap-southeast-2";
pub const DEFAULT_BUCKET_FOLDER: &str = "test";

/// Extension given to archived source bundles
pub const BUNDLE_EXTENSION: &str = "zip";
