//! GeoPackage writer for the borehole and dataset point layers
//!
//! Produces a single GeoPackage holding the `boreholes` and `datasets` point
//! layers under one WGS84 spatial reference. Rows of the two layers are linked
//! logically, by matching `identifier` to `borehole_header_id`; the writer
//! validates that linkage, the container format does not.
//!
//! ## Architecture
//!
//! - [`geometry`] - GeoPackage binary point encoding and coordinate parsing
//! - [`schema`] - attribute column definitions and SQL generation for both layers
//! - [`writer`] - container setup and two-phase feature insertion

pub mod geometry;
pub mod schema;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use geometry::{GeomHeader, encode_point, parse_coordinate};
pub use writer::{GeoPackageWriter, WriteStats, write_geopackage};
