//! GeoPackage binary point geometry encoding
//!
//! Every geometry in a layer starts with the same 8-byte header: the "GP"
//! magic, a version byte, a flags byte, and the spatial reference id. The
//! point itself follows as little-endian WKB. The header is computed once per
//! layer and reused for every row.

use crate::{Error, Result};

const GPKG_MAGIC: [u8; 2] = [0x47, 0x50]; // "GP"
const GPKG_VERSION: u8 = 0;
/// Little-endian byte order, no envelope
const GPKG_FLAGS: u8 = 0x01;

/// WKB byte-order marker for little-endian
const WKB_LITTLE_ENDIAN: u8 = 0x01;
/// WKB geometry type code for a 2D point
const WKB_POINT: u32 = 1;

/// Fixed geometry header prefix shared by every row of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeomHeader {
    bytes: [u8; 8],
}

impl GeomHeader {
    /// Build the header for a spatial reference
    pub fn new(srs_id: i32) -> Self {
        let mut bytes = [0u8; 8];
        bytes[0..2].copy_from_slice(&GPKG_MAGIC);
        bytes[2] = GPKG_VERSION;
        bytes[3] = GPKG_FLAGS;
        bytes[4..8].copy_from_slice(&srs_id.to_le_bytes());
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Parse a raw coordinate string into a finite number.
///
/// Fails with [`Error::InvalidCoordinate`]; the caller decides whether that
/// drops a single feature or aborts the run.
pub fn parse_coordinate(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::invalid_coordinate(raw))
}

/// Encode a 2D point as a GeoPackage geometry blob.
///
/// Output is deterministic: identical (header, x, y) inputs produce
/// byte-identical blobs.
pub fn encode_point(header: &GeomHeader, x: f64, y: f64) -> Vec<u8> {
    let mut blob = Vec::with_capacity(29);
    blob.extend_from_slice(header.as_bytes());
    blob.push(WKB_LITTLE_ENDIAN);
    blob.extend_from_slice(&WKB_POINT.to_le_bytes());
    blob.extend_from_slice(&x.to_le_bytes());
    blob.extend_from_slice(&y.to_le_bytes());
    blob
}
