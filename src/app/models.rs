//! Data models for MSCL processing
//!
//! This module contains the core data structures for representing depth-indexed
//! petrophysical measurements and per-file borehole features, plus the batch
//! accumulator that links the two through the file ordinal.

use crate::constants::aliases;
use std::collections::HashMap;

// =============================================================================
// Canonical Measurement Schema
// =============================================================================

/// Canonical measurement columns of the `datasets` layer.
///
/// Each variant carries its output column name and the source labels it may
/// appear under in an MSCL export. The alias order matters: the first listed
/// label present in a file wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementColumn {
    Depth,
    DepthPoint,
    Diameter,
    PWaveAmplitude,
    PWaveVelocity,
    Density,
    MagneticSusceptibility,
    Impedance,
    NaturalGamma,
    Resistivity,
}

impl MeasurementColumn {
    /// All canonical columns, in output schema order
    pub const ALL: [MeasurementColumn; 10] = [
        MeasurementColumn::Depth,
        MeasurementColumn::DepthPoint,
        MeasurementColumn::Diameter,
        MeasurementColumn::PWaveAmplitude,
        MeasurementColumn::PWaveVelocity,
        MeasurementColumn::Density,
        MeasurementColumn::MagneticSusceptibility,
        MeasurementColumn::Impedance,
        MeasurementColumn::NaturalGamma,
        MeasurementColumn::Resistivity,
    ];

    /// Output column name in the `datasets` layer
    pub fn name(self) -> &'static str {
        match self {
            MeasurementColumn::Depth => "depth",
            MeasurementColumn::DepthPoint => "depth_point",
            MeasurementColumn::Diameter => "diameter",
            MeasurementColumn::PWaveAmplitude => "p_wave_amplitude",
            MeasurementColumn::PWaveVelocity => "p_wave_velocity",
            MeasurementColumn::Density => "density",
            MeasurementColumn::MagneticSusceptibility => "magnetic_susceptibility",
            MeasurementColumn::Impedance => "impedance",
            MeasurementColumn::NaturalGamma => "natural_gamma",
            MeasurementColumn::Resistivity => "resistivity",
        }
    }

    /// Acceptable source labels, in priority order
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            MeasurementColumn::Depth => aliases::DEPTH,
            MeasurementColumn::DepthPoint => aliases::DEPTH_POINT,
            MeasurementColumn::Diameter => aliases::DIAMETER,
            MeasurementColumn::PWaveAmplitude => aliases::P_WAVE_AMPLITUDE,
            MeasurementColumn::PWaveVelocity => aliases::P_WAVE_VELOCITY,
            MeasurementColumn::Density => aliases::DENSITY,
            MeasurementColumn::MagneticSusceptibility => aliases::MAGNETIC_SUSCEPTIBILITY,
            MeasurementColumn::Impedance => aliases::IMPEDANCE,
            MeasurementColumn::NaturalGamma => aliases::NATURAL_GAMMA,
            MeasurementColumn::Resistivity => aliases::RESISTIVITY,
        }
    }

    /// Whether this column counts towards a borehole's `datasetProperties`.
    ///
    /// The depth columns locate a record along the core; they are not datasets
    /// in their own right.
    pub fn tracks_presence(self) -> bool {
        !matches!(
            self,
            MeasurementColumn::Depth | MeasurementColumn::DepthPoint
        )
    }
}

// =============================================================================
// Measurement Rows
// =============================================================================

/// One depth-indexed petrophysical measurement record.
///
/// All measurement fields are optional: an instrument run may leave any sensor
/// column empty for an entire file. Values are carried as the raw source text;
/// SQLite column affinity performs the numeric conversion at container-write
/// time, mirroring how the source CSV cells reach the output unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementRow {
    /// Links to [`BoreholeFeature::identifier`] (1-based file ordinal)
    pub borehole_header_id: u32,
    pub depth: Option<String>,
    pub depth_point: Option<String>,
    pub diameter: Option<String>,
    pub p_wave_amplitude: Option<String>,
    pub p_wave_velocity: Option<String>,
    pub density: Option<String>,
    pub magnetic_susceptibility: Option<String>,
    pub impedance: Option<String>,
    pub natural_gamma: Option<String>,
    pub resistivity: Option<String>,
}

impl MeasurementRow {
    /// Create an empty row linked to a borehole feature
    pub fn new(borehole_header_id: u32) -> Self {
        Self {
            borehole_header_id,
            ..Default::default()
        }
    }

    /// Set a canonical measurement field
    pub fn set(&mut self, column: MeasurementColumn, value: Option<String>) {
        let slot = match column {
            MeasurementColumn::Depth => &mut self.depth,
            MeasurementColumn::DepthPoint => &mut self.depth_point,
            MeasurementColumn::Diameter => &mut self.diameter,
            MeasurementColumn::PWaveAmplitude => &mut self.p_wave_amplitude,
            MeasurementColumn::PWaveVelocity => &mut self.p_wave_velocity,
            MeasurementColumn::Density => &mut self.density,
            MeasurementColumn::MagneticSusceptibility => &mut self.magnetic_susceptibility,
            MeasurementColumn::Impedance => &mut self.impedance,
            MeasurementColumn::NaturalGamma => &mut self.natural_gamma,
            MeasurementColumn::Resistivity => &mut self.resistivity,
        };
        *slot = value;
    }

    /// Get a canonical measurement field
    pub fn get(&self, column: MeasurementColumn) -> Option<&str> {
        let slot = match column {
            MeasurementColumn::Depth => &self.depth,
            MeasurementColumn::DepthPoint => &self.depth_point,
            MeasurementColumn::Diameter => &self.diameter,
            MeasurementColumn::PWaveAmplitude => &self.p_wave_amplitude,
            MeasurementColumn::PWaveVelocity => &self.p_wave_velocity,
            MeasurementColumn::Density => &self.density,
            MeasurementColumn::MagneticSusceptibility => &self.magnetic_susceptibility,
            MeasurementColumn::Impedance => &self.impedance,
            MeasurementColumn::NaturalGamma => &self.natural_gamma,
            MeasurementColumn::Resistivity => &self.resistivity,
        };
        slot.as_deref()
    }
}

// =============================================================================
// Borehole Features
// =============================================================================

/// One borehole feature, extracted from a source file's metadata row.
///
/// Coordinate and dimension fields hold the raw metadata text; the longitude
/// and latitude are validated when the point geometry is encoded, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct BoreholeFeature {
    /// Unique 1-based ordinal of the source file within the batch
    pub identifier: u32,
    /// External borehole identifier, synthesized when the source omits it.
    /// Not guaranteed unique.
    pub borehole_id: String,
    pub name: String,
    pub custodian: String,
    pub description: String,
    pub drill_start_date: String,
    pub drill_end_date: String,
    pub elevation_m: String,
    pub borehole_length_m: String,
    pub longitude: String,
    pub latitude: String,
    pub nvcl_collection: String,
    pub drilling_method: String,
    pub driller: String,
    pub start_point: String,
    pub inclination_type: String,
    pub elevation_srs: String,
    pub operator: String,
    /// Public URL of the archived source file
    pub dataset_url: String,
}

// =============================================================================
// Batch Accumulator
// =============================================================================

/// Accumulated output of one processing run.
///
/// Owned by the pipeline driver and threaded through per-file extraction; the
/// container writer consumes it once, at the end.
#[derive(Debug, Default)]
pub struct BoreholeBatch {
    /// One feature per source file, in ordinal order
    pub features: Vec<BoreholeFeature>,
    /// All measurement rows, concatenated in file order
    pub measurements: Vec<MeasurementRow>,
    /// Populated optional column names per file ordinal
    pub properties: HashMap<u32, Vec<String>>,
}

impl BoreholeBatch {
    /// Record one processed file's outputs
    pub fn record_file(
        &mut self,
        feature: BoreholeFeature,
        rows: Vec<MeasurementRow>,
        populated: Vec<String>,
    ) {
        self.properties.insert(feature.identifier, populated);
        self.features.push(feature);
        self.measurements.extend(rows);
    }

    /// Comma-joined `datasetProperties` value for a file ordinal
    pub fn dataset_properties(&self, identifier: u32) -> String {
        self.properties
            .get(&identifier)
            .map(|names| names.join(crate::constants::DATASET_PROPERTIES_DELIMITER))
            .unwrap_or_default()
    }
}
