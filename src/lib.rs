//! MSCL GeoPackager Library
//!
//! A Rust library for converting multi-sensor core logger (MSCL) borehole
//! petrophysics CSV exports into a single GeoPackage file suitable for
//! publication through GeoServer.
//!
//! This library provides tools for:
//! - Resolving the irregular MSCL CSV header layout (header row at offset 3 or 4)
//! - Mapping ambiguous instrument column names onto a canonical measurement schema
//! - Extracting per-file borehole metadata from the fixed metadata row
//! - Archiving each source file and publishing it to an S3 bucket
//! - Writing the linked `boreholes` and `datasets` point layers with
//!   GeoPackage binary point geometries under WGS84

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod archive;
        pub mod bucket;
        pub mod geopackage_writer;
        pub mod mscl_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BoreholeBatch, BoreholeFeature, MeasurementColumn, MeasurementRow};
pub use config::Config;

/// Result type alias for the MSCL geopackager
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for MSCL processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// No row resembling a column header was found at any probed offset
    #[error("no data header found in '{file}'")]
    HeaderNotFound { file: String },

    /// A required canonical column has no matching alias in a source file
    #[error("column '{column}' is missing from '{file}'")]
    ColumnMissing { column: String, file: String },

    /// A coordinate value could not be parsed as a finite number
    #[error("invalid coordinate value '{value}'")]
    InvalidCoordinate { value: String },

    /// A dataset row references a borehole with no resolved location
    #[error("no location found for borehole_header_id = {borehole_header_id}")]
    LocationNotFound { borehole_header_id: u32 },

    /// Archiving a source file into a zip bundle failed
    #[error("failed to archive '{file}': {message}")]
    Archive { file: String, message: String },

    /// Uploading a bundle to the object store failed
    #[error("upload failed: {message}")]
    Upload { message: String },

    /// GeoPackage construction error
    #[error("GeoPackage error: {message}")]
    Geopackage {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a header-not-found error
    pub fn header_not_found(file: impl Into<String>) -> Self {
        Self::HeaderNotFound { file: file.into() }
    }

    /// Create a column-missing error
    pub fn column_missing(column: impl Into<String>, file: impl Into<String>) -> Self {
        Self::ColumnMissing {
            column: column.into(),
            file: file.into(),
        }
    }

    /// Create an invalid-coordinate error
    pub fn invalid_coordinate(value: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            value: value.into(),
        }
    }

    /// Create a location-not-found error
    pub fn location_not_found(borehole_header_id: u32) -> Self {
        Self::LocationNotFound { borehole_header_id }
    }

    /// Create an archive error
    pub fn archive(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Archive {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an upload error
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    /// Create a GeoPackage error without an underlying SQLite cause
    pub fn geopackage(message: impl Into<String>) -> Self {
        Self::Geopackage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::Geopackage {
            message: "SQLite operation failed".to_string(),
            source: Some(error),
        }
    }
}
