//! Command-line argument definitions for the MSCL geopackager
//!
//! Defines the CLI using the clap derive API. The output filename rules are
//! validated before the pipeline runs: the path must contain a directory
//! separator and carry the GeoPackage extension.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::GEOPACKAGE_EXTENSION;
use crate::{Error, Result};

/// CLI arguments for the MSCL geopackager
///
/// Converts a directory of MSCL borehole petrophysics CSV exports into a
/// GeoPackage with linked borehole and dataset point layers, archiving each
/// source file to a public S3 bucket along the way.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mscl-geopackager",
    version,
    about = "Convert MSCL borehole CSV exports into a GeoServer-ready GeoPackage",
    long_about = "Processes a directory of multi-sensor core logger (MSCL) borehole \
                  petrophysics CSV exports into a single GeoPackage holding a 'boreholes' \
                  layer (one point per bore) and a 'datasets' layer (one point per depth \
                  measurement). Each source file is zipped and uploaded to a public S3 \
                  bucket, and its URL embedded in the borehole feature."
)]
pub struct Args {
    /// Output GeoPackage path
    ///
    /// Must contain a directory separator and end in .gpkg, e.g. ./mscl12.gpkg
    #[arg(value_name = "FILENAME", help = "Output GeoPackage path e.g. ./mscl12.gpkg")]
    pub output: PathBuf,

    /// Directory containing the MSCL CSV exports
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Directory containing MSCL CSV exports (defaults to ./data)"
    )]
    pub input_path: Option<PathBuf>,

    /// S3 bucket receiving the archived datasets
    #[arg(long, value_name = "NAME", help = "S3 bucket receiving the archived datasets")]
    pub bucket: Option<String>,

    /// AWS region of the bucket
    #[arg(long, value_name = "REGION", help = "AWS region of the bucket")]
    pub region: Option<String>,

    /// Key prefix within the bucket
    #[arg(long, value_name = "PREFIX", help = "Key prefix (folder) within the bucket")]
    pub folder: Option<String>,

    /// Suppress the progress bar and summary output
    #[arg(short, long, help = "Suppress progress and summary output")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose (debug) logging")]
    pub verbose: bool,
}

impl Args {
    /// Validate the output filename rules
    pub fn validate(&self) -> Result<()> {
        let raw = self.output.to_string_lossy();

        if !raw.contains(std::path::MAIN_SEPARATOR) {
            return Err(Error::configuration(format!(
                "output filename must include a path separator e.g. .{}mscl12{}",
                std::path::MAIN_SEPARATOR,
                GEOPACKAGE_EXTENSION
            )));
        }

        if !raw.ends_with(GEOPACKAGE_EXTENSION) {
            return Err(Error::configuration(format!(
                "output filename must end in '{}'",
                GEOPACKAGE_EXTENSION
            )));
        }

        Ok(())
    }

    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Whether to render the progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
