//! Configuration management
//!
//! Defaults layered under any overrides given on the command line. The
//! configuration is deliberately small: the input directory and the bucket
//! that receives the archived datasets.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::args::Args;
use crate::constants::{
    DEFAULT_BUCKET_FOLDER, DEFAULT_BUCKET_NAME, DEFAULT_BUCKET_REGION, DEFAULT_DATA_DIR,
};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub bucket: BucketConfig,
}

/// Input processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Directory scanned for MSCL CSV exports
    pub input_path: PathBuf,
}

/// Publicly readable S3 bucket receiving the archived datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketConfig {
    pub name: String,
    pub region: String,
    /// Key prefix under which bundles are stored
    pub folder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                input_path: PathBuf::from(DEFAULT_DATA_DIR),
            },
            bucket: BucketConfig::default(),
        }
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUCKET_NAME.to_string(),
            region: DEFAULT_BUCKET_REGION.to_string(),
            folder: DEFAULT_BUCKET_FOLDER.to_string(),
        }
    }
}

impl Config {
    /// Build the effective configuration: defaults overridden by CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut config = Config::default();

        if let Some(input_path) = &args.input_path {
            config.processing.input_path = input_path.clone();
        }
        if let Some(bucket) = &args.bucket {
            config.bucket.name = bucket.clone();
        }
        if let Some(region) = &args.region {
            config.bucket.region = region.clone();
        }
        if let Some(folder) = &args.folder {
            config.bucket.folder = folder.clone();
        }

        config
    }
}

impl BucketConfig {
    /// Object key for a bundle file name
    pub fn object_key(&self, file_name: &str) -> String {
        format!("{}/{}", self.folder, file_name)
    }

    /// Public URL a bundle is reachable at after upload
    pub fn public_url(&self, file_name: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}/{}",
            self.name, self.region, self.folder, file_name
        )
    }
}
