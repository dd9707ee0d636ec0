//! Shared helpers for CLI commands
//!
//! Logging setup, source file discovery, progress reporting, and the run
//! statistics returned to `main`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::Args;
use crate::constants::SOURCE_FILE_PATTERN;
use crate::{Error, Result};

/// Statistics for a complete processing run
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub measurement_rows: usize,
    pub boreholes_written: usize,
    pub boreholes_skipped: usize,
    pub datasets_written: usize,
    pub processing_time: Duration,
}

/// Set up tracing output on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mscl_geopackager={}", args.get_log_level())));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Discover the source CSV files of a batch.
///
/// Paths are sorted so repeated runs over the same directory assign the same
/// ordinals. Reordering the input set changes the identifiers in the output;
/// that is accepted behavior, not hidden.
pub fn discover_source_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(Error::configuration(format!(
            "input directory does not exist: {}",
            input_dir.display()
        )));
    }

    let pattern = input_dir.join(SOURCE_FILE_PATTERN);
    let pattern = pattern.to_str().ok_or_else(|| {
        Error::configuration(format!(
            "input path is not valid UTF-8: {}",
            input_dir.display()
        ))
    })?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|e| Error::configuration(format!("invalid source pattern: {}", e)))?
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();

    Ok(files)
}

/// Create a progress bar for the input file batch
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discovery_sorts_and_filters() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.csv"), "x").unwrap();
        std::fs::write(dir.path().join("a.csv"), "x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let files = discover_source_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_discovery_of_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(discover_source_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let result = discover_source_files(&dir.path().join("absent"));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
