//! Process command implementation
//!
//! Orchestrates the whole conversion: discover source files, extract
//! measurements and borehole metadata from each, archive and publish the
//! source files, then write the two-layer GeoPackage from the accumulated
//! batch.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use colored::Colorize;
use tracing::{info, warn};

use super::shared::{ProcessingStats, create_progress_bar, discover_source_files, setup_logging};
use crate::Result;
use crate::app::models::BoreholeBatch;
use crate::app::services::archive::archive_source_file;
use crate::app::services::bucket::{BucketStore, S3BucketStore};
use crate::app::services::geopackage_writer::write_geopackage;
use crate::app::services::mscl_csv_parser::{extract_datasets, extract_feature, resolve_table};
use crate::cli::args::Args;
use crate::config::Config;

/// Process command runner.
///
/// Validates arguments, connects to the object store, and hands over to the
/// pipeline. Any error propagates to `main`, which performs the single
/// terminal action.
pub async fn run_process(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args)?;

    info!("Starting MSCL geopackager");
    args.validate()?;

    let config = Config::from_args(&args);
    let store = S3BucketStore::connect(config.bucket.clone()).await?;

    let stats = run_pipeline(&config, &args.output, Arc::new(store), args.show_progress()).await?;

    if !args.quiet {
        println!(
            "{} {} ({} boreholes, {} dataset rows)",
            "Wrote".green().bold(),
            args.output.display(),
            stats.boreholes_written,
            stats.datasets_written
        );
    }

    Ok(stats)
}

/// Run the conversion pipeline against an arbitrary bucket store.
///
/// Files are processed strictly in discovery order; the 1-based position of a
/// file fixes the `identifier` linking its borehole feature to its
/// measurement rows. Each file's bundle is published before its feature is
/// built, because the feature carries the public URL.
pub async fn run_pipeline(
    config: &Config,
    output: &Path,
    store: Arc<dyn BucketStore>,
    show_progress: bool,
) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    let files = discover_source_files(&config.processing.input_path)?;
    if files.is_empty() {
        warn!(
            "No source files found in {}",
            config.processing.input_path.display()
        );
    }
    info!("Processing {} source files", files.len());

    let progress =
        show_progress.then(|| create_progress_bar(files.len() as u64, "Processing MSCL exports"));

    let mut batch = BoreholeBatch::default();
    for (index, file) in files.iter().enumerate() {
        let ordinal = (index + 1) as u32;
        info!("Processing {}", file.display());

        let table = resolve_table(file)?;
        let extraction = extract_datasets(&table, ordinal, file)?;

        let bundle = archive_source_file(file)?;
        let dataset_url = store.publish(&bundle).await?;

        let feature = extract_feature(file, ordinal, &dataset_url)?;
        batch.record_file(feature, extraction.rows, extraction.populated);

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let measurement_rows = batch.measurements.len();
    let write_stats = write_geopackage(output, &batch)?;

    Ok(ProcessingStats {
        files_processed: files.len(),
        measurement_rows,
        boreholes_written: write_stats.boreholes_written,
        boreholes_skipped: write_stats.boreholes_skipped,
        datasets_written: write_stats.datasets_written,
        processing_time: start_time.elapsed(),
    })
}
