//! Command implementations for the MSCL geopackager CLI

pub mod process;
pub mod shared;

use crate::Result;
use crate::cli::args::Args;

pub use shared::ProcessingStats;

/// Run the conversion described by the parsed arguments
pub async fn run(args: Args) -> Result<ProcessingStats> {
    process::run_process(args).await
}
