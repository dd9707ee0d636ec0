//! Source file archiving
//!
//! Each MSCL export is bundled into a single-member zip beside the source
//! file before publication, so the original instrument data stays available
//! for download next to the derived GeoPackage layers.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::constants::BUNDLE_EXTENSION;
use crate::{Error, Result};

/// Compress a source file into a zip bundle next to it.
///
/// The bundle takes the source file's name with a `.zip` extension and holds
/// the file as its single member. Returns the bundle path.
pub fn archive_source_file(csv_path: &Path) -> Result<PathBuf> {
    let bundle_path = csv_path.with_extension(BUNDLE_EXTENSION);
    let member_name = csv_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::archive(
                csv_path.display().to_string(),
                "source path has no file name",
            )
        })?;

    let contents = std::fs::read(csv_path)
        .map_err(|e| Error::io(format!("failed to read {}", csv_path.display()), e))?;

    let file = File::create(&bundle_path)
        .map_err(|e| Error::io(format!("failed to create {}", bundle_path.display()), e))?;

    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(member_name, options)
        .map_err(|e| Error::archive(csv_path.display().to_string(), e.to_string()))?;
    zip.write_all(&contents)
        .map_err(|e| Error::io(format!("failed to write {}", bundle_path.display()), e))?;
    zip.finish()
        .map_err(|e| Error::archive(csv_path.display().to_string(), e.to_string()))?;

    info!("Wrote {}", bundle_path.display());
    Ok(bundle_path)
}
