use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;
use tracing::debug;

use crate::core::output::{OutputRecord, OUTPUT_COLUMNS};

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to move report into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Write the report to `path`, replacing it only once every record is written
///
/// The report is staged in a temporary file next to `path` and renamed over it
/// after a successful flush, so a failed run leaves no partial output.
///
/// # Errors
///
/// Returns `WriteError` if the destination directory is not writable or the
/// final rename fails.
pub fn write_report(
    path: &Path,
    records: &[OutputRecord],
    delimiter: u8,
) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staged = staging_file(path, dir)?;
    write_records(staged.as_file(), records, delimiter)?;
    staged.as_file().sync_all()?;
    staged.persist(path)?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Create the temporary file a report is written to before the rename
///
/// A report being replaced keeps its mode. A new report gets the mode a plain
/// file create would give it under the current umask.
fn staging_file(path: &Path, dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let staged = builder.tempfile_in(dir)?;
    if let Ok(existing) = std::fs::metadata(path) {
        if existing.is_file() {
            std::fs::set_permissions(staged.path(), existing.permissions())?;
        }
    }
    Ok(staged)
}

/// Write the header row and one line per record to any writer
///
/// # Errors
///
/// Returns `WriteError` if the underlying writer fails.
pub fn write_records<W: Write>(
    writer: W,
    records: &[OutputRecord],
    delimiter: u8,
) -> Result<(), WriteError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
