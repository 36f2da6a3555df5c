//! Idempotent persistence of structure documents.
//!
//! Each record's document lands at a deterministic path derived from its
//! (category, identifier, source, index) key:
//!
//! ```text
//! <output>/<category>/<identifier>/<source>/structure_<index>.json
//! ```
//!
//! The existence of that path is the record's completion marker: writers
//! skip records whose path already exists, and readers may treat any
//! present file as complete because documents are written to a temporary
//! file in the destination directory and renamed into place.
//!
//! The existence probe is a check-then-act guard, not a claim protocol;
//! concurrent submission of the same record key can race. Within one
//! batch run keys are unique, so no cross-worker locking is needed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::constants::STRUCTURE_FILE_PREFIX;
use crate::results::StructureRecord;
use crate::types::{RibofoldError, SequenceRecord, StoreStatus};

/// Directory that holds every document of one (category, identifier,
/// source) group.
fn record_dir(out_dir: &Path, record: &SequenceRecord) -> PathBuf {
    out_dir
        .join(&record.category)
        .join(&record.identifier)
        .join(&record.source)
}

/// Deterministic output path for one record.
pub fn structure_path(out_dir: &Path, record: &SequenceRecord) -> PathBuf {
    record_dir(out_dir, record).join(format!("{}{}.json", STRUCTURE_FILE_PREFIX, record.index))
}

/// Tests whether a record's document already exists.
pub fn is_already_stored(out_dir: &Path, record: &SequenceRecord) -> bool {
    structure_path(out_dir, record).exists()
}

/// Persists a structure document, unless it is already present.
///
/// Creates parent directories as needed, serializes into a temporary file
/// in the destination directory, and renames it onto the final path so a
/// concurrent reader never observes a partial document.
///
/// # Errors
///
/// Returns [`RibofoldError::IoError`] if directories cannot be created or
/// the document cannot be written, and [`RibofoldError::ParseError`] if
/// serialization itself fails.
pub fn write_structure(
    out_dir: &Path,
    record: &SequenceRecord,
    document: &StructureRecord,
) -> Result<StoreStatus, RibofoldError> {
    let dir = record_dir(out_dir, record);
    let path = structure_path(out_dir, record);
    if path.exists() {
        debug!("{} already present, skipping write", path.display());
        return Ok(StoreStatus::AlreadyPresent);
    }

    fs::create_dir_all(&dir)?;
    let mut tmp = NamedTempFile::new_in(&dir)?;
    serde_json::to_writer(&mut tmp, document)
        .map_err(|e| RibofoldError::ParseError(e.to_string()))?;
    tmp.flush()?;
    tmp.persist(&path).map_err(|e| e.error)?;
    debug!("wrote {}", path.display());

    Ok(StoreStatus::Written)
}
