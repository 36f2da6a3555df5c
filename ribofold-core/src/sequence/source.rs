use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::SEQUENCE_FILE_EXTENSIONS;
use crate::sequence::io::read_fasta_records;
use crate::sequence::normalize_sequence;
use crate::types::{RibofoldError, SequenceRecord};

/// Enumerates nucleotide records from a sequence-data tree.
///
/// The tree is laid out as `<root>/<category>/<identifier>/<source>.<ext>`
/// by the collaborator that downloads the data; this walker derives each
/// record's metadata from that fixed structure. Records are yielded one
/// FASTA file at a time, ordered by sorted file path and then by in-file
/// record order, so two walks over an unchanged tree enumerate identical
/// streams.
///
/// # Examples
///
/// ```rust,no_run
/// use ribofold_core::sequence::source::SequenceSource;
///
/// let source = SequenceSource::new("data/sequence_data");
/// for record in source.records()? {
///     let record = record?;
///     println!("{}/{}/{} [{}]", record.category, record.identifier,
///              record.source, record.index);
/// }
/// # Ok::<(), ribofold_core::types::RibofoldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    root: PathBuf,
}

impl SequenceSource {
    /// Creates a source rooted at the given sequence-data directory.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Root directory this source walks.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collects every sequence file under the root, lexicographically
    /// sorted by path.
    ///
    /// Only files with a recognized FASTA extension are kept; anything
    /// else in the tree is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RibofoldError::IoError`] if a directory cannot be read.
    pub fn sequence_files(&self) -> Result<Vec<PathBuf>, RibofoldError> {
        let mut files = Vec::new();
        collect_sequence_files(&self.root, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Starts a fresh walk over the tree.
    ///
    /// The returned iterator is lazy (one file's records are parsed at a
    /// time) and finite; calling `records()` again restarts from the
    /// beginning.
    ///
    /// # Errors
    ///
    /// Returns [`RibofoldError::IoError`] if the tree cannot be
    /// enumerated. Per-file parse failures are reported as `Err` items
    /// by the iterator and do not stop the walk.
    pub fn records(&self) -> Result<RecordIter, RibofoldError> {
        let files = self.sequence_files()?;
        debug!("enumerating {} sequence files under {}", files.len(), self.root.display());
        Ok(RecordIter {
            root: self.root.clone(),
            files: files.into_iter(),
            pending: Vec::new(),
        })
    }
}

fn is_sequence_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SEQUENCE_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn collect_sequence_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), RibofoldError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sequence_files(&path, files)?;
        } else if is_sequence_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Derive (category, identifier, source) from a record file's position in
/// the tree. The source name is the file stem; identifier and category are
/// the two nearest ancestor directories.
fn record_key(root: &Path, file: &Path) -> Result<(String, String, String), RibofoldError> {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.len() < 3 {
        return Err(RibofoldError::ParseError(format!(
            "sequence file {} is not under a <category>/<identifier>/ layout",
            file.display()
        )));
    }
    let file_name = parts.pop().unwrap_or_default();
    let source = Path::new(&file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or(file_name);
    let identifier = parts.pop().unwrap_or_default();
    let category = parts.pop().unwrap_or_default();
    Ok((category, identifier, source))
}

/// Lazy iterator over the records of a sequence-data tree.
///
/// Yields `Ok(SequenceRecord)` per parsed record and a single `Err` per
/// unreadable or misplaced file, then continues with the next file.
pub struct RecordIter {
    root: PathBuf,
    files: std::vec::IntoIter<PathBuf>,
    pending: Vec<SequenceRecord>,
}

impl RecordIter {
    fn load_next_file(&mut self) -> Option<Result<(), RibofoldError>> {
        let file = self.files.next()?;
        let key = match record_key(&self.root, &file) {
            Ok(key) => key,
            Err(e) => return Some(Err(e)),
        };
        let (category, identifier, source) = key;
        let parsed = match read_fasta_records(&file) {
            Ok(parsed) => parsed,
            Err(e) => return Some(Err(e)),
        };
        debug!("{}: {} records", file.display(), parsed.len());
        let mut records: Vec<SequenceRecord> = parsed
            .into_iter()
            .enumerate()
            .map(|(index, (id, desc, seq))| SequenceRecord {
                sequence: normalize_sequence(&seq),
                description: match desc {
                    Some(text) => format!("{} {}", id, text),
                    None => id,
                },
                category: category.clone(),
                identifier: identifier.clone(),
                source: source.clone(),
                index,
            })
            .collect();
        // stored reversed so that pop() walks the file front to back
        records.reverse();
        self.pending = records;
        Some(Ok(()))
    }
}

impl Iterator for RecordIter {
    type Item = Result<SequenceRecord, RibofoldError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop() {
                return Some(Ok(record));
            }
            match self.load_next_file()? {
                Ok(()) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_tree(root: &Path) {
        fs::create_dir_all(root.join("b.2/2XYZ")).unwrap();
        fs::create_dir_all(root.join("a.1/1ABC")).unwrap();
        fs::write(root.join("a.1/1ABC/cds.fna"), ">r0 first\nggtc\n>r1\nACGT\n").unwrap();
        fs::write(root.join("a.1/1ABC/rna.fna"), ">r0\nUUAA\n").unwrap();
        fs::write(root.join("b.2/2XYZ/cds.fna"), ">r0\nGGUCCAC\n").unwrap();
        fs::write(root.join("b.2/2XYZ/readme.txt"), "not a sequence").unwrap();
    }

    #[test]
    fn walk_is_sorted_and_skips_foreign_files() {
        let dir = tempdir().unwrap();
        write_tree(dir.path());

        let source = SequenceSource::new(dir.path());
        let files = source.sequence_files().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| {
                f.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(
            names,
            vec!["a.1/1ABC/cds.fna", "a.1/1ABC/rna.fna", "b.2/2XYZ/cds.fna"]
        );
    }

    #[test]
    fn records_carry_path_metadata_and_normalized_sequences() {
        let dir = tempdir().unwrap();
        write_tree(dir.path());

        let source = SequenceSource::new(dir.path());
        let records: Vec<SequenceRecord> = source
            .records()
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].category, "a.1");
        assert_eq!(records[0].identifier, "1ABC");
        assert_eq!(records[0].source, "cds");
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].sequence, "GGUC");
        assert_eq!(records[0].description, "r0 first");
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].sequence, "ACGU");
        assert_eq!(records[2].source, "rna");
        assert_eq!(records[3].identifier, "2XYZ");
        assert_eq!(records[3].sequence, "GGUCCAC");
    }

    #[test]
    fn walk_is_restartable() {
        let dir = tempdir().unwrap();
        write_tree(dir.path());

        let source = SequenceSource::new(dir.path());
        let first: Vec<_> = source.records().unwrap().map(|r| r.unwrap()).collect();
        let second: Vec<_> = source.records().unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn misplaced_file_reports_error_without_stopping_walk() {
        let dir = tempdir().unwrap();
        write_tree(dir.path());
        fs::write(dir.path().join("stray.fna"), ">r0\nAAAA\n").unwrap();

        let source = SequenceSource::new(dir.path());
        let items: Vec<_> = source.records().unwrap().collect();
        let errors = items.iter().filter(|r| r.is_err()).count();
        let records = items.iter().filter(|r| r.is_ok()).count();
        assert_eq!(errors, 1);
        assert_eq!(records, 4);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let dir = tempdir().unwrap();
        let source = SequenceSource::new(dir.path());
        assert_eq!(source.records().unwrap().count(), 0);
    }
}
