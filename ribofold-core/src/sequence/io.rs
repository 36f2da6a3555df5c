use std::fs::File;
use std::path::Path;

use bio::io::fasta;

use crate::types::RibofoldError;

/// One parsed FASTA record: id, optional free-text description, residues
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Reads every record of a multi-record FASTA file using rust-bio.
///
/// Records are returned in file order; residues are raw bytes, not yet
/// normalized to the RNA alphabet.
///
/// # Errors
///
/// Returns [`RibofoldError::IoError`] if the file cannot be opened and
/// [`RibofoldError::ParseError`] if a record is malformed.
pub fn read_fasta_records<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, RibofoldError> {
    let file = File::open(path.as_ref())?;
    let reader = fasta::Reader::new(file);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| RibofoldError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        records.push((id, description, seq));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_basic_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("basic.fasta");
        fs::write(&path, ">seq1\nGGUC\nCAC\n").unwrap();

        let records = read_fasta_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "seq1");
        assert_eq!(records[0].2, b"GGUCCAC");
    }

    #[test]
    fn empty_file_yields_no_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.fasta");
        fs::write(&path, "").unwrap();

        let records = read_fasta_records(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn preserves_in_file_record_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("multi.fasta");
        fs::write(&path, ">seq1\nGGUC\n>seq2\nACGU\n>seq3\nUUAA\n").unwrap();

        let records = read_fasta_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].0, "seq1");
        assert_eq!(records[1].0, "seq2");
        assert_eq!(records[2].0, "seq3");
    }

    #[test]
    fn captures_free_text_description() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desc.fasta");
        fs::write(&path, ">seq1 ribosomal RNA fragment\nGGUC\n>seq2\nACGU\n").unwrap();

        let records = read_fasta_records(&path).unwrap();
        assert_eq!(
            records[0].1,
            Some("ribosomal RNA fragment".to_string())
        );
        assert_eq!(records[1].1, None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_fasta_records("does/not/exist.fasta");
        assert!(matches!(result, Err(RibofoldError::IoError(_))));
    }
}
