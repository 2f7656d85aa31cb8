//! Reading sequences from files.
//!
//! Files with a FASTA extension whose first non-blank line is a `>` header go
//! through the noodles FASTA reader; everything else is treated as raw text
//! and normalized line by line.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, `.faa`, `.ffn` (FASTA)
//! - any of the above, or a plain text file, with `.gz` or `.bgz`

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::parsing::text::normalize_sequence_text;
use crate::parsing::ParseError;

const FASTA_EXTENSIONS: [&str; 5] = ["fa", "fasta", "fna", "faa", "ffn"];

/// Check if the path has a FASTA extension, looking through `.gz`/`.bgz`
pub fn is_fasta_file(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    let stem = lower
        .strip_suffix(".gz")
        .or_else(|| lower.strip_suffix(".bgz"))
        .unwrap_or(lower.as_str());

    Path::new(stem)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| FASTA_EXTENSIONS.contains(&ext))
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

fn open(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read a sequence from `path`, returning it uppercase with headers and
/// whitespace removed.
///
/// The result may be empty for a plain text file with no sequence lines.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or is not UTF-8, or
/// `ParseError::Noodles` if FASTA parsing fails.
pub fn read_sequence_file(path: &Path) -> Result<String, ParseError> {
    debug!("Reading sequence from {}", path.display());
    let mut text = String::new();
    open(path)?.read_to_string(&mut text)?;

    // Headerless content in a FASTA-named file is read as raw sequence
    let body = text.trim_start();
    if is_fasta_file(path) && body.starts_with('>') {
        read_fasta(body.as_bytes(), path)
    } else {
        Ok(normalize_sequence_text(&text))
    }
}

/// Concatenate every record of a FASTA stream
fn read_fasta<R: BufRead>(reader: R, path: &Path) -> Result<String, ParseError> {
    let mut reader = fasta::io::Reader::new(reader);
    let mut sequence = String::new();
    let mut records = 0usize;

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        records += 1;

        sequence.extend(
            record
                .sequence()
                .as_ref()
                .iter()
                .filter(|b| !b.is_ascii_whitespace())
                .map(|b| char::from(b.to_ascii_uppercase())),
        );
    }

    if records > 1 {
        warn!(
            "{} contains {records} records; concatenating them in file order",
            path.display()
        );
    }

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("gene.fa")));
        assert!(is_fasta_file(Path::new("gene.FASTA")));
        assert!(is_fasta_file(Path::new("protein.faa.gz")));
        assert!(is_fasta_file(Path::new("gene.fna.bgz")));
        assert!(!is_fasta_file(Path::new("gene.txt")));
        assert!(!is_fasta_file(Path::new("gene.txt.gz")));
        assert!(!is_fasta_file(Path::new("gene")));
    }

    #[test]
    fn test_read_fasta_file() {
        let file = temp_file(".fa", b">gene1\natgaaa\nACG\n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "ATGAAAACG");
    }

    #[test]
    fn test_read_multi_record_fasta_concatenates() {
        let file = temp_file(".fasta", b">a\nATG\n>b\nAAA\n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "ATGAAA");
    }

    #[test]
    fn test_read_headerless_fasta_file() {
        let file = temp_file(".fa", b"atgaaa\nACG\n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "ATGAAAACG");

        let file = temp_file(".faa", b"MNT");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "MNT");
    }

    #[test]
    fn test_read_fasta_with_leading_blank_lines() {
        let file = temp_file(".fa", b"\n\n>gene\nATGAAAACG\n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "ATGAAAACG");

        let file = temp_file(".fasta", b"\r\n  \r\n>gene\r\nATGAAA\r\nACG\r\n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "ATGAAAACG");
    }

    #[test]
    fn test_read_plain_text_file() {
        let file = temp_file(".txt", b"atg aaa\nacg\n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "ATGAAAACG");

        let file = temp_file(".txt", b">header in a text file\nMNT\n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "MNT");
    }

    #[test]
    fn test_read_gzipped_fasta() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">gene\nATGAAAACG\n").unwrap();
        let bytes = encoder.finish().unwrap();

        let file = temp_file(".fa.gz", &bytes);
        assert_eq!(read_sequence_file(file.path()).unwrap(), "ATGAAAACG");
    }

    #[test]
    fn test_empty_fasta_reads_as_empty_sequence() {
        let file = temp_file(".fa", b"");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "");

        let file = temp_file(".fa", b"\n  \n");
        assert_eq!(read_sequence_file(file.path()).unwrap(), "");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_sequence_file(Path::new("/nonexistent/gene.fa")),
            Err(ParseError::Io(_))
        ));
    }
}
