use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading or writing FASTA.
#[derive(Debug, Error)]
pub enum FastaError {
    /// The input path does not exist.
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),
    /// Line width of zero cannot wrap a sequence.
    #[error("line width must be at least 1")]
    InvalidLineWidth,
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Read a FASTA file into one linear sequence.
///
/// All non-header lines of every record are concatenated, so multi-record
/// files collapse into a single sequence.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FastaError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => FastaError::NotFound(path.to_path_buf()),
        _ => FastaError::Io(err),
    })?;
    read_fasta_from(BufReader::new(file))
}

/// Read FASTA content from any buffered reader.
pub fn read_fasta_from<R: BufRead>(reader: R) -> Result<Vec<u8>, FastaError> {
    let mut sequence = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        if line.starts_with(b">") {
            continue;
        }
        sequence.extend_from_slice(line.trim_ascii());
    }
    Ok(sequence)
}

/// Write a single-record FASTA with the sequence wrapped at `line_width`.
pub fn write_fasta<W: Write>(
    writer: &mut W,
    header: &str,
    sequence: &[u8],
    line_width: usize,
) -> Result<(), FastaError> {
    if line_width == 0 {
        return Err(FastaError::InvalidLineWidth);
    }

    writeln!(writer, ">{header}")?;
    for chunk in sequence.chunks(line_width) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_skipped_and_lines_joined() {
        let input = b">chr1 test\nACGT\n  GGCC  \n>chr2\nTTAA\n";
        let sequence = read_fasta_from(&input[..]).unwrap();
        assert_eq!(sequence, b"ACGTGGCCTTAA");
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(read_fasta_from(&b""[..]).unwrap().is_empty());
        assert!(read_fasta_from(&b">only header\n"[..]).unwrap().is_empty());
    }

    #[test]
    fn non_utf8_header_and_crlf_lines_are_accepted() {
        let input = b">sample \xff\xfe\r\nACGT\r\nTTAA\r\n";
        assert_eq!(read_fasta_from(&input[..]).unwrap(), b"ACGTTTAA");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_fasta("/definitely/not/here.fasta").unwrap_err();
        assert!(matches!(err, FastaError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "file '/definitely/not/here.fasta' not found"
        );
    }

    #[test]
    fn write_wraps_at_line_width() {
        let mut buffer = Vec::new();
        write_fasta(&mut buffer, "Random DNA Sequence", b"ACGTACGTAC", 4).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">Random DNA Sequence\nACGT\nACGT\nAC\n"
        );
    }

    #[test]
    fn write_then_read_recovers_sequence() {
        let mut buffer = Vec::new();
        write_fasta(&mut buffer, "x", b"GAATTCGAATTC", 5).unwrap();
        assert_eq!(read_fasta_from(&buffer[..]).unwrap(), b"GAATTCGAATTC");
    }

    #[test]
    fn zero_line_width_is_rejected() {
        let mut buffer = Vec::new();
        let err = write_fasta(&mut buffer, "x", b"ACGT", 0).unwrap_err();
        assert!(matches!(err, FastaError::InvalidLineWidth));
        assert!(buffer.is_empty());
    }
}
