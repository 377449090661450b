use thiserror::Error;

/// Errors raised by literal nucleotide operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DnaError {
    /// Encountered a byte outside the A/C/G/T alphabet.
    #[error("unsupported nucleotide '{base}' at position {position}")]
    InvalidBase {
        /// Offending character.
        base: char,
        /// 0-based offset of the character in the input.
        position: usize,
    },
}

/// Complement a single base, normalising to uppercase.
///
/// Returns `None` for anything that is not A, C, G or T (in either case).
#[inline]
pub fn complement_base(base: u8) -> Option<u8> {
    match base {
        b'A' | b'a' => Some(b'T'),
        b'C' | b'c' => Some(b'G'),
        b'G' | b'g' => Some(b'C'),
        b'T' | b't' => Some(b'A'),
        _ => None,
    }
}

/// Complement every base of `sequence`, producing uppercase output.
pub fn complement(sequence: &[u8]) -> Result<Vec<u8>, DnaError> {
    sequence
        .iter()
        .enumerate()
        .map(|(position, &base)| {
            complement_base(base).ok_or(DnaError::InvalidBase {
                base: base as char,
                position,
            })
        })
        .collect()
}

/// Reverse the sequence without altering its bases.
pub fn reverse(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().copied().collect()
}

/// Complement then reverse.
pub fn reverse_complement(sequence: &[u8]) -> Result<Vec<u8>, DnaError> {
    let mut complemented = complement(sequence)?;
    complemented.reverse();
    Ok(complemented)
}

/// The four views of a sequence printed by the `complement` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaReport {
    /// Input exactly as supplied.
    pub original: Vec<u8>,
    /// Uppercase complement.
    pub complement: Vec<u8>,
    /// Input reversed, case preserved.
    pub reversed: Vec<u8>,
    /// Uppercase reverse complement.
    pub reverse_complement: Vec<u8>,
}

impl DnaReport {
    /// Build every view of `sequence`, failing on the first non-ACGT base.
    pub fn from_sequence(sequence: &[u8]) -> Result<Self, DnaError> {
        let complement = complement(sequence)?;
        let reverse_complement = complement.iter().rev().copied().collect();
        Ok(Self {
            original: sequence.to_vec(),
            complement,
            reversed: reverse(sequence),
            reverse_complement,
        })
    }

    /// Render the report as the four labelled lines.
    pub fn render(&self) -> String {
        format!(
            "Original sequence:  {}\nComplement:  {}\nOriginal Reversed:  {}\nComplement Reversed:  {}\n",
            String::from_utf8_lossy(&self.original),
            String::from_utf8_lossy(&self.complement),
            String::from_utf8_lossy(&self.reversed),
            String::from_utf8_lossy(&self.reverse_complement),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"ACGT", b"TGCA" ; "canonical")]
    #[test_case(b"acgt", b"TGCA" ; "lowercase is uppercased")]
    #[test_case(b"", b"" ; "empty")]
    #[test_case(b"GAATTC", b"CTTAAG" ; "eco_ri site")]
    fn complement_maps_bases(input: &[u8], expected: &[u8]) {
        assert_eq!(complement(input).unwrap(), expected);
    }

    #[test]
    fn reverse_preserves_case() {
        assert_eq!(reverse(b"AcgT"), b"TgcA");
    }

    #[test]
    fn reverse_complement_of_palindrome_is_itself() {
        assert_eq!(reverse_complement(b"GAATTC").unwrap(), b"GAATTC");
        assert_eq!(reverse_complement(b"AACG").unwrap(), b"CGTT");
    }

    #[test]
    fn invalid_base_is_reported_with_position() {
        assert_eq!(
            complement(b"ACNT"),
            Err(DnaError::InvalidBase {
                base: 'N',
                position: 2
            })
        );
        assert!(reverse_complement(b"U").is_err());
    }

    #[test]
    fn report_renders_all_views() {
        let report = DnaReport::from_sequence(b"aacg").unwrap();
        assert_eq!(report.reverse_complement, b"CGTT");
        assert_eq!(
            report.render(),
            "Original sequence:  aacg\nComplement:  TTGC\nOriginal Reversed:  gcaa\nComplement Reversed:  CGTT\n"
        );
    }
}
