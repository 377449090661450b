use std::fmt;

use thiserror::Error;

/// Character marking the cleavage point inside a recognition site.
pub const CUT_MARKER: char = '|';

/// Errors raised while parsing a motif.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotifError {
    /// Nothing remained after removing cut markers.
    #[error("cut site '{0}' contains no bases")]
    Empty(String),
}

/// Literal recognition sequence searched for within a larger sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Motif {
    bases: Vec<u8>,
}

impl Motif {
    /// Parse a cut site such as `G|AATTC`, dropping every cut marker.
    pub fn parse(cut_site: &str) -> Result<Self, MotifError> {
        let bases: Vec<u8> = cut_site
            .chars()
            .filter(|&c| c != CUT_MARKER)
            .collect::<String>()
            .into_bytes();
        if bases.is_empty() {
            return Err(MotifError::Empty(cut_site.to_string()));
        }
        Ok(Self { bases })
    }

    /// Motif bases without cut markers.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    /// Motif length in bases.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Always `false`; parsing rejects empty motifs.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bases))
    }
}

/// Every 0-based start offset of `motif` within `sequence`.
///
/// Overlapping occurrences are reported; offsets come out ascending.
/// Matching is literal and case-sensitive.
pub fn find_motif_positions(sequence: &[u8], motif: &Motif) -> Vec<usize> {
    let needle = motif.as_bytes();
    if needle.len() > sequence.len() {
        return Vec::new();
    }
    sequence
        .windows(needle.len())
        .enumerate()
        .filter_map(|(pos, window)| (window == needle).then_some(pos))
        .collect()
}
