//! Sequence-level building blocks for cut-site analysis.
//!
//! This module exposes the pieces the analysis pipeline is assembled from
//! (FASTA I/O, motif scanning, pair finding, reporting) along with literal
//! nucleotide operations and synthetic sequence generation.

mod cut_sites;
mod dna;
mod fasta;
mod motif;
mod summary;
mod synthetic;

pub use cut_sites::{
    find_distant_pairs, find_distant_pairs_exhaustive, is_ascending, par_find_distant_pairs,
    CutSiteError, CutSitePair, DistanceWindow, DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE,
};
pub use dna::{complement, complement_base, reverse, reverse_complement, DnaError, DnaReport};
pub use fasta::{read_fasta, read_fasta_from, write_fasta, FastaError};
pub use motif::{find_motif_positions, Motif, MotifError, CUT_MARKER};
pub use summary::{render_summary, write_summary, CutSiteSummary, PREVIEW_PAIRS};
pub use synthetic::{
    create_rng, random_sequence, sequence_fingerprint, ALPHABET, DEFAULT_HEADER,
    DEFAULT_LENGTH, DEFAULT_LINE_WIDTH,
};
