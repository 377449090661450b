//! Synthetic DNA generation.
//!
//! Produces uniformly random sequences for exercising the scanner on inputs
//! of controlled size, with optional seeding for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bases drawn from when generating sequences.
pub const ALPHABET: &[u8; 4] = b"ATCG";
/// Default generated sequence length.
pub const DEFAULT_LENGTH: usize = 1_000_000;
/// Default FASTA header for generated sequences.
pub const DEFAULT_HEADER: &str = "Random DNA Sequence";
/// Default wrapping width for generated FASTA.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Create a random number generator, seeded when `seed` is provided.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Draw `length` bases uniformly from [`ALPHABET`].
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

/// Hex-encoded blake3 digest of a sequence.
pub fn sequence_fingerprint(sequence: &[u8]) -> String {
    blake3::hash(sequence).to_hex().to_string()
}
