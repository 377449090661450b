//! # Restriction cut-site scanning
//!
//! Locates every occurrence of a recognition site in a FASTA sequence and
//! reports pairs of occurrences separated by a distance within a window
//! (80–120 kbp by default).
//!
//! ## Pipeline
//!
//! 1. **Read**: concatenate the non-header lines of a FASTA file
//! 2. **Scan**: collect every (overlapping) motif start offset, ascending
//! 3. **Pair**: enumerate offset pairs whose separation lies in the window
//! 4. **Report**: summarise counts and the first few pairs
//!
//! ## Usage Example
//!
//! ```
//! use cutscan::{AnalysisConfig, CutSiteAnalysis};
//!
//! let config = AnalysisConfig::with_window(5, 10).unwrap();
//! let analysis = CutSiteAnalysis::new(config);
//! let summary = analysis.run(b"GAATTCAAGAATTCAAAAGAATTC", "G|AATTC").unwrap();
//! assert_eq!(summary.total_sites, 3);
//! assert_eq!(summary.pair_count(), 2);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod genomics;

pub use genomics::{CutSitePair, CutSiteSummary, DistanceWindow, Motif};

use std::path::Path;

use genomics::{CutSiteError, FastaError, MotifError};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration parameters for a cut-site analysis
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Accepted separation between paired sites
    pub window: DistanceWindow,

    /// Shard the pair search across the rayon pool
    pub parallel: bool,
}

impl AnalysisConfig {
    /// Sequential configuration with a custom window
    pub fn with_window(min_distance: usize, max_distance: usize) -> Result<Self, AnalysisError> {
        Ok(Self {
            window: DistanceWindow::new(min_distance, max_distance)?,
            parallel: false,
        })
    }
}

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// FASTA input could not be read
    #[error(transparent)]
    Fasta(#[from] FastaError),

    /// Cut site could not be parsed
    #[error(transparent)]
    Motif(#[from] MotifError),

    /// Window bounds are inconsistent
    #[error(transparent)]
    Window(#[from] CutSiteError),
}

/// Cut-site analysis orchestrator
#[derive(Debug)]
pub struct CutSiteAnalysis {
    config: AnalysisConfig,
}

impl CutSiteAnalysis {
    /// Create new analysis
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the scan and pair search over an in-memory sequence
    pub fn run(&self, sequence: &[u8], cut_site: &str) -> Result<CutSiteSummary, AnalysisError> {
        let motif = Motif::parse(cut_site)?;
        info!(motif = %motif, bases = sequence.len(), "scanning for cut sites");

        let positions = genomics::find_motif_positions(sequence, &motif);
        debug!(sites = positions.len(), "motif scan complete");

        let window = self.config.window;
        let pairs = if self.config.parallel {
            genomics::par_find_distant_pairs(&positions, &window)
        } else {
            genomics::find_distant_pairs(&positions, &window)
        };
        info!(
            sites = positions.len(),
            pairs = pairs.len(),
            window = %window,
            "pair search complete"
        );

        Ok(CutSiteSummary {
            motif,
            total_sites: positions.len(),
            window,
            pairs,
        })
    }

    /// Read a FASTA file and run the analysis over its concatenated sequence
    pub fn run_fasta<P: AsRef<Path>>(
        &self,
        path: P,
        cut_site: &str,
    ) -> Result<CutSiteSummary, AnalysisError> {
        let path = path.as_ref();
        let sequence = genomics::read_fasta(path)?;
        debug!(path = %path.display(), bases = sequence.len(), "read FASTA");
        self.run(&sequence, cut_site)
    }
}
