use anyhow::{anyhow, Result};
use std::io::Write;

use super::{CutSitePair, DistanceWindow, Motif};

/// Number of pairs listed in a rendered summary.
pub const PREVIEW_PAIRS: usize = 5;

/// Outcome of a cut-site analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct CutSiteSummary {
    /// Motif that was scanned for.
    pub motif: Motif,
    /// Number of motif occurrences found.
    pub total_sites: usize,
    /// Window the pairs were selected with.
    pub window: DistanceWindow,
    /// Every qualifying pair in discovery order.
    pub pairs: Vec<CutSitePair>,
}

impl CutSiteSummary {
    /// Number of qualifying pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// The leading pairs shown in the text report.
    pub fn preview(&self) -> &[CutSitePair] {
        &self.pairs[..self.pairs.len().min(PREVIEW_PAIRS)]
    }
}

/// Write the plain-text summary report.
pub fn write_summary<W: Write>(writer: &mut W, summary: &CutSiteSummary) -> Result<()> {
    writeln!(writer, "Analyzing cut site: {}", summary.motif)?;
    writeln!(writer, "Total cut sites found: {}", summary.total_sites)?;
    writeln!(
        writer,
        "Cut site pairs {} apart: {}",
        summary.window,
        summary.pair_count()
    )?;
    writeln!(writer, "First {PREVIEW_PAIRS} pairs:")?;
    for (idx, pair) in summary.preview().iter().enumerate() {
        writeln!(writer, "{}. {} - {}", idx + 1, pair.first, pair.second)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the summary into a string (useful for tests and stdout).
pub fn render_summary(summary: &CutSiteSummary) -> Result<String> {
    let mut buffer = Vec::new();
    write_summary(&mut buffer, summary)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered summary is not valid UTF-8"))
}
