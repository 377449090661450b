//! Distant cut-site pair finding.
//!
//! Given the ascending start offsets of a motif and an inclusive
//! [`DistanceWindow`], enumerate every pair of offsets whose separation lies
//! inside the window. Pairs are emitted in `(i, j)` index order: outer index
//! ascending, then inner index ascending.

use std::fmt;

use rayon::prelude::*;
use thiserror::Error;

/// Lower bound of the default window (80 kbp).
pub const DEFAULT_MIN_DISTANCE: usize = 80_000;
/// Upper bound of the default window (120 kbp).
pub const DEFAULT_MAX_DISTANCE: usize = 120_000;

/// Outer indices handed to each rayon task at minimum.
const PAR_MIN_OUTER: usize = 256;

/// Errors raised while configuring the pair finder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CutSiteError {
    /// Upper bound below lower bound.
    #[error("invalid distance window: max {max} is below min {min}")]
    InvalidWindow {
        /// Requested lower bound.
        min: usize,
        /// Requested upper bound.
        max: usize,
    },
}

/// Inclusive range of accepted separations between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct DistanceWindow {
    min: usize,
    max: usize,
}

impl DistanceWindow {
    /// Create a window, rejecting `max < min`.
    pub fn new(min: usize, max: usize) -> Result<Self, CutSiteError> {
        if max < min {
            return Err(CutSiteError::InvalidWindow { min, max });
        }
        Ok(Self { min, max })
    }

    /// Window accepting exactly one separation.
    pub fn exact(distance: usize) -> Self {
        Self {
            min: distance,
            max: distance,
        }
    }

    /// Smallest accepted separation.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted separation.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether `distance` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, distance: usize) -> bool {
        self.min <= distance && distance <= self.max
    }
}

impl Default for DistanceWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_DISTANCE,
            max: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl fmt::Display for DistanceWindow {
    /// Whole-kilobase windows print as `80-120 kbp`, anything else in bp.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min % 1000 == 0 && self.max % 1000 == 0 {
            write!(f, "{}-{} kbp", self.min / 1000, self.max / 1000)
        } else {
            write!(f, "{}-{} bp", self.min, self.max)
        }
    }
}

/// Two motif occurrences separated by an accepted distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CutSitePair {
    /// Position taken from the earlier index.
    pub first: usize,
    /// Position taken from the later index.
    pub second: usize,
}

impl CutSitePair {
    /// Construct a pair.
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Separation between the two positions.
    pub fn distance(&self) -> usize {
        self.second.saturating_sub(self.first)
    }
}

impl From<(usize, usize)> for CutSitePair {
    fn from((first, second): (usize, usize)) -> Self {
        Self { first, second }
    }
}

/// Returns `true` when `positions` is non-decreasing.
pub fn is_ascending(positions: &[usize]) -> bool {
    positions.windows(2).all(|w| w[0] <= w[1])
}

/// Find every in-window pair using the sortedness of `positions`.
///
/// For a fixed outer index the qualifying partners form a contiguous run,
/// located by binary search and cut off at the first position beyond the
/// window. Unsorted input never panics but may miss pairs; a warning is
/// logged when the precondition does not hold.
pub fn find_distant_pairs(positions: &[usize], window: &DistanceWindow) -> Vec<CutSitePair> {
    warn_if_unsorted(positions);
    (0..positions.len())
        .flat_map(|i| pairs_from(positions, i, window))
        .collect()
}

/// Reference quadratic scan over every index pair `i < j`.
pub fn find_distant_pairs_exhaustive(
    positions: &[usize],
    window: &DistanceWindow,
) -> Vec<CutSitePair> {
    let mut pairs = Vec::new();
    for (i, &first) in positions.iter().enumerate() {
        for &second in &positions[i + 1..] {
            let in_window = second
                .checked_sub(first)
                .is_some_and(|distance| window.contains(distance));
            if in_window {
                pairs.push(CutSitePair { first, second });
            }
        }
    }
    pairs
}

/// Parallel variant of [`find_distant_pairs`].
///
/// Outer indices are sharded across the rayon pool. Collecting into a `Vec`
/// keeps rayon's sequential order, so shards are concatenated in increasing
/// outer index and the output matches the sequential routine exactly.
pub fn par_find_distant_pairs(positions: &[usize], window: &DistanceWindow) -> Vec<CutSitePair> {
    warn_if_unsorted(positions);
    (0..positions.len())
        .into_par_iter()
        .with_min_len(PAR_MIN_OUTER)
        .flat_map_iter(|i| pairs_from(positions, i, window))
        .collect()
}

fn pairs_from<'a>(
    positions: &'a [usize],
    i: usize,
    window: &DistanceWindow,
) -> impl Iterator<Item = CutSitePair> + 'a {
    let first = positions[i];
    let tail = &positions[i + 1..];
    let (candidates, lower) = match first.checked_add(window.min) {
        Some(lower) => (&tail[tail.partition_point(|&p| p < lower)..], lower),
        None => (&tail[tail.len()..], usize::MAX),
    };
    let upper = first.saturating_add(window.max);
    // The lower-bound filter only rejects anything when input is unsorted.
    candidates
        .iter()
        .take_while(move |&&second| second <= upper)
        .filter(move |&&second| second >= lower)
        .map(move |&second| CutSitePair { first, second })
}

fn warn_if_unsorted(positions: &[usize]) {
    if !is_ascending(positions) {
        tracing::warn!(
            count = positions.len(),
            "cut-site positions are not ascending; pairs may be incomplete"
        );
    }
}
