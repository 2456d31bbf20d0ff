//! Data types for the contraction codec.

use crate::comb::{num_combinations, num_dispositions};

/// One line of a contraction: an unordered leg pair, stored from/to with
/// the lower-indexed point's leg first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegPair {
    pub from: usize,
    pub to: usize,
}

/// A complete Wick contraction: `n_legs / 2` pairs, every global leg
/// index used exactly once.
pub type Wick = Vec<LegPair>;

/// A nonzero assignment entry, viewed at its canonical processing time.
#[derive(Clone, Debug)]
pub struct NnAss {
    /// The two endpoints, `points.0 < points.1`.
    pub points: (usize, usize),
    /// Flat triangular index of the entry.
    pub index: usize,
    /// Lines joining the two endpoints.
    pub n_lines: usize,
    /// Legs still free at the `from` endpoint when this entry is reached
    /// in row-major entry order.
    pub free_from: usize,
    /// Legs still free at the `to` endpoint at the same moment.
    pub free_to: usize,
    /// Local choice counts: combinations on the `from` side, dispositions
    /// on the `to` side.
    pub n_poss: (i64, i64),
}

impl NnAss {
    pub fn new(
        points: (usize, usize),
        index: usize,
        n_lines: usize,
        free_from: usize,
        free_to: usize,
    ) -> Self {
        Self {
            points,
            index,
            n_lines,
            free_from,
            free_to,
            n_poss: (
                num_combinations(n_lines, free_from),
                num_dispositions(n_lines, free_to),
            ),
        }
    }
}
