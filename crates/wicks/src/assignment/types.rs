//! Point-leg spec, flat triangular indexing, and the assignment type.

use std::fmt;

/// One propagator assignment: line counts for every unordered point pair,
/// flattened row-major over the upper triangle (see [`tri_id`]).
pub type Assignment = Vec<usize>;

/// Flat index of `(row, col)`, `row < col`, in the upper triangle of an
/// `n × n` matrix, row-major. Bijective onto `[0, n(n-1)/2)`.
#[inline]
pub fn tri_id(row: usize, col: usize, n: usize) -> usize {
    debug_assert!(row < col && col < n);
    n * row - row * (row + 1) / 2 + col - (row + 1)
}

/// Rejection reasons for an invalid point-leg spec.
#[derive(Debug, PartialEq, Eq)]
pub enum PointLegsError {
    /// Every point must carry at least one leg.
    ZeroLegPoint { point: usize },
}

impl fmt::Display for PointLegsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLegPoint { point } => {
                write!(f, "point {point} has zero legs; leg counts must be positive")
            }
        }
    }
}

impl std::error::Error for PointLegsError {}

/// A validated n-point function: one positive leg count per point.
///
/// Legs are indexed globally `0..n_legs`, contiguous per point in spec
/// order; `first_leg` caches the prefix sums.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointLegs {
    legs: Vec<usize>,
    first_leg: Vec<usize>,
    n_legs: usize,
}

impl PointLegs {
    /// Validate a leg-count sequence. Zero counts are rejected; the empty
    /// spec is allowed and enumerates trivially.
    pub fn new(legs: Vec<usize>) -> Result<Self, PointLegsError> {
        if let Some(point) = legs.iter().position(|&l| l == 0) {
            return Err(PointLegsError::ZeroLegPoint { point });
        }
        let mut first_leg = Vec::with_capacity(legs.len());
        let mut n_legs = 0;
        for &l in &legs {
            first_leg.push(n_legs);
            n_legs += l;
        }
        Ok(Self {
            legs,
            first_leg,
            n_legs,
        })
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        self.legs.len()
    }

    #[inline]
    pub fn n_legs(&self) -> usize {
        self.n_legs
    }

    #[inline]
    pub fn legs(&self) -> &[usize] {
        &self.legs
    }

    #[inline]
    pub fn leg_count(&self, point: usize) -> usize {
        self.legs[point]
    }

    /// Global index of the first leg attached to `point`.
    #[inline]
    pub fn first_leg(&self, point: usize) -> usize {
        self.first_leg[point]
    }

    /// Point owning the global leg index `leg`.
    pub fn point_of_leg(&self, leg: usize) -> usize {
        debug_assert!(leg < self.n_legs);
        match self.first_leg.binary_search(&leg) {
            Ok(point) => point,
            Err(insert) => insert - 1,
        }
    }

    /// Number of triangular cells, `n(n-1)/2`.
    #[inline]
    pub fn n_pairs(&self) -> usize {
        let n = self.legs.len();
        n * (n.saturating_sub(1)) / 2
    }
}
