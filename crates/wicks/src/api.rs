//! Curated re-export surface.
//!
//! Collaborator layers (rendering, distributed reduction, color-factor
//! evaluation) should only need what is listed here: the point-leg model,
//! the two finders, and the rank-space utilities for sharding and
//! sampling.

// Point-leg model and assignment search
pub use crate::assignment::{
    tri_id, Assignment, AssignmentsFinder, PointLegs, PointLegsError,
};
// Contraction codec
pub use crate::wick::{total_wick_count, LegPair, NnAss, Wick, WicksFinder};
// Rank-space utilities
pub use crate::odometer::MixedRadix;
pub use crate::sample::{sample_wicks, RankSampler};
// Counting primitives occasionally needed by callers
pub use crate::comb::{binomial, factorial, num_combinations, num_dispositions};
