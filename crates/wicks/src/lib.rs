//! Exhaustive enumeration of propagator assignments and Wick
//! contractions for n-point functions.
//!
//! Two layers:
//! - [`assignment`] enumerates, by backtracking, every way to distribute
//!   lines between point pairs so each point's legs are consumed exactly;
//! - [`wick`] gives bijective integer-rank access into the (typically
//!   astronomically large) space of concrete leg pairings of one
//!   assignment, built on the rank codecs in [`comb`] and the
//!   mixed-radix counter in [`odometer`].
//!
//! The core is pure and single-threaded; ranks decode independently, so
//! callers parallelize by sharding the rank space (see [`sample`] for the
//! Monte Carlo variant).

pub mod api;
pub mod assignment;
pub mod comb;
pub mod odometer;
pub mod sample;
pub mod wick;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for the common entry points.
pub use assignment::{Assignment, AssignmentsFinder, PointLegs, PointLegsError};
pub use wick::{LegPair, Wick, WicksFinder};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::assignment::{tri_id, Assignment, AssignmentsFinder, PointLegs, PointLegsError};
    pub use crate::odometer::MixedRadix;
    pub use crate::sample::{sample_wicks, RankSampler};
    pub use crate::wick::{total_wick_count, LegPair, NnAss, Wick, WicksFinder};
}
