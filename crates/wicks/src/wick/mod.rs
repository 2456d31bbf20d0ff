//! Wick contractions: bijective rank access into the pairing space.
//!
//! Purpose
//! - Given a point-leg spec and one assignment, address every concrete
//!   leg-to-leg pairing consistent with that assignment by a single
//!   integer rank: count them in closed form, decode any rank into a
//!   pairing, and sweep them all exactly once.
//!
//! Why rank access
//! - The pairing space of a realistic assignment is far too large to
//!   materialize. Every contraction is therefore regenerated on demand
//!   from its rank; the only per-contraction state anyone needs to keep
//!   is that one integer. Decodes are independent, so callers may shard
//!   the rank space freely.
//!
//! The central invariant
//! - Each nonzero entry records how many legs are still free at its two
//!   endpoints *at the moment it is processed* in canonical row-major
//!   entry order. The decoder consumes legs in that same order with a
//!   first-fit skip over already-used legs. The two sides of this
//!   bookkeeping must stay in lock-step; any divergence corrupts the
//!   pairing. `decode` re-derives everything from a fresh `used` buffer
//!   per call, so concurrent decodes never share mutable state.

mod finder;
mod types;

pub use finder::{total_wick_count, WicksFinder};
pub use types::{LegPair, NnAss, Wick};

#[cfg(test)]
mod tests;
