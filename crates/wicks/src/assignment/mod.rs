//! Propagator assignments: point-leg model and backtracking search.
//!
//! Purpose
//! - Model an n-point function as a validated sequence of per-point leg
//!   counts, and enumerate every way to distribute whole lines between
//!   point pairs so that each point's legs are consumed exactly.
//!
//! An assignment is the upper triangle of a symmetric integer matrix,
//! flattened row-major by [`tri_id`]; entry `(row, col)` counts the lines
//! joining the two points. The search is a depth-first walk over the
//! triangular cells with per-cell feasibility bounds, so every emitted
//! assignment satisfies the per-point sums by construction and no
//! candidate is visited twice.

mod finder;
mod types;

pub use finder::AssignmentsFinder;
pub use types::{tri_id, Assignment, PointLegs, PointLegsError};
