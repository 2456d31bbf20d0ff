//! Combinatorial primitives: exact counts and rank codecs.
//!
//! Purpose
//! - Provide the closed-form counting arithmetic (factorials, binomials)
//!   and the two rank↔choice codecs the contraction engine is built on:
//!   *combinations* (unordered k-subsets of a slot range, ranked as
//!   same-popcount bitmasks) and *dispositions* (ordered injective
//!   k-sequences, ranked in a falling-factorial mixed radix).
//!
//! Why ranks instead of materialized choices
//! - The contraction space of a single assignment routinely exceeds what
//!   can be stored; everything downstream addresses choices by integer
//!   rank and decodes on demand. Both codecs are bijective, not merely
//!   generative, and each has an exact inverse used by the round-trip
//!   tests.
//!
//! Numeric conventions
//! - Counts are `i64`; overflow is an unchecked input bound (callers keep
//!   leg totals small enough that all products fit in 63 bits).
//! - Combination ranks are `u64` bitmasks over at most 63 slots.

mod arith;
mod partitions;
mod ranks;

pub use arith::{binomial, factorial, factorials_ratio};
pub use partitions::partitions_without_ones;
pub use ranks::{
    decrypt_combination, decrypt_disposition, encrypt_combination, encrypt_disposition,
    first_combination, first_disposition, for_all_combinations, last_combination,
    last_disposition, next_combination, next_disposition, num_combinations, num_dispositions,
};

pub(crate) use ranks::nth_free_slot;
