//! Reproducible uniform sampling over a rank space.
//!
//! Exhaustive sweeps are only viable for small specs; realistic
//! contraction spaces are addressed by rank, and a Monte Carlo pass draws
//! ranks uniformly instead. The seed is the replay token: the same seed
//! regenerates the same rank stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::wick::{Wick, WicksFinder};

/// Seeded uniform rank stream over `[0, n_ranks)`.
pub struct RankSampler {
    n_ranks: i64,
    seed: u64,
    rng: StdRng,
}

impl RankSampler {
    /// `n_ranks` must be positive.
    pub fn new(n_ranks: i64, seed: u64) -> Self {
        assert!(n_ranks > 0, "empty rank space");
        Self {
            n_ranks,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The replay token this stream was built from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn n_ranks(&self) -> i64 {
        self.n_ranks
    }

    /// Next uniform rank.
    #[inline]
    pub fn next_rank(&mut self) -> i64 {
        self.rng.gen_range(0..self.n_ranks)
    }
}

/// Decode `n` uniformly sampled contractions of one assignment.
pub fn sample_wicks(finder: &WicksFinder, seed: u64, n: usize) -> Vec<Wick> {
    let mut sampler = RankSampler::new(finder.count_all_wick_contractions(), seed);
    (0..n).map(|_| finder.get(sampler.next_rank())).collect()
}
