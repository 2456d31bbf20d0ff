//! Mixed-radix digit codec and exhaustive odometer pass.
//!
//! Purpose
//! - Turn a linear rank into a digit vector over an arbitrary per-digit
//!   base vector and back, and drive one full pass over the Cartesian
//!   product of all digit ranges.
//!
//! Why this split
//! - `digits_of`/`rank_of` are a pure, stateless bijection (this is what
//!   makes contraction ranks independently decodable and the rank space
//!   trivially shardable); `for_all` is a separate sequential driver on
//!   top, never mixing "current position" state into the codec.
//!
//! Conventions
//! - Digit 0 is the most significant, matching the order in which the
//!   contraction decoder consumes its per-entry choices.

/// A positional system over positive per-digit bases.
#[derive(Clone, Debug)]
pub struct MixedRadix {
    bases: Vec<i64>,
}

impl MixedRadix {
    /// Build from a base vector; every base must be positive.
    pub fn new(bases: Vec<i64>) -> Self {
        assert!(
            bases.iter().all(|&b| b > 0),
            "mixed-radix bases must be positive: {bases:?}"
        );
        Self { bases }
    }

    #[inline]
    pub fn bases(&self) -> &[i64] {
        &self.bases
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Total number of digit vectors, `∏ bases[i]`.
    #[inline]
    pub fn cardinality(&self) -> i64 {
        self.bases.iter().product()
    }

    /// Decompose `n` into digits, most significant first.
    pub fn digits_of(&self, mut n: i64) -> Vec<i64> {
        debug_assert!((0..self.cardinality()).contains(&n));
        let mut digits = vec![0i64; self.bases.len()];
        for i in (0..self.bases.len()).rev() {
            digits[i] = n % self.bases[i];
            n /= self.bases[i];
        }
        digits
    }

    /// Inverse of [`digits_of`].
    pub fn rank_of(&self, digits: &[i64]) -> i64 {
        debug_assert_eq!(digits.len(), self.bases.len());
        self.bases
            .iter()
            .zip(digits)
            .fold(0i64, |rank, (&base, &d)| {
                debug_assert!((0..base).contains(&d));
                rank * base + d
            })
    }

    /// Visit every digit vector exactly once, in lexicographic order
    /// (least significant digit fastest). The empty base vector has one
    /// (empty) digit vector.
    pub fn for_all<F>(&self, mut f: F)
    where
        F: FnMut(&[i64]),
    {
        let mut digits = vec![0i64; self.bases.len()];
        loop {
            f(&digits);
            // Odometer increment with carry; a wrap past digit 0 ends the pass.
            let mut i = self.bases.len();
            loop {
                if i == 0 {
                    return;
                }
                i -= 1;
                digits[i] += 1;
                if digits[i] < self.bases[i] {
                    break;
                }
                digits[i] = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_round_trip_mixed_bases() {
        let mr = MixedRadix::new(vec![3, 1, 4, 2]);
        assert_eq!(mr.cardinality(), 24);
        for n in 0..mr.cardinality() {
            let d = mr.digits_of(n);
            assert_eq!(mr.rank_of(&d), n);
        }
        // Most significant digit first: rank 23 = (2,0,3,1).
        assert_eq!(mr.digits_of(23), vec![2, 0, 3, 1]);
    }

    #[test]
    fn for_all_visits_product_in_rank_order() {
        let mr = MixedRadix::new(vec![2, 3]);
        let mut ranks = Vec::new();
        mr.for_all(|d| ranks.push(mr.rank_of(d)));
        assert_eq!(ranks, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn empty_base_vector_has_one_state() {
        let mr = MixedRadix::new(Vec::new());
        assert_eq!(mr.cardinality(), 1);
        let mut visits = 0;
        mr.for_all(|d| {
            assert!(d.is_empty());
            visits += 1;
        });
        assert_eq!(visits, 1);
    }
}
