//! The contraction codec itself: tables, counting, decode, sweep.

use crate::assignment::{tri_id, Assignment, AssignmentsFinder, PointLegs};
use crate::comb::{
    decrypt_combination, decrypt_disposition, factorial, for_all_combinations, last_disposition,
    nth_free_slot,
};
use crate::odometer::MixedRadix;

use super::types::{LegPair, NnAss, Wick};

/// Local possibility tables of one nonzero entry: each row is a decoded
/// offset list of length `n_lines`, offsets counted among the legs still
/// free at that endpoint.
struct PossTable {
    from: Vec<Vec<usize>>,
    to: Vec<Vec<usize>>,
}

/// Rank↔contraction codec for one assignment.
///
/// Construction precomputes the per-entry possibility tables once; they
/// are read-only afterwards, so a single finder can serve concurrent
/// decodes.
pub struct WicksFinder {
    points: PointLegs,
    nn_ass: Vec<NnAss>,
    tables: Vec<PossTable>,
    digits: MixedRadix,
    /// `∏ legs[p]!` over all points.
    legs_perm_all_points: i64,
    /// `∏ entry!` over all assignment entries.
    perm_all_ass: i64,
}

impl WicksFinder {
    /// Build the codec. The assignment must satisfy the per-point sum
    /// invariant; assignments produced by [`AssignmentsFinder`] always
    /// do, so this is a debug-checked precondition rather than an error.
    pub fn new(points: PointLegs, ass: Assignment) -> Self {
        debug_assert_eq!(ass.len(), points.n_pairs());
        debug_assert!(assignment_sums_match(&points, &ass));

        let legs_perm_all_points = points.legs().iter().map(|&l| factorial(l)).product();
        let perm_all_ass = ass.iter().map(|&a| factorial(a)).product();

        let nn_ass = non_null_entries(&points, &ass);
        let tables: Vec<PossTable> = nn_ass.iter().map(build_tables).collect();
        let digits = MixedRadix::new(
            tables
                .iter()
                .flat_map(|t| [t.from.len() as i64, t.to.len() as i64])
                .collect(),
        );
        debug_assert!(tables
            .iter()
            .zip(&nn_ass)
            .all(|(t, nn)| (t.from.len() as i64, t.to.len() as i64) == nn.n_poss));

        Self {
            points,
            nn_ass,
            tables,
            digits,
            legs_perm_all_points,
            perm_all_ass,
        }
    }

    /// The nonzero entries in canonical order, with their free-leg counts
    /// and local possibility counts.
    #[inline]
    pub fn nn_ass(&self) -> &[NnAss] {
        &self.nn_ass
    }

    /// Closed-form count of distinct contractions:
    /// `∏ legs[p]! / ∏ entry!`. Equals the odometer cardinality for every
    /// valid assignment.
    pub fn count_all_wick_contractions(&self) -> i64 {
        self.legs_perm_all_points / self.perm_all_ass
    }

    /// Decode one digit vector into a concrete contraction.
    pub fn decode(&self, digits: &[i64]) -> Wick {
        debug_assert_eq!(digits.len(), 2 * self.nn_ass.len());
        let mut used = vec![false; self.points.n_legs()];
        let mut wick = Wick::with_capacity(self.points.n_legs() / 2);
        for (i, nn) in self.nn_ass.iter().enumerate() {
            let from_offsets = &self.tables[i].from[digits[2 * i] as usize];
            let to_offsets = &self.tables[i].to[digits[2 * i + 1] as usize];
            let first_from = self.points.first_leg(nn.points.0);
            let first_to = self.points.first_leg(nn.points.1);
            // Resolve every line of this entry against the legs consumed
            // by *earlier* entries only, then mark; offsets within a side
            // are distinct, so the entry's own legs never collide.
            let start = wick.len();
            for line in 0..nn.n_lines {
                wick.push(LegPair {
                    from: nth_free_slot(&used, first_from, from_offsets[line]),
                    to: nth_free_slot(&used, first_to, to_offsets[line]),
                });
            }
            for pair in &wick[start..] {
                used[pair.from] = true;
                used[pair.to] = true;
            }
        }
        wick
    }

    /// Contraction at `rank`, `0 <= rank < count_all_wick_contractions()`.
    pub fn get(&self, rank: i64) -> Wick {
        self.decode(&self.digits.digits_of(rank))
    }

    /// Visit every contraction exactly once, in lexicographic digit
    /// order (equivalently, ascending rank).
    pub fn for_all<F>(&self, mut f: F)
    where
        F: FnMut(Wick),
    {
        self.digits.for_all(|d| f(self.decode(d)));
    }
}

/// Sum of contraction counts over every assignment of a spec.
pub fn total_wick_count(points: &PointLegs) -> i64 {
    AssignmentsFinder::new(points.clone())
        .find_all_assignments()
        .into_iter()
        .map(|ass| WicksFinder::new(points.clone(), ass).count_all_wick_contractions())
        .sum()
}

fn assignment_sums_match(points: &PointLegs, ass: &Assignment) -> bool {
    let n = points.n_points();
    let mut touched = vec![0usize; n];
    for row in 0..n {
        for col in row + 1..n {
            let a = ass[tri_id(row, col, n)];
            touched[row] += a;
            touched[col] += a;
        }
    }
    touched == points.legs()
}

/// Extract the nonzero entries in row-major order, each annotated with
/// the legs still free at its endpoints at that moment.
///
/// Free legs at the head `row`: its spec count, minus everything drawn by
/// entries `(k, row)` with `k < row`, minus entries `(row, k)` with
/// `row < k < col`. Free legs at the tail `col`: its spec count minus the
/// entries `(k, col)` with `k < row`. Entries `(k, col)` with `k >= row`
/// are processed later and consume nothing yet.
fn non_null_entries(points: &PointLegs, ass: &Assignment) -> Vec<NnAss> {
    let n = points.n_points();
    let mut out = Vec::new();
    for row in 0..n {
        for col in row + 1..n {
            let index = tri_id(row, col, n);
            if ass[index] == 0 {
                continue;
            }
            let mut free_from = points.leg_count(row);
            let mut free_to = points.leg_count(col);
            for k in 0..row {
                free_from -= ass[tri_id(k, row, n)];
                free_to -= ass[tri_id(k, col, n)];
            }
            for k in row + 1..col {
                free_from -= ass[tri_id(row, k, n)];
            }
            out.push(NnAss::new((row, col), index, ass[index], free_from, free_to));
        }
    }
    out
}

/// Decode every local choice rank of one entry into its offset table.
fn build_tables(nn: &NnAss) -> PossTable {
    let mut from = Vec::with_capacity(nn.n_poss.0 as usize);
    for_all_combinations(nn.n_lines, nn.free_from, |mask| {
        from.push(decrypt_combination(nn.n_lines, nn.free_from, mask));
    });
    let mut to = Vec::with_capacity(nn.n_poss.1 as usize);
    for rank in 0..=last_disposition(nn.n_lines, nn.free_to) {
        to.push(decrypt_disposition(nn.n_lines, nn.free_to, rank));
    }
    PossTable { from, to }
}
