//! Depth-first backtracking search over triangular cells.

use super::types::{tri_id, Assignment, PointLegs};

/// Enumerates every assignment compatible with a point-leg spec.
pub struct AssignmentsFinder {
    points: PointLegs,
}

impl AssignmentsFinder {
    pub fn new(points: PointLegs) -> Self {
        Self { points }
    }

    /// All assignments, in the deterministic order induced by visiting
    /// cells row-major and values ascending. Infeasible specs (odd total
    /// leg parity, unsatisfiable per-point constraints) yield an empty
    /// vector.
    pub fn find_all_assignments(&self) -> Vec<Assignment> {
        let mut runner = SearchRunner {
            n: self.points.n_points(),
            remaining: self.points.legs().to_vec(),
            cell: vec![0; self.points.n_pairs()],
            found: Vec::new(),
        };
        runner.recur(0, 1);
        runner.found
    }
}

/// Search state: the working remaining-legs counters, the partially
/// filled flat assignment, and the accumulator of completed leaves.
struct SearchRunner {
    n: usize,
    remaining: Vec<usize>,
    cell: Assignment,
    found: Vec<Assignment>,
}

impl SearchRunner {
    fn recur(&mut self, row: usize, col: usize) {
        if row + 1 >= self.n.max(1) {
            // All cells placed. Rows 0..n-1 are exhausted by the bounds at
            // their final cells; only the last point still needs checking.
            if self.remaining.last().map_or(true, |&r| r == 0) {
                self.found.push(self.cell.clone());
            }
            return;
        }

        let to_from = self.remaining[row];
        let to_to = self.remaining[col];
        // Legs still reachable from `row` later in this row, and from
        // `col` through its not-yet-visited cells (rows between `row` and
        // `col`, plus `col`'s own row; never `col` itself).
        let after_col: usize = self.remaining[col + 1..].iter().sum();
        let after_row: usize =
            self.remaining[row + 1..].iter().sum::<usize>() - self.remaining[col];
        // A line count below either deficit strands legs that no later
        // cell can absorb; one above either remaining count overdraws.
        let min_a = to_from
            .saturating_sub(after_col)
            .max(to_to.saturating_sub(after_row));
        let max_a = to_from.min(to_to);

        let i = tri_id(row, col, self.n);
        let (next_row, next_col) = if col + 1 == self.n {
            (row + 1, row + 2)
        } else {
            (row, col + 1)
        };

        for a in min_a..=max_a {
            self.cell[i] = a;
            self.remaining[row] -= a;
            self.remaining[col] -= a;
            self.recur(next_row, next_col);
            // Restore both counters regardless of outcome.
            self.remaining[row] += a;
            self.remaining[col] += a;
        }
        self.cell[i] = 0;
    }
}
