//! Contraction census for a 6-point function.
//!
//! Purpose
//! - Provide a reproducible data point for "how many assignments and
//!   contractions does a realistic 6-point spec have, and how long does
//!   the search take?" without firing up the full orchestration.
//!
//! The leg counts `[5,5,2,4,4,2]` are the mixed-order benchmark case:
//! two 5-leg vertices, two 4-leg vertices and two external currents.

use std::time::Instant;

use wicks::prelude::*;

fn main() {
    let points = PointLegs::new(vec![5, 5, 2, 4, 4, 2]).expect("valid spec");

    let search_start = Instant::now();
    let all = AssignmentsFinder::new(points.clone()).find_all_assignments();
    let search_elapsed = search_start.elapsed().as_secs_f64() * 1e3;

    let count_start = Instant::now();
    let mut total: i64 = 0;
    let mut largest: i64 = 0;
    for ass in &all {
        let n = WicksFinder::new(points.clone(), ass.clone()).count_all_wick_contractions();
        largest = largest.max(n);
        total += n;
    }
    let count_elapsed = count_start.elapsed().as_secs_f64() * 1e3;

    println!(
        "spec={:?} legs={} assignments={}",
        points.legs(),
        points.n_legs(),
        all.len()
    );
    println!("total_contractions={total} largest_per_assignment={largest}");
    println!("search_ms={search_elapsed:.3} count_ms={count_elapsed:.3}");
}
