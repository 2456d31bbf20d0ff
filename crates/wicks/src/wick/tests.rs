use super::*;
use crate::assignment::{tri_id, Assignment, AssignmentsFinder, PointLegs};
use proptest::prelude::*;
use std::collections::HashSet;

fn single_assignment(legs: &[usize]) -> (PointLegs, Assignment) {
    let points = PointLegs::new(legs.to_vec()).unwrap();
    let mut all = AssignmentsFinder::new(points.clone()).find_all_assignments();
    assert_eq!(all.len(), 1, "expected a unique assignment for {legs:?}");
    (points, all.remove(0))
}

/// Every leg appears exactly once and every pair joins the two points the
/// assignment says it joins, with the right multiplicities.
fn assert_valid_wick(points: &PointLegs, ass: &Assignment, wick: &Wick) {
    let n = points.n_points();
    let mut seen = vec![false; points.n_legs()];
    let mut pair_count = vec![0usize; ass.len()];
    for pair in wick {
        for leg in [pair.from, pair.to] {
            assert!(!seen[leg], "leg {leg} paired twice");
            seen[leg] = true;
        }
        let (p, q) = (points.point_of_leg(pair.from), points.point_of_leg(pair.to));
        assert!(p < q, "pair endpoints out of canonical order");
        pair_count[tri_id(p, q, n)] += 1;
    }
    assert!(seen.iter().all(|&s| s), "unpaired legs remain");
    assert_eq!(&pair_count, ass);
}

#[test]
fn two_single_leg_points_have_one_contraction() {
    let (points, ass) = single_assignment(&[1, 1]);
    let finder = WicksFinder::new(points, ass);
    assert_eq!(finder.count_all_wick_contractions(), 1);
    assert_eq!(finder.get(0), vec![LegPair { from: 0, to: 1 }]);
}

#[test]
fn triangle_of_twos_has_eight_contractions() {
    let (points, ass) = single_assignment(&[2, 2, 2]);
    let finder = WicksFinder::new(points.clone(), ass.clone());
    assert_eq!(finder.count_all_wick_contractions(), 8);

    let mut distinct = HashSet::new();
    let mut visits = 0;
    finder.for_all(|wick| {
        assert_valid_wick(&points, &ass, &wick);
        let mut key: Vec<_> = wick.clone();
        key.sort();
        assert!(distinct.insert(key), "duplicate contraction");
        visits += 1;
    });
    assert_eq!(visits, 8);
}

#[test]
fn triangle_free_leg_bookkeeping() {
    let (points, ass) = single_assignment(&[2, 2, 2]);
    let finder = WicksFinder::new(points, ass);
    let nn = finder.nn_ass();
    assert_eq!(nn.len(), 3);
    assert_eq!((nn[0].free_from, nn[0].free_to), (2, 2));
    assert_eq!((nn[1].free_from, nn[1].free_to), (1, 2));
    assert_eq!((nn[2].free_from, nn[2].free_to), (1, 1));
    assert_eq!(nn[0].n_poss, (2, 2));
    assert_eq!(nn[1].n_poss, (1, 2));
    assert_eq!(nn[2].n_poss, (1, 1));
}

#[test]
fn count_identity_closed_form_vs_table_product() {
    for legs in [vec![2usize, 2, 2], vec![2, 4, 2], vec![3, 1, 2, 4]] {
        let points = PointLegs::new(legs.clone()).unwrap();
        for ass in AssignmentsFinder::new(points.clone()).find_all_assignments() {
            let finder = WicksFinder::new(points.clone(), ass);
            let table_product: i64 = finder.nn_ass().iter().map(|nn| nn.n_poss.0 * nn.n_poss.1).product();
            assert_eq!(finder.count_all_wick_contractions(), table_product);
        }
    }
}

#[test]
fn get_matches_exhaustive_order() {
    let (points, ass) = single_assignment(&[2, 4, 2]);
    let finder = WicksFinder::new(points, ass);
    let count = finder.count_all_wick_contractions();
    assert_eq!(count, 24);
    let mut swept = Vec::new();
    finder.for_all(|w| swept.push(w));
    assert_eq!(swept.len() as i64, count);
    for (rank, wick) in swept.iter().enumerate() {
        assert_eq!(&finder.get(rank as i64), wick);
    }
}

#[test]
fn decode_is_bijective_over_the_rank_space() {
    let (points, ass) = single_assignment(&[2, 4, 2]);
    let finder = WicksFinder::new(points.clone(), ass.clone());
    let mut distinct = HashSet::new();
    for rank in 0..finder.count_all_wick_contractions() {
        let wick = finder.get(rank);
        assert_valid_wick(&points, &ass, &wick);
        let mut key = wick;
        key.sort();
        assert!(distinct.insert(key), "rank {rank} repeats a contraction");
    }
}

#[test]
fn totals_over_all_assignments() {
    // Two double-leg points: both parallel pairings of the two lines.
    assert_eq!(total_wick_count(&PointLegs::new(vec![2, 2]).unwrap()), 2);
    assert_eq!(total_wick_count(&PointLegs::new(vec![2, 2, 2]).unwrap()), 8);
    // Four single-leg points: the three perfect matchings.
    assert_eq!(
        total_wick_count(&PointLegs::new(vec![1, 1, 1, 1]).unwrap()),
        3
    );
    // Odd parity: nothing to contract.
    assert_eq!(total_wick_count(&PointLegs::new(vec![1, 2]).unwrap()), 0);
}

proptest! {
    // Count identity and decode bijectivity on random small specs.
    #[test]
    fn enumeration_matches_closed_form(legs in proptest::collection::vec(1usize..4, 2..5)) {
        let points = PointLegs::new(legs).unwrap();
        for ass in AssignmentsFinder::new(points.clone()).find_all_assignments() {
            let finder = WicksFinder::new(points.clone(), ass.clone());
            let mut distinct = HashSet::new();
            finder.for_all(|wick| {
                assert_valid_wick(&points, &ass, &wick);
                let mut key = wick;
                key.sort();
                assert!(distinct.insert(key));
            });
            prop_assert_eq!(distinct.len() as i64, finder.count_all_wick_contractions());
        }
    }
}
