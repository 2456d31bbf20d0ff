//! Integer partitions with every part at least two.
//!
//! An interaction vertex needs at least two legs, so the admissible vertex
//! contents of an `m`-leg process are exactly the partitions of `m` with
//! no unit part.

/// All partitions of `m` into parts ≥ 2, each partition in descending
/// part order, partitions in descending lexicographic order. `m = 0`
/// yields the single empty partition.
pub fn partitions_without_ones(m: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut cur = Vec::new();
    descend(m, m, &mut cur, &mut out);
    out
}

fn descend(remaining: usize, max_part: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if remaining == 0 {
        out.push(cur.clone());
        return;
    }
    let mut part = remaining.min(max_part);
    while part >= 2 {
        // A part leaving exactly one unit behind can never complete.
        if remaining - part != 1 {
            cur.push(part);
            descend(remaining - part, part, cur, out);
            cur.pop();
        }
        part -= 1;
    }
}
