//! Rank codecs for combinations and dispositions.
//!
//! Combinations are ranked as bitmasks with `n_obj` set bits inside
//! `n_slots` bits, enumerated in increasing numeric (= lexicographic)
//! order by `next_combination`. Dispositions are ranked densely in
//! `[0, num_dispositions)` with a falling-factorial mixed radix: object
//! `i` carries base `n_slots - i`, the first object being the most
//! significant digit.

use super::arith::{binomial, factorials_ratio};

/// Number of unordered choices of `n_obj` out of `n_slots` slots.
#[inline]
pub fn num_combinations(n_obj: usize, n_slots: usize) -> i64 {
    binomial(n_slots, n_obj)
}

/// Number of ordered injective choices of `n_obj` out of `n_slots` slots.
/// Undefined for `n_obj > n_slots`.
#[inline]
pub fn num_dispositions(n_obj: usize, n_slots: usize) -> i64 {
    factorials_ratio(n_slots, n_slots - n_obj)
}

/// Smallest rank with `n_obj` set bits: the `n_obj` lowest bits.
#[inline]
pub fn first_combination(n_obj: usize) -> u64 {
    (1u64 << n_obj) - 1
}

/// Largest rank with `n_obj` set bits inside `n_slots` bits: the `n_obj`
/// highest of the `n_slots` low bits.
#[inline]
pub fn last_combination(n_obj: usize, n_slots: usize) -> u64 {
    ((1u64 << n_slots) - 1) ^ ((1u64 << (n_slots - n_obj)) - 1)
}

/// Next bitmask with the same popcount, in increasing numeric order.
///
/// Standard bit trick: isolate the lowest set bit `u`, ripple it into the
/// next higher zero (`v = u + x`), then redistribute the displaced ones at
/// the bottom.
#[inline]
pub fn next_combination(x: u64) -> u64 {
    let u = x & x.wrapping_neg();
    let v = u + x;
    v + (((v ^ x) / u) >> 2)
}

/// Visit every `n_obj`-bit combination of `n_slots` slots, in increasing
/// rank order. No-op when `n_obj` is zero or exceeds `n_slots`.
pub fn for_all_combinations<F>(n_obj: usize, n_slots: usize, mut f: F)
where
    F: FnMut(u64),
{
    if n_obj == 0 || n_obj > n_slots {
        return;
    }
    let last = last_combination(n_obj, n_slots);
    let mut combo = first_combination(n_obj);
    loop {
        f(combo);
        if combo >= last {
            return;
        }
        combo = next_combination(combo);
    }
}

/// Decode a combination rank into the ascending list of chosen slot
/// offsets (set-bit positions, low to high).
pub fn decrypt_combination(n_obj: usize, n_slots: usize, mask: u64) -> Vec<usize> {
    debug_assert_eq!(mask.count_ones() as usize, n_obj);
    debug_assert!(n_slots < 64 && mask < (1u64 << n_slots));
    let mut out = Vec::with_capacity(n_obj);
    for slot in 0..n_slots {
        if mask & (1u64 << slot) != 0 {
            out.push(slot);
        }
    }
    out
}

/// Inverse of [`decrypt_combination`]: chosen offsets back to the bitmask.
#[inline]
pub fn encrypt_combination(offsets: &[usize]) -> u64 {
    offsets.iter().fold(0u64, |m, &slot| m | (1u64 << slot))
}

/// First disposition rank.
#[inline]
pub fn first_disposition(_n_obj: usize, _n_slots: usize) -> i64 {
    0
}

/// Last disposition rank.
#[inline]
pub fn last_disposition(n_obj: usize, n_slots: usize) -> i64 {
    num_dispositions(n_obj, n_slots) - 1
}

/// Dense disposition ranks advance by one.
#[inline]
pub fn next_disposition(x: i64) -> i64 {
    x + 1
}

/// Decode a disposition rank into `n_obj` distinct slot indices, one per
/// object in choice order.
///
/// The rank is first split into digits: object `i` gets a skip count in
/// `[0, n_slots - i)`, extracted least-significant (last object) first.
/// Each digit then resolves, in object order, to the position of its
/// `skip`-th still-free slot; earlier objects consume slots, so digits
/// count only slots their predecessors left free. This first-fit walk is
/// the same rule the contraction decode applies to global legs.
pub fn decrypt_disposition(n_obj: usize, n_slots: usize, rank: i64) -> Vec<usize> {
    debug_assert!(n_obj <= n_slots);
    debug_assert!((0..num_dispositions(n_obj, n_slots)).contains(&rank));
    let mut choice = vec![0usize; n_obj];
    let mut r = rank;
    for i in (0..n_obj).rev() {
        let base = (n_slots - i) as i64;
        choice[i] = (r % base) as usize;
        r /= base;
    }
    let mut used = vec![false; n_slots];
    let mut out = Vec::with_capacity(n_obj);
    for &skip in &choice {
        let slot = nth_free_slot(&used, 0, skip);
        used[slot] = true;
        out.push(slot);
    }
    out
}

/// Inverse of [`decrypt_disposition`]: distinct slot choices back to the
/// dense rank.
pub fn encrypt_disposition(n_slots: usize, chosen: &[usize]) -> i64 {
    let mut used = vec![false; n_slots];
    let mut rank = 0i64;
    for (i, &slot) in chosen.iter().enumerate() {
        debug_assert!(!used[slot]);
        let skip = (0..slot).filter(|&s| !used[s]).count();
        rank = rank * (n_slots - i) as i64 + skip as i64;
        used[slot] = true;
    }
    rank
}

/// Position of the `skip`-th unused slot at or after `start`.
///
/// Panics past the end of `used` if fewer than `skip + 1` free slots
/// remain; callers guarantee enough free slots by construction.
#[inline]
pub(crate) fn nth_free_slot(used: &[bool], start: usize, skip: usize) -> usize {
    let mut pos = start;
    let mut remaining = skip;
    loop {
        if !used[pos] {
            if remaining == 0 {
                return pos;
            }
            remaining -= 1;
        }
        pos += 1;
    }
}
