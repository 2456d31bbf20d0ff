//! Exact integer counting arithmetic.

/// `n!` as an exact `i64`.
#[inline]
pub fn factorial(n: usize) -> i64 {
    (2..=n as i64).product()
}

/// Ratio of factorials `num!/den!`, computed without forming either
/// factorial. Requires `num >= den` to stay an integer.
#[inline]
pub fn factorials_ratio(num: usize, den: usize) -> i64 {
    debug_assert!(num >= den, "factorials_ratio({num}, {den}) is not integral");
    ((den as i64 + 1).max(2)..=num as i64).product()
}

/// Binomial coefficient `C(n, m)`; zero when `n < m`.
pub fn binomial(n: usize, m: usize) -> i64 {
    if n < m {
        0
    } else {
        factorials_ratio(n, m.max(n - m)) / factorial(m.min(n - m))
    }
}
