#![deny(missing_docs)]
#![doc = "Memoized counting recurrences (binomial, Stirling of the second kind, Bell, \
Dowling) with arbitrary precision results."]

/// Scoped memo tables backing every recurrence.
pub mod cache;
/// Factorial based helpers used for cross-checks.
pub mod factorial;

pub use cache::CountCache;
pub use factorial::{binomial_closed, double_factorial_odd, factorial};
pub use num_bigint::BigUint;

/// `C(n, k)` computed with a fresh cache.
pub fn binomial(n: i64, k: i64) -> BigUint {
    CountCache::new().binomial(n, k)
}

/// `S(n, k)` computed with a fresh cache.
pub fn stirling2(n: u64, k: u64) -> BigUint {
    CountCache::new().stirling2(n, k)
}

/// Bell number `B(n)` computed with a fresh cache.
pub fn bell(n: u64) -> BigUint {
    CountCache::new().bell(n)
}

/// Bell number as a Stirling row sum, computed with a fresh cache.
pub fn bell_from_stirling(n: u64) -> BigUint {
    CountCache::new().bell_from_stirling(n)
}

/// Dowling number (type-B partitions with a zero block allowed).
pub fn dowling(n: u64) -> BigUint {
    let mut cache = CountCache::new();
    let value = cache.dowling(n);
    log::debug!("dowling({n}) = {value} using {} memo entries", cache.len());
    value
}

/// Type-B partition count without a zero block.
pub fn dowling_no_zero_block(n: u64) -> BigUint {
    CountCache::new().dowling_no_zero_block(n)
}

/// Number of Stirling permutations of order `n`, `(2n - 1)!!`.
pub fn stirling_permutation_count(n: u64) -> BigUint {
    double_factorial_odd(n)
}

/// Exact snapshot of the counting sequences for a single `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable {
    /// Size of the underlying set.
    pub n: u64,
    /// `C(n, k)` for `k = 0..=n`.
    pub binomial_row: Vec<BigUint>,
    /// `S(n, k)` for `k = 0..=n`.
    pub stirling_row: Vec<BigUint>,
    /// Bell number `B(n)`.
    pub bell: BigUint,
    /// Dowling number with zero block.
    pub dowling: BigUint,
    /// Dowling count without zero block.
    pub dowling_no_zero_block: BigUint,
    /// Stirling permutation count `(2n - 1)!!`.
    pub stirling_permutations: BigUint,
}

impl CountTable {
    /// Computes every sequence for `n` through one shared cache.
    pub fn compute(n: u64, cache: &mut CountCache) -> Self {
        Self {
            n,
            binomial_row: (0..=n).map(|k| cache.binomial_unsigned(n, k)).collect(),
            stirling_row: (0..=n).map(|k| cache.stirling2(n, k)).collect(),
            bell: cache.bell(n),
            dowling: cache.dowling(n),
            dowling_no_zero_block: cache.dowling_no_zero_block(n),
            stirling_permutations: double_factorial_odd(n),
        }
    }
}
