use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Memo tables for the counting recurrences.
///
/// A cache is an ordinary value: create one per logical run, or keep one
/// around to share work across calls. Keys are the argument tuples, so
/// results for distinct arguments never collide.
#[derive(Debug, Clone, Default)]
pub struct CountCache {
    binomial: HashMap<(u64, u64), BigUint>,
    stirling2: HashMap<(u64, u64), BigUint>,
    bell: HashMap<u64, BigUint>,
    dowling: HashMap<u64, BigUint>,
    dowling_no_zero: HashMap<u64, BigUint>,
}

impl CountCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of memoized entries across all tables.
    pub fn len(&self) -> usize {
        self.binomial.len()
            + self.stirling2.len()
            + self.bell.len()
            + self.dowling.len()
            + self.dowling_no_zero.len()
    }

    /// Whether no value has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every memoized entry.
    pub fn clear(&mut self) {
        log::debug!("clearing count cache with {} entries", self.len());
        self.binomial.clear();
        self.stirling2.clear();
        self.bell.clear();
        self.dowling.clear();
        self.dowling_no_zero.clear();
    }

    /// Binomial coefficient `C(n, k)`; zero whenever `k < 0`, `n < 0` or `k > n`.
    pub fn binomial(&mut self, n: i64, k: i64) -> BigUint {
        if n < 0 || k < 0 || k > n {
            return BigUint::zero();
        }
        self.binomial_unsigned(n as u64, k as u64)
    }

    /// `C(n, k)` for unsigned arguments.
    ///
    /// Fills the memo row by row for `n' = 1..=n`, keeping only the band of
    /// `k'` that can still reach `(n, k)`, so depth stays constant in `n`.
    pub(crate) fn binomial_unsigned(&mut self, n: u64, k: u64) -> BigUint {
        if k > n {
            return BigUint::zero();
        }
        if k == 0 || k == n {
            return BigUint::one();
        }
        if let Some(value) = self.binomial.get(&(n, k)) {
            return value.clone();
        }
        for row in 1..=n {
            let lo = k.saturating_sub(n - row).max(1);
            let hi = k.min(row - 1);
            for col in lo..=hi {
                if self.binomial.contains_key(&(row, col)) {
                    continue;
                }
                let value =
                    self.binomial_known(row - 1, col - 1) + self.binomial_known(row - 1, col);
                self.binomial.insert((row, col), value);
            }
        }
        self.binomial_known(n, k)
    }

    fn binomial_known(&self, n: u64, k: u64) -> BigUint {
        if k > n {
            return BigUint::zero();
        }
        if k == 0 || k == n {
            return BigUint::one();
        }
        self.binomial.get(&(n, k)).cloned().unwrap_or_default()
    }

    /// Stirling number of the second kind `S(n, k)`, filled row by row like
    /// [`CountCache::binomial`].
    pub fn stirling2(&mut self, n: u64, k: u64) -> BigUint {
        if n == 0 || k == 0 || k > n {
            return self.stirling2_known(n, k);
        }
        if let Some(value) = self.stirling2.get(&(n, k)) {
            return value.clone();
        }
        for row in 1..=n {
            let lo = k.saturating_sub(n - row).max(1);
            let hi = k.min(row);
            for col in lo..=hi {
                if self.stirling2.contains_key(&(row, col)) {
                    continue;
                }
                let value = self.stirling2_known(row - 1, col - 1)
                    + BigUint::from(col) * self.stirling2_known(row - 1, col);
                self.stirling2.insert((row, col), value);
            }
        }
        self.stirling2_known(n, k)
    }

    fn stirling2_known(&self, n: u64, k: u64) -> BigUint {
        if n == 0 && k == 0 {
            return BigUint::one();
        }
        if n == 0 || k == 0 || k > n {
            return BigUint::zero();
        }
        self.stirling2.get(&(n, k)).cloned().unwrap_or_default()
    }

    /// Bell number via `B(n) = Σ_{m<n} C(n-1, m) B(m)`, `B(0) = 1`.
    pub fn bell(&mut self, n: u64) -> BigUint {
        if n == 0 {
            return BigUint::one();
        }
        if let Some(value) = self.bell.get(&n) {
            return value.clone();
        }
        let mut value = BigUint::zero();
        for m in 0..n {
            value += self.binomial_unsigned(n - 1, m) * self.bell(m);
        }
        self.bell.insert(n, value.clone());
        value
    }

    /// Bell number as the row sum `Σ_{k=0..n} S(n, k)`.
    pub fn bell_from_stirling(&mut self, n: u64) -> BigUint {
        (0..=n).map(|k| self.stirling2(n, k)).sum()
    }

    /// Number of type-B partitions of `{-n..n}`, zero block included.
    ///
    /// `Σ_{i=0..n} C(n, i) · Σ_{k=0..n-i} 2^(n-i-k) S(n-i, k)`: choose the `i`
    /// positive elements joining 0, then sign the rest.
    pub fn dowling(&mut self, n: u64) -> BigUint {
        if let Some(value) = self.dowling.get(&n) {
            return value.clone();
        }
        let mut value = BigUint::zero();
        for i in 0..=n {
            value += self.binomial_unsigned(n, i) * self.dowling_no_zero_block(n - i);
        }
        self.dowling.insert(n, value.clone());
        value
    }

    /// Number of type-B partitions of `{-n..-1, 1..n}` without a zero block:
    /// `Σ_{k=0..n} 2^(n-k) S(n, k)`.
    pub fn dowling_no_zero_block(&mut self, n: u64) -> BigUint {
        if let Some(value) = self.dowling_no_zero.get(&n) {
            return value.clone();
        }
        let mut value = BigUint::zero();
        for k in 0..=n {
            value += self.stirling2(n, k) << (n - k);
        }
        self.dowling_no_zero.insert(n, value.clone());
        value
    }
}
