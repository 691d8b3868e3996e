use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `n!` for `n ≥ 0`.
pub fn factorial(n: u64) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// Odd double factorial `(2n - 1)!! = 1 · 3 · … · (2n - 1)`, with `(-1)!! = 1`.
///
/// This is the number of Stirling permutations of order `n`.
pub fn double_factorial_odd(n: u64) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * (2 * i - 1))
}

/// Closed form `n! / (k! (n-k)!)`, zero outside `0 ≤ k ≤ n`.
pub fn binomial_closed(n: i64, k: i64) -> BigUint {
    if n < 0 || k < 0 || k > n {
        return BigUint::zero();
    }
    let (n, k) = (n as u64, k as u64);
    factorial(n) / (factorial(k) * factorial(n - k))
}
