use combi_core::StirlingPermutation;

/// Every Stirling permutation of order `n`, `(2n - 1)!!` in total.
///
/// Each permutation of order `n - 1` yields `2n - 1` children by inserting
/// the pair `n n` at every gap, left to right. Order 0 has the single empty
/// word.
pub fn stirling_permutations(n: u64) -> Vec<StirlingPermutation> {
    if n == 0 {
        return vec![StirlingPermutation::default()];
    }
    if n == 1 {
        return vec![StirlingPermutation::new(vec![1, 1])];
    }

    let smaller = stirling_permutations(n - 1);
    let gaps = (2 * n - 1) as usize;
    let mut result = Vec::with_capacity(smaller.len() * gaps);
    for perm in &smaller {
        let word = perm.as_slice();
        for pos in 0..=word.len() {
            let mut next = Vec::with_capacity(word.len() + 2);
            next.extend_from_slice(&word[..pos]);
            next.extend([n, n]);
            next.extend_from_slice(&word[pos..]);
            result.push(StirlingPermutation::new(next));
        }
    }
    result
}
