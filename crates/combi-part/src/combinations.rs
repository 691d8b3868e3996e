use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Memo table for [`CombinationCache::combinations`], keyed on the input sequence.
#[derive(Debug, Clone)]
pub struct CombinationCache<T> {
    memo: HashMap<Vec<T>, Arc<[Vec<T>]>>,
}

impl<T> Default for CombinationCache<T> {
    fn default() -> Self {
        Self {
            memo: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> CombinationCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized input sequences.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Every subset of `items`, `2^len` in total.
    ///
    /// The subsets of `items[1..]` come first, followed by the same subsets
    /// with `items[0]` prepended, so the empty subset always leads.
    pub fn combinations(&mut self, items: &[T]) -> Arc<[Vec<T>]> {
        let Some((head, tail)) = items.split_first() else {
            return Arc::from(vec![Vec::new()]);
        };
        if let Some(hit) = self.memo.get(items) {
            return Arc::clone(hit);
        }

        let without_head = self.combinations(tail);
        let mut subsets = Vec::with_capacity(without_head.len() * 2);
        subsets.extend(without_head.iter().cloned());
        for subset in without_head.iter() {
            let mut with_head = Vec::with_capacity(subset.len() + 1);
            with_head.push(head.clone());
            with_head.extend(subset.iter().cloned());
            subsets.push(with_head);
        }

        let subsets: Arc<[Vec<T>]> = subsets.into();
        self.memo.insert(items.to_vec(), Arc::clone(&subsets));
        subsets
    }
}

/// Every subset of `items`, computed with a fresh cache.
pub fn combinations<T: Clone + Eq + Hash>(items: &[T]) -> Vec<Vec<T>> {
    CombinationCache::new().combinations(items).to_vec()
}

/// Every ordering of `items`: each element in turn leads, followed by every
/// ordering of the remaining ones.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for (idx, current) in items.iter().enumerate() {
        let mut remaining = items.to_vec();
        remaining.remove(idx);
        for tail in permutations(&remaining) {
            let mut ordering = Vec::with_capacity(items.len());
            ordering.push(current.clone());
            ordering.extend(tail);
            result.push(ordering);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_order_is_stable() {
        let subsets = combinations(&['a', 'b']);
        assert_eq!(
            subsets,
            vec![vec![], vec!['b'], vec!['a'], vec!['a', 'b']]
        );
    }

    #[test]
    fn empty_input_has_one_subset() {
        assert_eq!(combinations::<u8>(&[]), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn cache_is_reused_for_tails() {
        let mut cache = CombinationCache::new();
        let first = cache.combinations(&[1usize, 2, 3]);
        assert_eq!(first.len(), 8);
        assert_eq!(cache.len(), 3);
        let again = cache.combinations(&[2usize, 3]);
        assert_eq!(again.len(), 4);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn permutations_in_lexicographic_order_of_positions() {
        let perms = permutations(&[1, 2, 3]);
        assert_eq!(
            perms,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        assert_eq!(permutations::<i32>(&[]).len(), 1);
    }
}
