use std::collections::HashMap;
use std::sync::Arc;

use combi_core::{Element, Partition};

/// Memo table for type-A generation, keyed on `(sequence, k)`.
///
/// Results are handed out as shared immutable slices; copy a partition
/// before editing it.
#[derive(Debug, Clone, Default)]
pub struct PartitionCache {
    memo: HashMap<(Vec<Element>, usize), Arc<[Partition]>>,
}

impl PartitionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized `(sequence, k)` keys.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Every partition of `seq` into exactly `k` non-empty blocks.
    ///
    /// Follows `S(n, k) = S(n-1, k-1) + k S(n-1, k)` on the last element `x`:
    /// first every `(k-1)`-partition of the prefix with `[x]` appended as a new
    /// block, then every `k`-partition of the prefix with `x` pushed onto each
    /// block in turn. Elements therefore keep their `seq` order inside blocks.
    pub fn partitions_into_k_blocks(&mut self, seq: &[Element], k: usize) -> Arc<[Partition]> {
        let n = seq.len();
        if k == 0 && n == 0 {
            return Arc::from(vec![Partition::empty()]);
        }
        if k == 0 || n == 0 || k > n {
            return Arc::from(Vec::<Partition>::new());
        }
        if k == n {
            let singletons = seq.iter().map(|&x| vec![x]).collect();
            return Arc::from(vec![Partition::new(singletons)]);
        }
        if k == 1 {
            return Arc::from(vec![Partition::new(vec![seq.to_vec()])]);
        }

        let key = (seq.to_vec(), k);
        if let Some(hit) = self.memo.get(&key) {
            return Arc::clone(hit);
        }

        let Some((&last, prefix)) = seq.split_last() else {
            return Arc::from(Vec::<Partition>::new());
        };

        let fewer_blocks = self.partitions_into_k_blocks(prefix, k - 1);
        let same_blocks = self.partitions_into_k_blocks(prefix, k);
        let mut result = Vec::with_capacity(fewer_blocks.len() + k * same_blocks.len());

        for part in fewer_blocks.iter() {
            let mut blocks = part.blocks().to_vec();
            blocks.push(vec![last]);
            result.push(Partition::new(blocks));
        }
        for part in same_blocks.iter() {
            for idx in 0..part.len() {
                let mut blocks = part.blocks().to_vec();
                blocks[idx].push(last);
                result.push(Partition::new(blocks));
            }
        }

        let result: Arc<[Partition]> = result.into();
        self.memo.insert(key, Arc::clone(&result));
        result
    }

    /// Every partition of `seq`, grouped by ascending block count.
    pub fn all_partitions(&mut self, seq: &[Element]) -> Vec<Partition> {
        let mut result = Vec::new();
        for k in 0..=seq.len() {
            result.extend(self.partitions_into_k_blocks(seq, k).iter().cloned());
        }
        log::debug!(
            "generated {} type-A partitions of {} elements ({} memo keys)",
            result.len(),
            seq.len(),
            self.len()
        );
        result
    }
}

/// Every partition of `seq` into `k` blocks, computed with a fresh cache.
pub fn partitions_into_k_blocks(seq: &[Element], k: usize) -> Vec<Partition> {
    PartitionCache::new().partitions_into_k_blocks(seq, k).to_vec()
}

/// Every partition of `seq`, computed with a fresh cache.
pub fn all_partitions(seq: &[Element]) -> Vec<Partition> {
    PartitionCache::new().all_partitions(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(raw: Vec<Vec<Vec<Element>>>) -> Vec<Partition> {
        raw.into_iter().map(Partition::new).collect()
    }

    #[test]
    fn base_cases() {
        assert_eq!(partitions_into_k_blocks(&[], 0), vec![Partition::empty()]);
        assert!(partitions_into_k_blocks(&[], 1).is_empty());
        assert!(partitions_into_k_blocks(&[1, 2], 0).is_empty());
        assert!(partitions_into_k_blocks(&[1, 2], 3).is_empty());
        assert_eq!(
            partitions_into_k_blocks(&[4, 5, 6], 3),
            parts(vec![vec![vec![4], vec![5], vec![6]]])
        );
        assert_eq!(
            partitions_into_k_blocks(&[4, 5, 6], 1),
            parts(vec![vec![vec![4, 5, 6]]])
        );
    }

    #[test]
    fn three_elements_into_two_blocks() {
        assert_eq!(
            partitions_into_k_blocks(&[1, 2, 3], 2),
            parts(vec![
                vec![vec![1, 2], vec![3]],
                vec![vec![1, 3], vec![2]],
                vec![vec![1], vec![2, 3]],
            ])
        );
    }

    #[test]
    fn all_partitions_of_empty_sequence() {
        assert_eq!(all_partitions(&[]), vec![Partition::empty()]);
    }

    #[test]
    fn shared_results_are_reused() {
        let mut cache = PartitionCache::new();
        let first = cache.partitions_into_k_blocks(&[1, 2, 3, 4], 2);
        let second = cache.partitions_into_k_blocks(&[1, 2, 3, 4], 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 7);
    }
}
