use combi_core::{Element, Partition};
use serde::{Deserialize, Serialize};

use crate::combinations::CombinationCache;

/// Options controlling how type-A partitions are lifted to type B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiftOpts {
    /// Emit the complete form (every block next to its opposite) instead of
    /// the compressed one.
    #[serde(default)]
    pub expand: bool,
}

/// Flattened positions whose sign may be flipped when lifting `part`.
///
/// A position qualifies unless its block starts with 0 (the zero block) or
/// it holds the block's first element, which fixes the sign of the pair.
pub fn signable_indices(part: &Partition) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut offset = 0;
    for block in part.blocks() {
        if let Some(&first) = block.first() {
            if first != 0 {
                indices.extend(offset + 1..offset + block.len());
            }
        }
        offset += block.len();
    }
    indices
}

/// Copy of `part` with the elements at the given flattened positions negated.
///
/// Positions past the end are ignored.
pub fn lift_to_b(part: &Partition, chosen: &[usize]) -> Partition {
    let mut flip = vec![false; part.num_elements()];
    for &idx in chosen {
        if let Some(slot) = flip.get_mut(idx) {
            *slot = true;
        }
    }
    let mut flat = flip.into_iter();
    let blocks = part
        .blocks()
        .iter()
        .map(|block| {
            block
                .iter()
                .map(|&x| if flat.next().unwrap_or(false) { -x } else { x })
                .collect()
        })
        .collect();
    Partition::new(blocks)
}

/// Expands a compressed type-B partition into its complete form.
///
/// A block without 0 is followed by its element-wise negation. The block
/// holding 0 becomes itself followed by the negation of its non-zero
/// elements, which is the whole symmetric block.
pub fn complete(part: &Partition) -> Partition {
    let mut blocks = Vec::with_capacity(part.len() * 2);
    for block in part.blocks() {
        if block.contains(&0) {
            let mut symmetric = block.clone();
            symmetric.extend(block.iter().filter(|&&x| x != 0).map(|&x| -x));
            blocks.push(symmetric);
        } else {
            blocks.push(block.clone());
            blocks.push(block.iter().map(|&x: &Element| -x).collect());
        }
    }
    Partition::new(blocks)
}

/// Lifts type-A partitions to every compatible type-B partition.
///
/// Holds the combination cache for sign choices; reuse one engine across
/// calls to share it.
#[derive(Debug, Clone, Default)]
pub struct LiftEngine {
    signs: CombinationCache<usize>,
}

impl LiftEngine {
    /// Creates an engine with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sign assignment of every partition in `parts`.
    pub fn lift_all(&mut self, parts: &[Partition], opts: &LiftOpts) -> Vec<Partition> {
        let mut lifted = Vec::new();
        for part in parts {
            let signable = signable_indices(part);
            for chosen in self.signs.combinations(&signable).iter() {
                let signed = lift_to_b(part, chosen);
                if opts.expand {
                    lifted.push(complete(&signed));
                } else {
                    lifted.push(signed);
                }
            }
        }
        log::debug!(
            "lifted {} type-A partitions to {} type-B partitions (expand = {})",
            parts.len(),
            lifted.len(),
            opts.expand
        );
        lifted
    }
}

/// Every type-B partition lifted from `parts`, computed with a fresh cache.
pub fn all_type_b_from_a(parts: &[Partition], expand: bool) -> Vec<Partition> {
    LiftEngine::new().lift_all(parts, &LiftOpts { expand })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signable_skips_leaders_and_zero_block() {
        let part = Partition::new(vec![vec![0, 3], vec![1, 2, 5], vec![4]]);
        assert_eq!(signable_indices(&part), vec![3, 4]);
        assert!(signable_indices(&Partition::empty()).is_empty());
    }

    #[test]
    fn lift_negates_chosen_positions() {
        let part = Partition::new(vec![vec![1, 2, 5], vec![4, 6]]);
        let lifted = lift_to_b(&part, &[2, 4, 99]);
        assert_eq!(lifted, Partition::new(vec![vec![1, 2, -5], vec![4, -6]]));
        assert_eq!(part, Partition::new(vec![vec![1, 2, 5], vec![4, 6]]));
    }

    #[test]
    fn complete_pairs_blocks_and_symmetrises_zero_block() {
        let part = Partition::new(vec![vec![0, 2], vec![1, -3]]);
        assert_eq!(
            complete(&part),
            Partition::new(vec![vec![0, 2, -2], vec![1, -3], vec![-1, 3]])
        );
    }

    #[test]
    fn lifting_two_elements() {
        let parts = vec![
            Partition::new(vec![vec![1, 2]]),
            Partition::new(vec![vec![1], vec![2]]),
        ];
        let lifted = all_type_b_from_a(&parts, false);
        assert_eq!(
            lifted,
            vec![
                Partition::new(vec![vec![1, 2]]),
                Partition::new(vec![vec![1, -2]]),
                Partition::new(vec![vec![1], vec![2]]),
            ]
        );
        let expanded = all_type_b_from_a(&parts, true);
        assert_eq!(expanded[1], Partition::new(vec![vec![1, -2], vec![-1, 2]]));
        assert_eq!(expanded.len(), 3);
    }
}
