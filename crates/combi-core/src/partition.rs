//! Value-typed set partitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer label of a partitioned element. Type-B elements are signed.
pub type Element = i64;

/// Ordered run of elements; order records generation order, not a sort.
pub type Block = Vec<Element>;

/// A set partition stored as an ordered list of blocks.
///
/// Block order is an artefact of generation. Two partitions that differ only
/// in block order compare unequal; use [`Partition::normalised`] to compare
/// them as unordered set systems.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Partition {
    blocks: Vec<Block>,
}

impl Partition {
    /// Wraps the given blocks without validation.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The empty partition of the empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the blocks in stored order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consumes the partition and returns its blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the partition has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of elements across all blocks.
    pub fn num_elements(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Iterates over every element, flattened left to right.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.blocks.iter().flatten().copied()
    }

    /// Returns a copy with each block sorted and the blocks sorted, so that
    /// partitions describing the same set system compare equal.
    pub fn normalised(&self) -> Self {
        let mut blocks = self.blocks.clone();
        for block in &mut blocks {
            block.sort_unstable();
        }
        blocks.sort();
        Self { blocks }
    }
}

impl From<Vec<Block>> for Partition {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, block) in self.blocks.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (pos, element) in block.iter().enumerate() {
                if pos > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{element}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_nested_lists() {
        let part = Partition::new(vec![vec![1, -2], vec![3]]);
        assert_eq!(part.to_string(), "[[1, -2], [3]]");
        assert_eq!(Partition::empty().to_string(), "[]");
    }

    #[test]
    fn normalised_ignores_block_order() {
        let a = Partition::new(vec![vec![3], vec![2, 1]]);
        let b = Partition::new(vec![vec![1, 2], vec![3]]);
        assert_ne!(a, b);
        assert_eq!(a.normalised(), b.normalised());
        assert_eq!(a.num_elements(), 3);
        assert_eq!(a.elements().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
