#![deny(missing_docs)]
#![doc = "Pure classifiers over set partitions. Every query reads blocks in their \
stored order and works on either the compressed or the complete type-B form; \
the complete form repeats each pair with opposite signs, so sign-sensitive \
answers describe whichever form is passed in."]

use combi_core::{Block, Element, Partition};
use serde::{Deserialize, Serialize};

fn adjacent_pairs(part: &Partition) -> impl Iterator<Item = (Element, Element)> + '_ {
    part.blocks()
        .iter()
        .flat_map(|block| block.windows(2).map(|pair| (pair[0], pair[1])))
}

fn consecutive_magnitudes(a: Element, b: Element) -> bool {
    a.unsigned_abs().checked_add(1) == Some(b.unsigned_abs())
}

fn min_abs(block: &Block) -> Option<u64> {
    block.iter().map(|x| x.unsigned_abs()).min()
}

fn max_abs(block: &Block) -> Option<u64> {
    block.iter().map(|x| x.unsigned_abs()).max()
}

/// False iff some block holds neighbours `a, b` with `|a| + 1 = |b|` and the
/// same sign.
pub fn is_separated(part: &Partition) -> bool {
    !adjacent_pairs(part)
        .any(|(a, b)| consecutive_magnitudes(a, b) && a != 0 && a.signum() == b.signum())
}

/// False iff some block holds neighbours `a, b` with `|a| + 1 = |b|`, whatever
/// their signs.
pub fn is_strongly_separated(part: &Partition) -> bool {
    !adjacent_pairs(part).any(|(a, b)| consecutive_magnitudes(a, b))
}

/// False iff some block's largest magnitude is below the smallest magnitude
/// of the block after it.
pub fn is_merge_free(part: &Partition) -> bool {
    !part.blocks().windows(2).any(|pair| {
        matches!((max_abs(&pair[0]), min_abs(&pair[1])), (Some(hi), Some(lo)) if hi < lo)
    })
}

/// Signed variant of [`is_merge_free`]: compares plain maxima and minima.
pub fn is_normal_merge_free(part: &Partition) -> bool {
    !part.blocks().windows(2).any(|pair| {
        matches!(
            (pair[0].iter().max(), pair[1].iter().min()),
            (Some(hi), Some(lo)) if hi < lo
        )
    })
}

fn inversions(part: &Partition) -> impl Iterator<Item = ()> + '_ {
    let blocks = part.blocks();
    blocks.iter().enumerate().flat_map(move |(i, block)| {
        block.iter().flat_map(move |&x| {
            blocks[i + 1..]
                .iter()
                .filter_map(min_abs)
                .filter(move |&lo| i128::from(x) > i128::from(lo))
                .map(|_| ())
        })
    })
}

/// Number of pairs `(x, j)` where `x` sits in block `i`, `j > i`, and `x`
/// exceeds the smallest magnitude in block `j`.
pub fn inversion_count(part: &Partition) -> usize {
    inversions(part).count()
}

/// Whether [`inversion_count`] is zero; stops at the first inversion.
pub fn is_inversion_free(part: &Partition) -> bool {
    inversions(part).next().is_none()
}

/// Every classifier evaluated on one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionStats {
    /// Number of blocks.
    pub blocks: usize,
    /// Result of [`is_separated`].
    pub separated: bool,
    /// Result of [`is_strongly_separated`].
    pub strongly_separated: bool,
    /// Result of [`is_merge_free`].
    pub merge_free: bool,
    /// Result of [`is_normal_merge_free`].
    pub normal_merge_free: bool,
    /// Result of [`inversion_count`].
    pub inversions: usize,
    /// Result of [`is_inversion_free`].
    pub inversion_free: bool,
}

impl PartitionStats {
    /// Evaluates every classifier on `part`.
    pub fn of(part: &Partition) -> Self {
        let inversions = inversion_count(part);
        Self {
            blocks: part.len(),
            separated: is_separated(part),
            strongly_separated: is_strongly_separated(part),
            merge_free: is_merge_free(part),
            normal_merge_free: is_normal_merge_free(part),
            inversions,
            inversion_free: inversions == 0,
        }
    }
}
