use std::collections::{BTreeSet, HashSet};

use combi_core::{Block, CombiError, Element, ErrorInfo, Partition};

/// Pairing structure recovered from a complete type-B partition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeBShape {
    /// Index of the self-symmetric block, if any.
    pub zero_block: Option<usize>,
    /// Index pairs `(i, j)`, `i < j`, of blocks that are each other's negation.
    pub pairs: Vec<(usize, usize)>,
}

fn render_block(block: &Block) -> String {
    format!("{block:?}")
}

fn structure_error(code: &str, message: &str, block: &Block) -> CombiError {
    CombiError::Structure(
        ErrorInfo::new(code, message)
            .with_context("block", render_block(block))
            .with_hint("expected a complete type-B partition (every block next to its opposite)"),
    )
}

/// Checks that `part` is a complete type-B partition and returns its pairing.
///
/// Blocks must be non-empty and disjoint, each block's negation must be
/// another block or the block itself, at most one block may be
/// self-symmetric and 0 may only appear in that block.
pub fn validate_type_b(part: &Partition) -> Result<TypeBShape, CombiError> {
    let mut seen = HashSet::new();
    for block in part.blocks() {
        if block.is_empty() {
            return Err(structure_error("empty-block", "partition has an empty block", block));
        }
        for &x in block {
            if !seen.insert(x) {
                return Err(CombiError::Structure(
                    ErrorInfo::new("duplicate-element", "element appears more than once")
                        .with_context("element", x.to_string()),
                ));
            }
        }
    }

    let sets: Vec<BTreeSet<Element>> = part
        .blocks()
        .iter()
        .map(|block| block.iter().copied().collect())
        .collect();
    let mut shape = TypeBShape::default();
    let mut matched = vec![false; sets.len()];

    for (i, set) in sets.iter().enumerate() {
        if matched[i] {
            continue;
        }
        let negated: BTreeSet<Element> = set.iter().map(|&x| -x).collect();
        if &negated == set {
            if shape.zero_block.is_some() {
                return Err(structure_error(
                    "multiple-zero-blocks",
                    "more than one self-symmetric block",
                    &part.blocks()[i],
                ));
            }
            shape.zero_block = Some(i);
            matched[i] = true;
            continue;
        }
        if set.contains(&0) {
            return Err(structure_error(
                "zero-outside-zero-block",
                "0 appears in a block that is not symmetric",
                &part.blocks()[i],
            ));
        }
        let partner = (i + 1..sets.len()).find(|&j| !matched[j] && sets[j] == negated);
        let Some(j) = partner else {
            return Err(structure_error(
                "unpaired-block",
                "block has no opposite block",
                &part.blocks()[i],
            ));
        };
        matched[i] = true;
        matched[j] = true;
        shape.pairs.push((i, j));
    }
    Ok(shape)
}

/// Whether `part` is a well-formed complete type-B partition.
pub fn is_type_b(part: &Partition) -> bool {
    validate_type_b(part).is_ok()
}

fn sort_by_magnitude(block: &mut Block) {
    block.sort_by_key(|x| (x.abs(), *x < 0));
}

/// Adler representation of a complete type-B partition.
///
/// The zero block keeps its non-negative half; each opposite pair keeps the
/// member whose smallest-magnitude element is positive. Elements are sorted
/// by absolute value and blocks by the magnitude of their first element, so
/// the zero block (if any) leads.
pub fn adler_form(part: &Partition) -> Result<Partition, CombiError> {
    let shape = validate_type_b(part)?;
    let blocks = part.blocks();
    let mut compressed: Vec<Block> = Vec::with_capacity(shape.pairs.len() + 1);

    if let Some(zero) = shape.zero_block {
        let mut half: Block = blocks[zero].iter().copied().filter(|&x| x >= 0).collect();
        sort_by_magnitude(&mut half);
        compressed.push(half);
    }
    let mut paired: Vec<Block> = Vec::with_capacity(shape.pairs.len());
    for &(i, j) in &shape.pairs {
        let mut chosen = blocks[i].clone();
        sort_by_magnitude(&mut chosen);
        if chosen.first().is_some_and(|&x| x < 0) {
            chosen = blocks[j].clone();
            sort_by_magnitude(&mut chosen);
        }
        paired.push(chosen);
    }
    paired.sort_by_key(|block| block.first().map(|x| x.abs()));
    compressed.extend(paired);
    Ok(Partition::new(compressed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_complete_partitions() {
        let part = Partition::new(vec![vec![0, 2, -2], vec![1, -3], vec![-1, 3]]);
        let shape = validate_type_b(&part).unwrap();
        assert_eq!(shape.zero_block, Some(0));
        assert_eq!(shape.pairs, vec![(1, 2)]);
        assert!(is_type_b(&Partition::empty()));
        assert!(is_type_b(&Partition::new(vec![vec![1, -1]])));
    }

    #[test]
    fn rejects_malformed_partitions() {
        let unpaired = Partition::new(vec![vec![1, 2], vec![-1]]);
        let err = validate_type_b(&unpaired).unwrap_err();
        assert_eq!(err.info().code, "unpaired-block");

        let two_zero = Partition::new(vec![vec![1, -1], vec![2, -2]]);
        assert_eq!(
            validate_type_b(&two_zero).unwrap_err().info().code,
            "multiple-zero-blocks"
        );

        let stray_zero = Partition::new(vec![vec![0, 1], vec![-1]]);
        assert_eq!(
            validate_type_b(&stray_zero).unwrap_err().info().code,
            "zero-outside-zero-block"
        );

        let duplicate = Partition::new(vec![vec![1], vec![-1], vec![1]]);
        assert_eq!(
            validate_type_b(&duplicate).unwrap_err().info().code,
            "duplicate-element"
        );
    }

    #[test]
    fn adler_form_picks_positive_leaders() {
        let part = Partition::new(vec![vec![-3, 1], vec![-1, 3], vec![2, 0, -2], vec![-4], vec![4]]);
        let adler = adler_form(&part).unwrap();
        assert_eq!(
            adler,
            Partition::new(vec![vec![0, 2], vec![1, -3], vec![4]])
        );
    }
}
