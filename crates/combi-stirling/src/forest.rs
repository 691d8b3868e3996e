use std::collections::HashSet;

use combi_core::{CombiError, ErrorInfo, ForestEdge, StirlingPermutation};

/// Edges of the forest induced by reading `perm` as nested intervals.
///
/// The first copy of a value opens it under the innermost open value (or the
/// root marker), the second copy closes it.
pub fn tree_from_stirling_permutation(
    perm: &StirlingPermutation,
) -> Result<Vec<ForestEdge>, CombiError> {
    let mut open: Vec<u64> = Vec::new();
    let mut seen = HashSet::new();
    let mut edges = Vec::with_capacity(perm.order());

    for (pos, &value) in perm.as_slice().iter().enumerate() {
        if seen.insert(value) {
            edges.push(ForestEdge {
                parent: open.last().copied(),
                child: value,
            });
            open.push(value);
            continue;
        }
        match open.pop() {
            Some(top) if top == value => {}
            top => {
                return Err(CombiError::Structure(
                    ErrorInfo::new("crossing-interval", "value closes out of nesting order")
                        .with_context("position", pos.to_string())
                        .with_context("value", value.to_string())
                        .with_context("innermost", format!("{top:?}")),
                ))
            }
        }
    }

    if let Some(&unclosed) = open.last() {
        return Err(CombiError::Structure(
            ErrorInfo::new("unclosed-value", "value occurs only once")
                .with_context("value", unclosed.to_string()),
        ));
    }
    Ok(edges)
}

/// Number of positions `i` with `perm[i] == perm[i + 1]`; these plateaus are
/// the leaves of the induced forest.
pub fn count_repeated_adjacent(perm: &StirlingPermutation) -> usize {
    perm.as_slice()
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_word_builds_forest() {
        let perm = StirlingPermutation::new(vec![1, 2, 2, 1, 3, 3]);
        let edges = tree_from_stirling_permutation(&perm).unwrap();
        assert_eq!(
            edges,
            vec![
                ForestEdge { parent: None, child: 1 },
                ForestEdge { parent: Some(1), child: 2 },
                ForestEdge { parent: None, child: 3 },
            ]
        );
        assert_eq!(count_repeated_adjacent(&perm), 2);
    }

    #[test]
    fn crossing_word_is_rejected() {
        let perm = StirlingPermutation::new(vec![1, 2, 1, 2]);
        let err = tree_from_stirling_permutation(&perm).unwrap_err();
        assert_eq!(err.info().code, "crossing-interval");

        let open = StirlingPermutation::new(vec![1, 2, 2]);
        let err = tree_from_stirling_permutation(&open).unwrap_err();
        assert_eq!(err.info().code, "unclosed-value");
    }
}
