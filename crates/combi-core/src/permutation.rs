//! Stirling permutations and the forests they induce.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A word of length `2n` over `1..=n` in which every value occurs twice and
/// every value between the two copies of `v` is at least `v`.
///
/// Construction does not validate; [`StirlingPermutation::is_valid`] checks
/// the invariant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StirlingPermutation(Vec<u64>);

impl StirlingPermutation {
    /// Wraps a raw word.
    pub fn new(word: Vec<u64>) -> Self {
        Self(word)
    }

    /// Order `n` of the permutation (half its length).
    pub fn order(&self) -> usize {
        self.0.len() / 2
    }

    /// Length of the underlying word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the word is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying word.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Consumes the permutation and returns the word.
    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }

    /// Checks the length, multiplicity and nesting conditions.
    pub fn is_valid(&self) -> bool {
        let word = &self.0;
        if word.len() % 2 != 0 {
            return false;
        }
        let n = word.len() / 2;
        let mut first_seen: Vec<Option<usize>> = vec![None; n + 1];
        let mut closed = vec![false; n + 1];
        for (pos, &value) in word.iter().enumerate() {
            let Ok(slot) = usize::try_from(value) else {
                return false;
            };
            if slot == 0 || slot > n || closed[slot] {
                return false;
            }
            match first_seen[slot] {
                None => first_seen[slot] = Some(pos),
                Some(start) => {
                    if word[start + 1..pos].iter().any(|&inner| inner < value) {
                        return false;
                    }
                    closed[slot] = true;
                }
            }
        }
        closed.iter().skip(1).all(|&done| done)
    }
}

impl From<Vec<u64>> for StirlingPermutation {
    fn from(word: Vec<u64>) -> Self {
        Self(word)
    }
}

impl fmt::Display for StirlingPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// Parent/child edge in the forest induced by a Stirling permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ForestEdge {
    /// Enclosing value, or `None` when the child hangs off the root marker.
    pub parent: Option<u64>,
    /// Value opened by this edge.
    pub child: u64,
}
