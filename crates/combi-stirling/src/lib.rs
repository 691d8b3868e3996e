#![deny(missing_docs)]
#![doc = "Stirling permutations: direct generation, the forest each one induces, and \
the five-pass rewriting of complete type-B partitions into Stirling permutations."]

/// Five-pass map from complete type-B partitions.
pub mod bijection;
/// Induced forests and plateau counts.
pub mod forest;
/// Recursive generation by pair insertion.
pub mod generate;

pub use bijection::to_stirling_permutation;
pub use forest::{count_repeated_adjacent, tree_from_stirling_permutation};
pub use generate::stirling_permutations;
