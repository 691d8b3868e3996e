#![deny(missing_docs)]
#![doc = "Generators for type-A set partitions, their type-B (signed) lifts and the \
subsets and orderings they are built from."]

/// Validation and Adler canonical form of type-B partitions.
pub mod canonical;
/// Memoized subset generation and plain permutations.
pub mod combinations;
/// Recursive type-A partition generator.
pub mod type_a;
/// Sign assignment and completion of type-B partitions.
pub mod type_b;

pub use canonical::{adler_form, is_type_b, validate_type_b, TypeBShape};
pub use combinations::{combinations, permutations, CombinationCache};
pub use type_a::{all_partitions, partitions_into_k_blocks, PartitionCache};
pub use type_b::{
    all_type_b_from_a, complete, lift_to_b, signable_indices, LiftEngine, LiftOpts,
};

use combi_core::{Element, Partition};

/// Base set `{1, …, n}`, or `{0, 1, …, n}` when `with_zero` is set.
pub fn base_set(n: usize, with_zero: bool) -> Vec<Element> {
    let start = if with_zero { 0 } else { 1 };
    (start..=n as Element).collect()
}

/// Every compressed type-B partition over `{±1..±n}`, plus the zero block
/// variants when `with_zero` is set.
pub fn type_b_partitions(n: usize, with_zero: bool, opts: &LiftOpts) -> Vec<Partition> {
    let type_a = all_partitions(&base_set(n, with_zero));
    LiftEngine::new().lift_all(&type_a, opts)
}
