use std::collections::BTreeSet;

use combi_count::{bell, dowling, dowling_no_zero_block, stirling2, BigUint};
use combi_core::{Element, Partition};
use combi_part::{
    adler_form, all_partitions, all_type_b_from_a, base_set, complete, is_type_b,
    partitions_into_k_blocks, type_b_partitions, LiftOpts, PartitionCache,
};

fn big(len: usize) -> BigUint {
    BigUint::from(len)
}

fn covers_exactly(part: &Partition, seq: &[Element]) -> bool {
    let mut flat: Vec<Element> = part.elements().collect();
    flat.sort_unstable();
    let mut expected = seq.to_vec();
    expected.sort_unstable();
    flat == expected && part.blocks().iter().all(|block| !block.is_empty())
}

#[test]
fn k_block_counts_are_stirling_numbers() {
    let mut cache = PartitionCache::new();
    for n in 0..=7usize {
        let seq: Vec<Element> = (0..n as Element).collect();
        for k in 0..=n {
            let parts = cache.partitions_into_k_blocks(&seq, k);
            assert_eq!(big(parts.len()), stirling2(n as u64, k as u64), "n={n} k={k}");
            for part in parts.iter() {
                assert_eq!(part.len(), k);
                assert!(covers_exactly(part, &seq));
            }
        }
    }
}

#[test]
fn all_partitions_counts_are_bell_numbers_and_distinct() {
    for n in 0..=6usize {
        let seq: Vec<Element> = (10..10 + n as Element).collect();
        let parts = all_partitions(&seq);
        assert_eq!(big(parts.len()), bell(n as u64));
        let distinct: BTreeSet<Partition> = parts.iter().map(Partition::normalised).collect();
        assert_eq!(distinct.len(), parts.len());
    }
}

#[test]
fn generator_accepts_unsorted_labels() {
    let parts = partitions_into_k_blocks(&[7, -2, 4, 9], 2);
    assert_eq!(parts.len(), 7);
    for part in &parts {
        assert!(covers_exactly(part, &[7, -2, 4, 9]));
    }
}

#[test]
fn lifting_without_zero_counts_dowling_no_zero_block() {
    for n in 0..=6usize {
        let type_a = all_partitions(&base_set(n, false));
        let lifted = all_type_b_from_a(&type_a, false);
        assert_eq!(big(lifted.len()), dowling_no_zero_block(n as u64), "n={n}");
    }
}

#[test]
fn lifting_with_zero_counts_dowling() {
    for n in 0..=5usize {
        let lifted = type_b_partitions(n, true, &LiftOpts::default());
        assert_eq!(big(lifted.len()), dowling(n as u64), "n={n}");
    }
}

#[test]
fn empty_set_has_one_partition_of_each_type() {
    assert_eq!(all_partitions(&[]), vec![Partition::empty()]);
    let lifted = type_b_partitions(0, false, &LiftOpts { expand: true });
    assert_eq!(lifted, vec![Partition::empty()]);
}

#[test]
fn expanded_lifts_are_valid_and_distinct() {
    for with_zero in [false, true] {
        let expanded = type_b_partitions(4, with_zero, &LiftOpts { expand: true });
        let mut seen = BTreeSet::new();
        for part in &expanded {
            assert!(is_type_b(part), "{part}");
            assert!(seen.insert(part.normalised()), "duplicate {part}");
        }
    }
}

#[test]
fn adler_form_inverts_completion_up_to_order() {
    let compressed = type_b_partitions(4, true, &LiftOpts::default());
    for part in &compressed {
        let adler = adler_form(&complete(part)).unwrap();
        assert_eq!(adler.normalised(), part.normalised(), "{part}");
    }
}
