use combi_core::{Block, CombiError, ErrorInfo, Partition, StirlingPermutation};
use combi_part::adler_form;

fn magnitude(x: i64) -> u64 {
    x.unsigned_abs()
}

/// One block per opposite pair, 0 dropped, blocks ordered by their smallest
/// magnitude and elements sorted by magnitude. The magnitudes must be exactly
/// `1..=n`.
fn reduce(part: &Partition) -> Result<Vec<Block>, CombiError> {
    let adler = adler_form(part)?;
    let mut blocks: Vec<Block> = adler
        .into_blocks()
        .into_iter()
        .map(|block| block.into_iter().filter(|&x| x != 0).collect::<Block>())
        .filter(|block| !block.is_empty())
        .collect();
    blocks.sort_by_key(|block| block.first().map(|&x| magnitude(x)));

    let mut support: Vec<u64> = blocks.iter().flatten().map(|&x| magnitude(x)).collect();
    support.sort_unstable();
    let contiguous = support
        .iter()
        .enumerate()
        .all(|(idx, &value)| value == idx as u64 + 1);
    if !contiguous {
        return Err(CombiError::Structure(
            ErrorInfo::new(
                "non-contiguous-support",
                "absolute values must be exactly 1..=n",
            )
            .with_context("support", format!("{support:?}")),
        ));
    }
    Ok(blocks)
}

/// Pass 1: elements below `next_min` in magnitude, then barred (negative)
/// elements above it, then positive elements above it.
fn order_against(block: Block, next_min: Option<u64>) -> Block {
    let Some(m) = next_min else {
        return block;
    };
    let (small, large): (Block, Block) = block.into_iter().partition(|&x| magnitude(x) < m);
    let (barred, plain): (Block, Block) = large.into_iter().partition(|&x| x < 0);
    small.into_iter().chain(barred).chain(plain).collect()
}

/// Pass 3: barred elements of block `i` below the next minimum, and every
/// barred element of the last block, move to the first block right after its
/// leading run of 1s.
fn relocate_barred(blocks: &mut [Block], minima: &[u64]) {
    let last = blocks.len().saturating_sub(1);
    let mut moved = Vec::new();
    for (i, block) in blocks.iter_mut().enumerate() {
        let next_min = if i < last { minima.get(i + 1).copied() } else { None };
        let (go, stay): (Block, Block) = block
            .iter()
            .partition(|&&x| x < 0 && next_min.map_or(true, |m| magnitude(x) < m));
        moved.extend(go);
        *block = stay;
    }
    if let Some(first) = blocks.first_mut() {
        let ones = first.iter().take_while(|&&x| x == 1).count();
        let tail = first.split_off(ones);
        first.extend(moved);
        first.extend(tail);
    }
}

/// Pass 4: block `i` receives the next block's minimum right after its run of
/// barred elements above that minimum, or after its last smaller element when
/// no such run follows the smaller elements.
fn insert_next_minima(blocks: &mut [Block], minima: &[u64]) {
    for (i, block) in blocks.iter_mut().enumerate() {
        let Some(&m) = minima.get(i + 1) else {
            continue;
        };
        let last_small = block.iter().rposition(|&x| magnitude(x) < m);
        let barred_end = block
            .iter()
            .rposition(|&x| x < 0 && magnitude(x) > m)
            .filter(|&idx| last_small.map_or(true, |small| idx > small));
        let at = match (barred_end, last_small) {
            (Some(idx), _) => idx + 1,
            (None, Some(small)) => small + 1,
            (None, None) => 0,
        };
        block.insert(at, m as i64);
    }
}

/// Pass 5: own and next minima are written once, everything else twice, as
/// magnitudes.
fn flatten(blocks: &[Block], minima: &[u64]) -> Vec<u64> {
    let mut word = Vec::with_capacity(2 * minima.len());
    for (i, block) in blocks.iter().enumerate() {
        let own = minima[i];
        let next = minima.get(i + 1).copied();
        for &x in block {
            let value = magnitude(x);
            word.push(value);
            if value != own && Some(value) != next {
                word.push(value);
            }
        }
    }
    word
}

/// Maps a complete type-B partition to a Stirling permutation.
///
/// The partition is first reduced to one block per opposite pair (the zero
/// block contributes its positive half, 0 only marks it) ordered by smallest
/// magnitude, then rewritten in five passes: order each block against the
/// next block's minimum, prepend the anchor 1 to the first block, gather
/// small barred elements into the first block, insert each next minimum, and
/// flatten with doubling. Fails on anything [`combi_part::validate_type_b`]
/// rejects or when the magnitudes are not exactly `1..=n`.
///
/// Block order and the zero block are forgotten by the reduction, so the map
/// is far from injective. For `n = 0..=5` the complete partitions (with or
/// without a zero block) reach 1, 1, 1, 3, 12 and 60 distinct words out of
/// 1, 1, 3, 15, 105 and 945 Stirling permutations; at `n = 5` the 648
/// partitions with a zero block land on the same 60 words as the 257 without.
pub fn to_stirling_permutation(part: &Partition) -> Result<StirlingPermutation, CombiError> {
    let reduced = reduce(part)?;
    let minima: Vec<u64> = reduced
        .iter()
        .filter_map(|block| block.first().map(|&x| magnitude(x)))
        .collect();

    let mut blocks: Vec<Block> = reduced
        .into_iter()
        .enumerate()
        .map(|(i, block)| order_against(block, minima.get(i + 1).copied()))
        .collect();
    if let Some(first) = blocks.first_mut() {
        first.insert(0, 1);
    }
    relocate_barred(&mut blocks, &minima);
    insert_next_minima(&mut blocks, &minima);

    let perm = StirlingPermutation::new(flatten(&blocks, &minima));
    if !perm.is_valid() {
        log::warn!("partition {part} produced a malformed word {perm}");
        return Err(CombiError::Structure(
            ErrorInfo::new("malformed-word", "rewriting produced an invalid Stirling permutation")
                .with_context("partition", part.to_string())
                .with_context("word", perm.to_string()),
        ));
    }
    Ok(perm)
}
