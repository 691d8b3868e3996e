use std::error::Error;

use clap::Args;
use combi_core::{CombiError, ErrorInfo, ForestEdge, Partition, StirlingPermutation};
use combi_part::is_type_b;
use combi_stat::PartitionStats;
use combi_stirling::{
    count_repeated_adjacent, to_stirling_permutation, tree_from_stirling_permutation,
};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Partition as nested JSON arrays, e.g. `[[1,-2],[-1,2]]`.
    #[arg(long)]
    pub partition: String,
    /// Also map the partition (complete type-B form) to a Stirling permutation.
    #[arg(long)]
    pub stirling: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    partition: Partition,
    complete_type_b: bool,
    stats: PartitionStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    stirling: Option<StirlingReport>,
}

#[derive(Debug, Serialize)]
struct StirlingReport {
    word: StirlingPermutation,
    forest: Vec<ForestEdge>,
    leaves: usize,
}

pub fn run(args: &ClassifyArgs) -> Result<(), Box<dyn Error>> {
    let report = build_report(&args.partition, args.stirling)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_report(raw: &str, with_stirling: bool) -> Result<ClassifyReport, CombiError> {
    let partition: Partition = serde_json::from_str(raw)
        .map_err(|err| CombiError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    let stirling = if with_stirling {
        let word = to_stirling_permutation(&partition)?;
        let forest = tree_from_stirling_permutation(&word)?;
        let leaves = count_repeated_adjacent(&word);
        Some(StirlingReport {
            word,
            forest,
            leaves,
        })
    } else {
        None
    };
    Ok(ClassifyReport {
        complete_type_b: is_type_b(&partition),
        stats: PartitionStats::of(&partition),
        partition,
        stirling,
    })
}
