use std::error::Error;

use clap::Args;
use combi_count::{CountCache, CountTable};
use serde_json::{json, Value};

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Size of the base set.
    #[arg(long)]
    pub n: u64,
}

pub fn run(args: &CountArgs) -> Result<(), Box<dyn Error>> {
    let mut cache = CountCache::new();
    let table = CountTable::compute(args.n, &mut cache);
    log::debug!("count table for n={} used {} memo entries", args.n, cache.len());
    println!("{}", serde_json::to_string_pretty(&table_json(&table))?);
    Ok(())
}

/// Big integers are rendered as decimal strings so no precision is lost.
fn table_json(table: &CountTable) -> Value {
    let row = |values: &[combi_count::BigUint]| -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    };
    json!({
        "n": table.n,
        "binomial": row(&table.binomial_row),
        "stirling2": row(&table.stirling_row),
        "bell": table.bell.to_string(),
        "dowling": table.dowling.to_string(),
        "dowling_no_zero_block": table.dowling_no_zero_block.to_string(),
        "stirling_permutations": table.stirling_permutations.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_renders_decimal_strings() {
        let mut cache = CountCache::new();
        let value = table_json(&CountTable::compute(3, &mut cache));
        assert_eq!(value["n"], 3);
        assert_eq!(value["stirling2"], json!(["0", "1", "3", "1"]));
        assert_eq!(value["bell"], "5");
        assert_eq!(value["dowling"], "24");
        assert_eq!(value["dowling_no_zero_block"], "11");
        assert_eq!(value["stirling_permutations"], "15");
    }
}
