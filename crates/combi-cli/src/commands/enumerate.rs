use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

use clap::Args;
use combi_core::{CombiError, ErrorInfo, Partition, StirlingPermutation};
use combi_count::{double_factorial_odd, BigUint, CountCache};
use combi_part::{all_partitions, base_set, type_b_partitions, LiftOpts};
use combi_stirling::stirling_permutations;

use crate::config::{EnumerateConfig, Kind};

#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// Optional YAML configuration; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Size of the base set.
    #[arg(long)]
    pub n: Option<usize>,
    /// Object family to generate.
    #[arg(long, value_enum)]
    pub kind: Option<Kind>,
    /// Include 0 in the base set.
    #[arg(long)]
    pub with_zero: bool,
    /// Number of leading objects to print.
    #[arg(long)]
    pub head: Option<usize>,
    /// Number of trailing objects to print.
    #[arg(long)]
    pub tail: Option<usize>,
    /// Refuse to generate more objects than this.
    #[arg(long)]
    pub max_count: Option<u64>,
    /// Print every object as a JSON array instead of a preview.
    #[arg(long)]
    pub json: bool,
}

enum Listing {
    Partitions(Vec<Partition>),
    Permutations(Vec<StirlingPermutation>),
}

impl Listing {
    fn len(&self) -> usize {
        match self {
            Listing::Partitions(parts) => parts.len(),
            Listing::Permutations(perms) => perms.len(),
        }
    }

    fn rendered(&self) -> Vec<String> {
        fn render<T: Display>(items: &[T]) -> Vec<String> {
            items.iter().map(ToString::to_string).collect()
        }
        match self {
            Listing::Partitions(parts) => render(parts),
            Listing::Permutations(perms) => render(perms),
        }
    }

    fn to_json(&self) -> Result<String, CombiError> {
        let encoded = match self {
            Listing::Partitions(parts) => serde_json::to_string(parts),
            Listing::Permutations(perms) => serde_json::to_string(perms),
        };
        encoded.map_err(|err| CombiError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
    }
}

pub fn run(args: &EnumerateArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve(args)?;
    let listing = enumerate(&config)?;
    if args.json {
        println!("{}", listing.to_json()?);
    } else {
        for line in preview(&config, &listing) {
            println!("{line}");
        }
    }
    Ok(())
}

fn resolve(args: &EnumerateArgs) -> Result<EnumerateConfig, CombiError> {
    let mut config = match &args.config {
        Some(path) => EnumerateConfig::load(path)?,
        None => EnumerateConfig::default(),
    };
    if let Some(n) = args.n {
        config.n = n;
    }
    if let Some(kind) = args.kind {
        config.kind = kind;
    }
    if args.with_zero {
        config.with_zero = true;
    }
    if let Some(head) = args.head {
        config.head = head;
    }
    if let Some(tail) = args.tail {
        config.tail = tail;
    }
    if let Some(max_count) = args.max_count {
        config.max_count = max_count;
    }
    Ok(config)
}

fn base_len(config: &EnumerateConfig) -> usize {
    match config.kind {
        Kind::Stirling => config.n,
        _ => config.n + usize::from(config.with_zero),
    }
}

/// Cardinality predicted by the counting recurrences.
fn expected_count(config: &EnumerateConfig, cache: &mut CountCache) -> BigUint {
    let n = config.n as u64;
    match config.kind {
        Kind::TypeA => cache.bell(base_len(config) as u64),
        Kind::TypeB | Kind::TypeBComplete if config.with_zero => cache.dowling(n),
        Kind::TypeB | Kind::TypeBComplete => cache.dowling_no_zero_block(n),
        Kind::Stirling => double_factorial_odd(n),
    }
}

fn enumerate(config: &EnumerateConfig) -> Result<Listing, CombiError> {
    let mut cache = CountCache::new();
    let expected = expected_count(config, &mut cache);
    log::info!(
        "expecting {expected} {} for n={}",
        config.kind.label(),
        base_len(config)
    );
    if expected > BigUint::from(config.max_count) {
        return Err(CombiError::Limit(
            ErrorInfo::new("too-many-objects", "enumeration exceeds the configured bound")
                .with_context("expected", expected.to_string())
                .with_context("max_count", config.max_count.to_string())
                .with_hint("lower n or raise max_count"),
        ));
    }

    let listing = match config.kind {
        Kind::TypeA => Listing::Partitions(all_partitions(&base_set(config.n, config.with_zero))),
        Kind::TypeB => Listing::Partitions(type_b_partitions(
            config.n,
            config.with_zero,
            &LiftOpts { expand: false },
        )),
        Kind::TypeBComplete => Listing::Partitions(type_b_partitions(
            config.n,
            config.with_zero,
            &LiftOpts { expand: true },
        )),
        Kind::Stirling => Listing::Permutations(stirling_permutations(config.n as u64)),
    };
    if BigUint::from(listing.len()) != expected {
        log::warn!(
            "generated {} objects but the recurrences predict {expected}",
            listing.len()
        );
    }
    Ok(listing)
}

/// Count line followed by the first `head` and last `tail` objects.
fn preview(config: &EnumerateConfig, listing: &Listing) -> Vec<String> {
    let items = listing.rendered();
    let mut lines = vec![format!(
        "{} {} for n={}",
        items.len(),
        config.kind.label(),
        base_len(config)
    )];
    if items.len() <= config.head + config.tail {
        lines.extend(items);
        return lines;
    }
    lines.extend(items[..config.head].iter().cloned());
    lines.push("...".to_string());
    lines.extend(items[items.len() - config.tail..].iter().cloned());
    lines
}
