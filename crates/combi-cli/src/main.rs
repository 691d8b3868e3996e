use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    classify::{self, ClassifyArgs},
    count::{self, CountArgs},
    enumerate::{self, EnumerateArgs},
};

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(name = "combi", about = "Set partition and Stirling permutation enumerator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print binomial, Stirling, Bell and Dowling numbers for one n.
    Count(CountArgs),
    /// Generate partitions or Stirling permutations and print a preview.
    Enumerate(EnumerateArgs),
    /// Evaluate every classifier on a single partition.
    Classify(ClassifyArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Count(args) => count::run(&args),
        Command::Enumerate(args) => enumerate::run(&args),
        Command::Classify(args) => classify::run(&args),
    }
}
