use std::fs;
use std::path::Path;

use clap::ValueEnum;
use combi_core::{CombiError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Family of objects produced by `combi enumerate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Ordinary set partitions.
    #[default]
    TypeA,
    /// Compressed signed partitions.
    TypeB,
    /// Signed partitions with every block next to its opposite.
    TypeBComplete,
    /// Stirling permutations.
    Stirling,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::TypeA => "type-A partitions",
            Kind::TypeB => "type-B partitions",
            Kind::TypeBComplete => "complete type-B partitions",
            Kind::Stirling => "Stirling permutations",
        }
    }
}

/// YAML-configurable parameters for an enumeration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerateConfig {
    /// Size of the base set.
    #[serde(default)]
    pub n: usize,
    /// Object family to generate.
    #[serde(default)]
    pub kind: Kind,
    /// Include 0 in the base set (zero block for type B).
    #[serde(default)]
    pub with_zero: bool,
    /// Number of leading objects to print.
    #[serde(default = "default_preview")]
    pub head: usize,
    /// Number of trailing objects to print.
    #[serde(default = "default_preview")]
    pub tail: usize,
    /// Refuse to generate more objects than this.
    #[serde(default = "default_max_count")]
    pub max_count: u64,
}

fn default_preview() -> usize {
    3
}

fn default_max_count() -> u64 {
    2_000_000
}

impl Default for EnumerateConfig {
    fn default() -> Self {
        Self {
            n: 0,
            kind: Kind::default(),
            with_zero: false,
            head: default_preview(),
            tail: default_preview(),
            max_count: default_max_count(),
        }
    }
}

impl EnumerateConfig {
    /// Reads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, CombiError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            CombiError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_yaml::from_str(&raw).map_err(|err| {
            CombiError::Config(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
