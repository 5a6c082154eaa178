use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Basilisk configuration.
///
/// ```toml
/// seed = 42
///
/// [data]
/// path = "birds.csv"
///
/// [split]
/// training_share = 0.8
/// method = "random"
///
/// [[models]]
/// kind = "knn"
/// k = 5
/// distance = "manhattan"
///
/// [[models]]
/// kind = "naive-bayes"
/// intervals = 8
/// max_combinations = 100000000
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasiliskConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Dataset location.
    #[serde(default)]
    pub data: DataToml,

    /// Training/test partitioning.
    #[serde(default)]
    pub split: SplitToml,

    /// Models to train, in registry order.
    #[serde(default)]
    pub models: Vec<ModelToml>,
}

impl BasiliskConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    pub path: Option<PathBuf>,
    /// `json` or `csv`; inferred from the path extension when absent.
    pub format: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitToml {
    #[serde(default = "default_training_share")]
    pub training_share: f64,
    #[serde(default = "default_method")]
    pub method: String,
}

impl Default for SplitToml {
    fn default() -> Self {
        Self {
            training_share: default_training_share(),
            method: default_method(),
        }
    }
}

fn default_training_share() -> f64 {
    basilisk_dataset::DEFAULT_TRAINING_SHARE
}
fn default_method() -> String {
    "random".to_string()
}

/// One `[[models]]` entry, tagged by `kind`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModelToml {
    Knn(KnnToml),
    NaiveBayes(NaiveBayesToml),
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    pub k: Option<usize>,
    /// `euclidean` or `manhattan`.
    pub distance: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NaiveBayesToml {
    pub intervals: Option<usize>,
    /// Largest joint posterior table, in rows.
    pub max_combinations: Option<usize>,
}
