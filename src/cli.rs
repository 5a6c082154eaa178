use std::path::PathBuf;

use basilisk_dataset::{DEFAULT_TRAINING_SHARE, SplitMethod};
use clap::{Parser, Subcommand, ValueEnum};

/// Basilisk classification engine.
#[derive(Parser)]
#[command(
    name = "basilisk",
    version,
    about = "Train and evaluate k-nearest-neighbor and naive Bayes classifiers"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a synthetic dataset from a JSON class description.
    Generate(GenerateArgs),
    /// Train and test every configured model and report accuracy.
    Evaluate(EvaluateArgs),
    /// Split a dataset file into training and test files.
    Split(SplitArgs),
}

/// Dataset file encodings selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to the JSON generator configuration.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Path of the dataset file to write.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output encoding. Inferred from the output extension when omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// RNG seed for reproducible output.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "basilisk.toml")]
    pub config: PathBuf,

    /// Override the dataset path from config.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path for the JSON report. Printed to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `split` subcommand.
#[derive(clap::Args)]
pub struct SplitArgs {
    /// Dataset file to split (`.json` or `.csv`).
    #[arg(short, long)]
    pub data: PathBuf,

    /// Where to write the training partition.
    #[arg(long)]
    pub training_out: PathBuf,

    /// Where to write the test partition.
    #[arg(long)]
    pub test_out: PathBuf,

    /// Fraction of records placed in the training partition.
    #[arg(long, default_value_t = DEFAULT_TRAINING_SHARE)]
    pub training_share: f64,

    /// Partitioning method: `random` or `sequential`.
    #[arg(short, long, default_value = "random")]
    pub method: SplitMethod,

    /// RNG seed for reproducible random splits.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
