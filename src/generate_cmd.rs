//! Generate command: synthesize a labeled dataset file.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use basilisk_dsgen::{DatasetConfig, generate_dataset};

use crate::cli::GenerateArgs;
use crate::convert;

/// Run dataset generation.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let format = convert::resolve_format(&args.output, args.format.map(Into::into))?;
    let config = DatasetConfig::from_file(&args.config)
        .with_context(|| format!("failed to load generator config: {}", args.config.display()))?;

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let dataset = generate_dataset(&config, &mut rng).context("dataset generation failed")?;
    dataset
        .write_to(&args.output, format)
        .with_context(|| format!("failed to write dataset: {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        records = dataset.len(),
        classes = dataset.class_names().len(),
        "dataset written"
    );
    Ok(())
}
