//! Split command: partition a dataset file into training and test files.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use basilisk_dataset::{DataSet, Format, SplitConfig};

use crate::cli::SplitArgs;

/// Run the split.
pub fn run(args: SplitArgs) -> Result<()> {
    let _cmd = info_span!("split").entered();

    let format = Format::from_path(&args.data)?;
    let dataset = DataSet::read_from(&args.data, format)
        .with_context(|| format!("failed to read dataset: {}", args.data.display()))?;

    let config = SplitConfig::new()
        .with_training_share(args.training_share)
        .with_method(args.method);
    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let (training, test) = dataset.split_with_rng(&config, &mut rng)?;

    training
        .write_to(&args.training_out, format)
        .with_context(|| format!("failed to write {}", args.training_out.display()))?;
    test.write_to(&args.test_out, format)
        .with_context(|| format!("failed to write {}", args.test_out.display()))?;
    info!(
        training = training.len(),
        test = test.len(),
        method = %config.method(),
        "dataset split written"
    );
    Ok(())
}
