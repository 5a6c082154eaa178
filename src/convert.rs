//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::Path;

use anyhow::{Result, bail};

use basilisk_classifiers::{
    BoxedClassifier, DistanceMethod, KnnClassifier, KnnConfig, NaiveBayesClassifier,
    NaiveBayesConfig,
};
use basilisk_dataset::{Format, SplitConfig, SplitMethod};

use crate::cli::FormatArg;
use crate::config::{DataToml, KnnToml, ModelToml, NaiveBayesToml, SplitToml};

/// Parses a dataset format name.
pub fn parse_format(s: &str) -> Result<Format> {
    match s.to_lowercase().as_str() {
        "json" => Ok(Format::Json),
        "csv" => Ok(Format::Csv),
        other => bail!("unknown dataset format: {other:?}"),
    }
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Csv => Format::Csv,
        }
    }
}

/// Resolves the format of `path`: the explicit choice if given, otherwise
/// the file extension.
pub fn resolve_format(path: &Path, explicit: Option<Format>) -> Result<Format> {
    match explicit {
        Some(format) => Ok(format),
        None => Ok(Format::from_path(path)?),
    }
}

/// Resolves the `[data]` section's format.
pub fn data_format(data: &DataToml, path: &Path) -> Result<Format> {
    let explicit = data.format.as_deref().map(parse_format).transpose()?;
    resolve_format(path, explicit)
}

/// Builds a validated [`SplitConfig`] from the TOML split configuration.
pub fn build_split_config(split: &SplitToml) -> Result<SplitConfig> {
    let method: SplitMethod = split.method.parse()?;
    let cfg = SplitConfig::new()
        .with_training_share(split.training_share)
        .with_method(method);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a classifier from one `[[models]]` entry.
///
/// When `seed` is set every model is seeded with it, so all models are
/// trained and tested on the same split.
pub fn build_model(model: &ModelToml, seed: Option<u64>) -> Result<BoxedClassifier> {
    match model {
        ModelToml::Knn(knn) => {
            let mut knn = KnnClassifier::with_config(knn_config(knn))?;
            if let Some(s) = seed {
                knn = knn.with_seed(s);
            }
            Ok(Box::new(knn))
        }
        ModelToml::NaiveBayes(nb) => {
            let mut nb = NaiveBayesClassifier::with_config(naive_bayes_config(nb))?;
            if let Some(s) = seed {
                nb = nb.with_seed(s);
            }
            Ok(Box::new(nb))
        }
    }
}

fn knn_config(knn: &KnnToml) -> KnnConfig {
    let cfg = KnnConfig::new(knn.k.unwrap_or(1));
    match knn.distance {
        Some(ref name) => cfg.with_distance(DistanceMethod::from_name(name)),
        None => cfg,
    }
}

fn naive_bayes_config(nb: &NaiveBayesToml) -> NaiveBayesConfig {
    let mut cfg = NaiveBayesConfig::new();
    if let Some(n) = nb.intervals {
        cfg = cfg.with_intervals(n);
    }
    if let Some(n) = nb.max_combinations {
        cfg = cfg.with_max_combinations(n);
    }
    cfg
}
