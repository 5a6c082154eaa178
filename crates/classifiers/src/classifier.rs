//! The capability set shared by all classifiers.

use std::fmt;
use std::path::Path;

use basilisk_dataset::{DataSet, SplitConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::ModelConfig;
use crate::error::ClassifierError;
use crate::result::TestResults;

/// Classifier variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassifierKind {
    /// [`KnnClassifier`](crate::KnnClassifier).
    #[serde(rename = "KNearestNeighbors Classifier")]
    KNearestNeighbors,
    /// [`NaiveBayesClassifier`](crate::NaiveBayesClassifier).
    #[serde(rename = "Naive Bayes Classifier")]
    NaiveBayes,
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KNearestNeighbors => f.write_str("KNearestNeighbors Classifier"),
            Self::NaiveBayes => f.write_str("Naive Bayes Classifier"),
        }
    }
}

/// A supervised classifier that trains on one split of a dataset and
/// reports predictions for the other.
///
/// # Concurrency
///
/// Implementations hold their training state without internal locking.
/// Training and testing take `&mut self`; callers sharing one instance
/// across threads must serialise access themselves (e.g. behind a `Mutex`).
pub trait Classifier {
    /// Stores `dataset` as the raw data and trains on a fresh split of it.
    fn train_from_dataset(
        &mut self,
        dataset: DataSet,
        config: &SplitConfig,
    ) -> Result<(), ClassifierError>;

    /// Re-splits the stored raw data and trains again, discarding all
    /// previously fitted state.
    fn retrain(&mut self, config: &SplitConfig) -> Result<(), ClassifierError>;

    /// Classifies every record of the testing set.
    fn test(&mut self) -> Result<TestResults, ClassifierError>;

    /// Returns the classifier variant.
    fn kind(&self) -> ClassifierKind;

    /// Returns the current `(training, testing)` datasets, if trained.
    fn data(&self) -> (Option<&DataSet>, Option<&DataSet>);

    /// Returns the classifier configuration.
    fn config(&self) -> ModelConfig;

    /// Decodes a JSON dataset and trains on it.
    fn train_from_json(&mut self, bytes: &[u8], config: &SplitConfig) -> Result<(), ClassifierError> {
        let dataset = DataSet::from_json(bytes)?;
        self.train_from_dataset(dataset, config)
    }

    /// Reads a JSON dataset file and trains on it.
    fn train_from_json_file(
        &mut self,
        path: &Path,
        config: &SplitConfig,
    ) -> Result<(), ClassifierError> {
        let dataset = DataSet::from_json_file(path)?;
        self.train_from_dataset(dataset, config)
    }

    /// Decodes a CSV dataset and trains on it.
    fn train_from_csv(&mut self, bytes: &[u8], config: &SplitConfig) -> Result<(), ClassifierError> {
        let dataset = DataSet::from_csv(bytes)?;
        self.train_from_dataset(dataset, config)
    }

    /// Reads a CSV dataset file and trains on it.
    fn train_from_csv_file(
        &mut self,
        path: &Path,
        config: &SplitConfig,
    ) -> Result<(), ClassifierError> {
        let dataset = DataSet::from_csv_file(path)?;
        self.train_from_dataset(dataset, config)
    }
}

/// Raw, training and testing datasets plus the RNG used for random splits.
#[derive(Debug, Clone)]
pub(crate) struct DataPartitions {
    pub(crate) raw: Option<DataSet>,
    pub(crate) training: Option<DataSet>,
    pub(crate) testing: Option<DataSet>,
    rng: StdRng,
}

impl DataPartitions {
    pub(crate) fn new() -> Self {
        Self {
            raw: None,
            training: None,
            testing: None,
            rng: StdRng::from_os_rng(),
        }
    }

    pub(crate) fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Splits the raw data, replacing the training and testing sets.
    ///
    /// On failure the training and testing sets are cleared, so a model that
    /// failed to retrain cannot be tested against stale data.
    pub(crate) fn resplit(&mut self, config: &SplitConfig) -> Result<(), ClassifierError> {
        self.training = None;
        self.testing = None;
        let raw = self.raw.as_ref().ok_or(ClassifierError::MissingRawData)?;
        let (training, testing) = raw.split_with_rng(config, &mut self.rng)?;
        self.training = Some(training);
        self.testing = Some(testing);
        Ok(())
    }

    /// Returns the training and testing sets, or `Untrained`.
    pub(crate) fn trained(&self) -> Result<(&DataSet, &DataSet), ClassifierError> {
        match (&self.training, &self.testing) {
            (Some(training), Some(testing)) => Ok((training, testing)),
            _ => Err(ClassifierError::Untrained),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basilisk_dataset::{Record, SplitMethod};

    fn dataset() -> DataSet {
        DataSet::new(
            vec!["a".into()],
            vec!["x".into()],
            (0..4).map(|i| Record::new(0, vec![i as f64])).collect(),
        )
        .unwrap()
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(
            ClassifierKind::KNearestNeighbors.to_string(),
            "KNearestNeighbors Classifier"
        );
        assert_eq!(ClassifierKind::NaiveBayes.to_string(), "Naive Bayes Classifier");
    }

    #[test]
    fn partitions_untrained_until_split() {
        let mut p = DataPartitions::new();
        assert!(matches!(p.trained(), Err(ClassifierError::Untrained)));
        assert!(matches!(
            p.resplit(&SplitConfig::default()),
            Err(ClassifierError::MissingRawData)
        ));

        p.raw = Some(dataset());
        let cfg = SplitConfig::new().with_method(SplitMethod::Sequential);
        p.resplit(&cfg).unwrap();
        let (training, testing) = p.trained().unwrap();
        assert_eq!(training.len(), 3);
        assert_eq!(testing.len(), 1);
    }

    #[test]
    fn failed_resplit_clears_partitions() {
        let mut p = DataPartitions::new();
        p.raw = Some(dataset());
        p.resplit(&SplitConfig::default()).unwrap();
        let bad = SplitConfig::new().with_training_share(3.0);
        assert!(matches!(p.resplit(&bad), Err(ClassifierError::Data(_))));
        assert!(matches!(p.trained(), Err(ClassifierError::Untrained)));
    }
}
