//! k-nearest-neighbors classification.

use basilisk_dataset::{DataSet, Record, SplitConfig};
use basilisk_probability::mass_discrete;
use tracing::{debug, info};

use crate::classifier::{Classifier, ClassifierKind, DataPartitions};
use crate::config::{KnnConfig, ModelConfig};
use crate::distance::DistanceMethod;
use crate::error::ClassifierError;
use crate::result::{TestResult, TestResults};

/// A training record's class and its distance from a query record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Class of the training record.
    pub class: usize,
    /// Distance from the query record.
    pub distance: f64,
}

/// Ranks every training record by distance from `query`, nearest first.
///
/// The sort is stable, so records at equal distance keep their training-set
/// order.
pub fn compute_neighbors(
    query: &Record,
    training: &[Record],
    method: DistanceMethod,
) -> Vec<Neighbor> {
    let mut neighbors: Vec<Neighbor> = training
        .iter()
        .map(|r| Neighbor {
            class: r.class,
            distance: method.distance(&query.values, &r.values),
        })
        .collect();
    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    neighbors
}

/// Majority vote over `voters`.
///
/// Returns the class with the largest share of votes among `0..n_classes`
/// and that share. Ties go to the lowest class index.
fn vote(voters: &[Neighbor], n_classes: usize) -> (usize, f64) {
    let classes: Vec<usize> = voters.iter().map(|n| n.class).collect();
    let pmf = mass_discrete(&classes);
    (0..n_classes).fold((0, 0.0), |(best, best_p), class| {
        let p = pmf.mass(class);
        if p > best_p { (class, p) } else { (best, best_p) }
    })
}

/// k-nearest-neighbors classifier.
///
/// Training only splits the raw data; all work happens in
/// [`test`](Classifier::test), where each testing record is assigned the
/// majority class of its `k` nearest training records. When `k` exceeds
/// the training set size, all training records vote.
///
/// # Example
///
/// ```
/// use basilisk_classifiers::{Classifier, KnnClassifier};
/// use basilisk_dataset::{DataSet, Record, SplitConfig, SplitMethod};
///
/// let records = (0..8)
///     .map(|i| Record::new(i % 2, vec![(i % 2) as f64 * 10.0]))
///     .collect();
/// let ds = DataSet::new(vec!["low".into(), "high".into()], vec!["x".into()], records).unwrap();
///
/// let mut knn = KnnClassifier::new(1, "euclidean").unwrap();
/// knn.train_from_dataset(ds, &SplitConfig::new().with_method(SplitMethod::Sequential))
///     .unwrap();
/// let results = knn.test().unwrap();
/// assert_eq!(results.analyze().accuracy, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    config: KnnConfig,
    data: DataPartitions,
    results: Option<TestResults>,
}

impl KnnClassifier {
    /// Creates a classifier voting over `k` neighbors.
    ///
    /// `distance_method` is resolved with [`DistanceMethod::from_name`], so
    /// unknown names select Euclidean distance.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidK`] if `k == 0`.
    pub fn new(k: usize, distance_method: &str) -> Result<Self, ClassifierError> {
        Self::with_config(KnnConfig::new(k).with_distance(DistanceMethod::from_name(distance_method)))
    }

    /// Creates a classifier from a full configuration.
    pub fn with_config(config: KnnConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        Ok(Self {
            config,
            data: DataPartitions::new(),
            results: None,
        })
    }

    /// Seeds the RNG used for random splits, making them reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.data.reseed(seed);
        self
    }

    /// Returns the configured k.
    pub fn k(&self) -> usize {
        self.config.k()
    }

    /// Returns the configured distance metric.
    pub fn distance_method(&self) -> DistanceMethod {
        self.config.distance_method()
    }

    /// Returns the dataset the classifier was last trained from.
    pub fn raw_data(&self) -> Option<&DataSet> {
        self.data.raw.as_ref()
    }

    /// Returns the results of the most recent [`test`](Classifier::test).
    pub fn results(&self) -> Option<&TestResults> {
        self.results.as_ref()
    }

    fn train(&mut self, config: &SplitConfig) -> Result<(), ClassifierError> {
        self.results = None;
        self.data.resplit(config)?;
        if let Ok((training, testing)) = self.data.trained() {
            info!(
                k = self.config.k(),
                training = training.len(),
                testing = testing.len(),
                "knn classifier trained"
            );
        }
        Ok(())
    }
}

impl Classifier for KnnClassifier {
    fn train_from_dataset(
        &mut self,
        dataset: DataSet,
        config: &SplitConfig,
    ) -> Result<(), ClassifierError> {
        self.data.raw = Some(dataset);
        self.train(config)
    }

    fn retrain(&mut self, config: &SplitConfig) -> Result<(), ClassifierError> {
        self.train(config)
    }

    fn test(&mut self) -> Result<TestResults, ClassifierError> {
        let (training, testing) = self.data.trained()?;
        if training.is_empty() && !testing.is_empty() {
            return Err(ClassifierError::EmptyTrainingData {
                testing: testing.len(),
            });
        }

        let k_eff = self.config.k().min(training.len());
        if k_eff < self.config.k() {
            debug!(
                k = self.config.k(),
                k_eff,
                "k exceeds training set size, all training records vote"
            );
        }

        let n_classes = training.class_names().len();
        let method = self.config.distance_method();
        let results: TestResults = testing
            .records()
            .iter()
            .map(|record| {
                let neighbors = compute_neighbors(record, training.records(), method);
                let (predicted_class, predicted_probability) =
                    vote(&neighbors[..k_eff], n_classes);
                TestResult {
                    record: record.clone(),
                    predicted_class,
                    predicted_probability,
                }
            })
            .collect::<Vec<_>>()
            .into();

        self.results = Some(results.clone());
        Ok(results)
    }

    fn kind(&self) -> ClassifierKind {
        ClassifierKind::KNearestNeighbors
    }

    fn data(&self) -> (Option<&DataSet>, Option<&DataSet>) {
        (self.data.training.as_ref(), self.data.testing.as_ref())
    }

    fn config(&self) -> ModelConfig {
        ModelConfig::Knn(self.config)
    }
}
