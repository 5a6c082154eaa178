//! Discretized naive Bayes classification.
//!
//! Training runs in four stages over the training set:
//!
//! 1. class priors `P(class)`;
//! 2. equal-width intervals per attribute;
//! 3. per-attribute posteriors `P(attribute in interval | class)`;
//! 4. joint posteriors over every combination of intervals, combined with
//!    the priors through Bayes' rule into `P(class | combination)`.
//!
//! The joint table has `intervals ^ n_attributes` rows. That is a hard
//! ceiling of the method: with the default 10 intervals, a handful of
//! attributes already needs millions of rows. Training refuses tables
//! above [`NaiveBayesConfig::max_combinations`] rather than allocating them.

use basilisk_dataset::{DataSet, Record, SplitConfig};
use basilisk_probability::{DiscretizationConfig, Intervals, bayes, discretize, mass_discrete};
use tracing::{debug, info};

use crate::classifier::{Classifier, ClassifierKind, DataPartitions};
use crate::config::{ModelConfig, NaiveBayesConfig};
use crate::error::ClassifierError;
use crate::result::{TestResult, TestResults};

/// Prior probability of every declared class among `records`.
///
/// Classes absent from `records` get `0.0`; an empty sample gives all zeros.
pub fn compute_class_priors(n_classes: usize, records: &[Record]) -> Vec<f64> {
    let classes: Vec<usize> = records.iter().map(|r| r.class).collect();
    let pmf = mass_discrete(&classes);
    (0..n_classes).map(|c| pmf.mass(c)).collect()
}

/// Discretizes each of the first `n_attributes` attributes over its observed
/// range in `records`.
///
/// Records too short to carry an attribute are skipped for that attribute.
pub fn discretize_attributes(
    n_attributes: usize,
    records: &[Record],
    config: &DiscretizationConfig,
) -> Result<Vec<Intervals>, ClassifierError> {
    (0..n_attributes)
        .map(|a| {
            let values: Vec<f64> = records.iter().filter_map(|r| r.value(a)).collect();
            discretize(&values, config).map_err(ClassifierError::from)
        })
        .collect()
}

/// Per-class, per-attribute interval probabilities.
///
/// Returns `posterior[class][attribute][interval]`, the share of the class's
/// records whose attribute value falls in that interval. Missing and NaN
/// values are left out of the share.
pub fn class_attribute_posteriors(
    n_classes: usize,
    records: &[Record],
    attribute_intervals: &[Intervals],
) -> Vec<Vec<Vec<f64>>> {
    (0..n_classes)
        .map(|class| {
            attribute_intervals
                .iter()
                .enumerate()
                .map(|(a, intervals)| {
                    let codes: Vec<usize> = records
                        .iter()
                        .filter(|r| r.class == class)
                        .filter_map(|r| r.value(a))
                        .filter_map(|v| intervals.interval_for_value(v))
                        .collect();
                    let pmf = mass_discrete(&codes);
                    (0..intervals.len()).map(|j| pmf.mass(j)).collect()
                })
                .collect()
        })
        .collect()
}

/// Returns `intervals ^ attributes`.
///
/// # Errors
///
/// Returns [`ClassifierError::TooManyCombinations`] when the count
/// overflows or exceeds `limit`.
pub fn combination_count(
    intervals: usize,
    attributes: usize,
    limit: usize,
) -> Result<usize, ClassifierError> {
    u32::try_from(attributes)
        .ok()
        .and_then(|exp| intervals.checked_pow(exp))
        .filter(|&count| count <= limit)
        .ok_or(ClassifierError::TooManyCombinations {
            intervals,
            attributes,
            limit,
        })
}

/// Joint class-conditioned posteriors under the independence assumption.
///
/// `posteriors` is the output of [`class_attribute_posteriors`] and every
/// attribute must have `intervals` buckets. Returns `joint[class][combination]`
/// where the combination index is read as a base-`intervals` number with
/// attribute 0 as the most significant digit.
///
/// # Errors
///
/// Returns [`ClassifierError::TooManyCombinations`] when the table would
/// have more than `limit` rows. Nothing is allocated in that case.
pub fn class_conditioned_posteriors(
    posteriors: &[Vec<Vec<f64>>],
    intervals: usize,
    limit: usize,
) -> Result<Vec<Vec<f64>>, ClassifierError> {
    let n_attributes = posteriors.first().map_or(0, Vec::len);
    let combinations = combination_count(intervals, n_attributes, limit)?;
    combinations
        .checked_mul(posteriors.len())
        .ok_or(ClassifierError::TooManyCombinations {
            intervals,
            attributes: n_attributes,
            limit,
        })?;

    let table = posteriors
        .iter()
        .map(|by_attribute| {
            (0..combinations)
                .map(|combination| {
                    let mut rest = combination;
                    let mut product = 1.0;
                    for attribute in by_attribute.iter().rev() {
                        product *= attribute.get(rest % intervals).copied().unwrap_or(0.0);
                        rest /= intervals;
                    }
                    product
                })
                .collect()
        })
        .collect();
    Ok(table)
}

/// Applies Bayes' rule to every combination.
///
/// Returns `probabilities[combination][class] = P(class | combination)`.
/// Combinations no class can produce have zero evidence and get all-zero rows.
pub fn vector_conditioned_class_probabilities(
    joint: &[Vec<f64>],
    priors: &[f64],
) -> Vec<Vec<f64>> {
    let combinations = joint.first().map_or(0, Vec::len);
    (0..combinations)
        .map(|i| {
            let evidence: f64 = joint
                .iter()
                .zip(priors)
                .map(|(by_combination, prior)| by_combination[i] * prior)
                .sum();
            joint
                .iter()
                .zip(priors)
                .map(|(by_combination, &prior)| bayes(prior, by_combination[i], evidence))
                .collect()
        })
        .collect()
}

/// Maps a record to its row of the joint table.
///
/// Values outside the training range clamp to the edge interval; missing
/// and NaN values map to interval 0.
pub fn combination_index(record: &Record, attribute_intervals: &[Intervals]) -> usize {
    attribute_intervals
        .iter()
        .enumerate()
        .fold(0, |index, (a, intervals)| {
            let digit = intervals.nearest_interval(record.value(a).unwrap_or(f64::NAN));
            index * intervals.len() + digit
        })
}

/// State fitted by a naive Bayes training run.
#[derive(Debug, Clone, PartialEq)]
pub struct BayesModel {
    class_priors: Vec<f64>,
    attribute_intervals: Vec<Intervals>,
    class_attribute_posteriors: Vec<Vec<Vec<f64>>>,
    vector_conditioned_class_probabilities: Vec<Vec<f64>>,
}

impl BayesModel {
    /// Fits all tables from `training`.
    #[tracing::instrument(skip_all, fields(records = training.len(), intervals = config.intervals()))]
    pub fn fit(training: &DataSet, config: &NaiveBayesConfig) -> Result<Self, ClassifierError> {
        let n_classes = training.class_names().len();
        let n_attributes = training.attribute_names().len();
        let records = training.records();
        combination_count(config.intervals(), n_attributes, config.max_combinations())?;

        let class_priors = compute_class_priors(n_classes, records);
        debug!(priors = ?class_priors, "class priors");
        let attribute_intervals = discretize_attributes(
            n_attributes,
            records,
            &DiscretizationConfig::new(config.intervals()),
        )?;
        for (a, intervals) in attribute_intervals.iter().enumerate() {
            debug!(
                attribute = a,
                min = ?intervals.min(),
                max = ?intervals.max(),
                "attribute discretized"
            );
        }
        let posteriors = class_attribute_posteriors(n_classes, records, &attribute_intervals);
        let joint =
            class_conditioned_posteriors(&posteriors, config.intervals(), config.max_combinations())?;
        debug!(
            classes = n_classes,
            attributes = n_attributes,
            combinations = joint.first().map_or(0, Vec::len),
            "joint posteriors computed"
        );
        let vector_conditioned_class_probabilities =
            vector_conditioned_class_probabilities(&joint, &class_priors);

        Ok(Self {
            class_priors,
            attribute_intervals,
            class_attribute_posteriors: posteriors,
            vector_conditioned_class_probabilities,
        })
    }

    /// `P(class)` for every declared class.
    pub fn class_priors(&self) -> &[f64] {
        &self.class_priors
    }

    /// Intervals per attribute.
    pub fn attribute_intervals(&self) -> &[Intervals] {
        &self.attribute_intervals
    }

    /// `posterior[class][attribute][interval]`.
    pub fn class_attribute_posteriors(&self) -> &[Vec<Vec<f64>>] {
        &self.class_attribute_posteriors
    }

    /// `probabilities[combination][class]`.
    pub fn vector_conditioned_class_probabilities(&self) -> &[Vec<f64>] {
        &self.vector_conditioned_class_probabilities
    }

    /// Predicts the class of `record` and its posterior probability.
    ///
    /// Ties go to the lowest class index. A combination never seen in
    /// training has an all-zero row; the class with the largest prior is
    /// predicted then, with probability `0.0`.
    pub fn classify(&self, record: &Record) -> (usize, f64) {
        let index = combination_index(record, &self.attribute_intervals);
        let row = self
            .vector_conditioned_class_probabilities
            .get(index)
            .map_or(&[][..], Vec::as_slice);
        let (class, p) = argmax(row);
        if p > 0.0 {
            (class, p)
        } else {
            (argmax(&self.class_priors).0, 0.0)
        }
    }
}

/// Index and value of the largest entry; the first one wins ties.
fn argmax(values: &[f64]) -> (usize, f64) {
    values
        .iter()
        .enumerate()
        .fold((0, 0.0), |(best, best_p), (i, &p)| {
            if p > best_p { (i, p) } else { (best, best_p) }
        })
}

/// Naive Bayes classifier over equal-width attribute intervals.
///
/// # Concurrency
///
/// No internal locking. See [`Classifier`].
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    config: NaiveBayesConfig,
    data: DataPartitions,
    model: Option<BayesModel>,
    results: Option<TestResults>,
}

impl NaiveBayesClassifier {
    /// Creates a classifier with 10 intervals per attribute.
    pub fn new() -> Self {
        Self {
            config: NaiveBayesConfig::new(),
            data: DataPartitions::new(),
            model: None,
            results: None,
        }
    }

    /// Creates a classifier from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidIntervalCount`] for zero intervals.
    pub fn with_config(config: NaiveBayesConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Seeds the RNG used for random splits.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.data.reseed(seed);
        self
    }

    /// Returns the fitted tables, if trained.
    pub fn model(&self) -> Option<&BayesModel> {
        self.model.as_ref()
    }

    /// Returns the results of the most recent [`test`](Classifier::test).
    pub fn results(&self) -> Option<&TestResults> {
        self.results.as_ref()
    }

    fn train(&mut self, config: &SplitConfig) -> Result<(), ClassifierError> {
        self.model = None;
        self.results = None;
        self.data.resplit(config)?;
        let (training, testing) = self.data.trained()?;
        let model = BayesModel::fit(training, &self.config)?;
        info!(
            training = training.len(),
            testing = testing.len(),
            "naive bayes classifier trained"
        );
        self.model = Some(model);
        Ok(())
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for NaiveBayesClassifier {
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
        let (_, testing) = self.data.trained()?;
        let model = self.model.as_ref().ok_or(ClassifierError::Untrained)?;
        let results: TestResults = testing
            .records()
            .iter()
            .map(|record| {
                let (predicted_class, predicted_probability) = model.classify(record);
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
        ClassifierKind::NaiveBayes
    }

    fn data(&self) -> (Option<&DataSet>, Option<&DataSet>) {
        (self.data.training.as_ref(), self.data.testing.as_ref())
    }

    fn config(&self) -> ModelConfig {
        ModelConfig::NaiveBayes(self.config)
    }
}
