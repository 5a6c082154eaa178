//! Classifier configurations.

use basilisk_probability::DEFAULT_INTERVAL_COUNT;
use serde::Serialize;

use crate::distance::DistanceMethod;
use crate::error::ClassifierError;

/// Configuration for a [`KnnClassifier`](crate::KnnClassifier).
///
/// # Example
///
/// ```
/// use basilisk_classifiers::{DistanceMethod, KnnConfig};
///
/// let config = KnnConfig::new(5).with_distance(DistanceMethod::Manhattan);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnnConfig {
    /// Number of voting neighbors.
    k: usize,
    /// Metric used to rank neighbors.
    distance_method: DistanceMethod,
}

impl KnnConfig {
    /// Creates a configuration with the given k and Euclidean distance.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            distance_method: DistanceMethod::Euclidean,
        }
    }

    /// Sets the distance metric.
    pub fn with_distance(mut self, distance_method: DistanceMethod) -> Self {
        self.distance_method = distance_method;
        self
    }

    /// Returns the number of voting neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the distance metric.
    pub fn distance_method(&self) -> DistanceMethod {
        self.distance_method
    }

    /// Returns an error if k < 1.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.k < 1 {
            return Err(ClassifierError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Default ceiling on joint posterior rows: six attributes at 10 intervals.
pub const DEFAULT_MAX_COMBINATIONS: usize = 1_000_000;

/// Configuration for a [`NaiveBayesClassifier`](crate::NaiveBayesClassifier).
///
/// The joint posterior table has `intervals ^ n_attributes` rows, so the
/// interval count dominates memory use on wide datasets. Training fails
/// with [`ClassifierError::TooManyCombinations`] before allocating a table
/// larger than `max_combinations` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NaiveBayesConfig {
    /// Equal-width intervals per attribute.
    intervals: usize,
    /// Largest joint table, in rows, training may allocate.
    max_combinations: usize,
}

impl NaiveBayesConfig {
    /// Creates a configuration with the default 10 intervals per attribute.
    pub fn new() -> Self {
        Self {
            intervals: DEFAULT_INTERVAL_COUNT,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }

    /// Sets the number of intervals per attribute.
    pub fn with_intervals(mut self, intervals: usize) -> Self {
        self.intervals = intervals;
        self
    }

    /// Sets the largest joint table, in rows, training may allocate.
    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    /// Returns the number of intervals per attribute.
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Returns the joint table ceiling.
    pub fn max_combinations(&self) -> usize {
        self.max_combinations
    }

    /// Returns an error if the interval count or the table ceiling is zero.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.intervals < 1 {
            return Err(ClassifierError::InvalidIntervalCount {
                intervals: self.intervals,
            });
        }
        if self.max_combinations < 1 {
            return Err(ClassifierError::InvalidCombinationLimit {
                max_combinations: self.max_combinations,
            });
        }
        Ok(())
    }
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration of any classifier, as reported by
/// [`Classifier::config`](crate::Classifier::config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModelConfig {
    /// k-nearest-neighbors settings.
    Knn(KnnConfig),
    /// Naive Bayes settings.
    NaiveBayes(NaiveBayesConfig),
}
