//! Error types for the basilisk-classifiers crate.

use basilisk_dataset::DataSetError;
use basilisk_probability::ProbabilityError;

/// Error type for all fallible operations in the basilisk-classifiers crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifierError {
    /// Returned when a KNN classifier is configured with k = 0.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when a naive Bayes classifier is configured with no intervals.
    #[error("interval count must be >= 1, got {intervals}")]
    InvalidIntervalCount {
        /// The invalid interval count.
        intervals: usize,
    },

    /// Returned when a naive Bayes classifier may allocate no joint table.
    #[error("combination limit must be >= 1, got {max_combinations}")]
    InvalidCombinationLimit {
        /// The invalid ceiling.
        max_combinations: usize,
    },

    /// Returned when testing is attempted before a successful training run.
    #[error("model has not been trained")]
    Untrained,

    /// Returned when retraining is attempted without raw data.
    #[error("no raw data to train from")]
    MissingRawData,

    /// Returned when there are records to classify but no training records.
    #[error("training set is empty but {testing} test records need classifying")]
    EmptyTrainingData {
        /// Number of records in the testing set.
        testing: usize,
    },

    /// Returned when the joint interval table would exceed its row ceiling.
    #[error("{intervals}^{attributes} interval combinations exceed the limit of {limit}")]
    TooManyCombinations {
        /// Intervals per attribute.
        intervals: usize,
        /// Number of attributes.
        attributes: usize,
        /// The configured row ceiling.
        limit: usize,
    },

    /// Returned when a registry lookup names no model.
    #[error("no model with id {id}")]
    UnknownModel {
        /// The requested id.
        id: usize,
    },

    /// Wraps a failure to load or split the dataset.
    #[error("data error: {0}")]
    Data(#[from] DataSetError),
}

impl From<ProbabilityError> for ClassifierError {
    fn from(e: ProbabilityError) -> Self {
        match e {
            ProbabilityError::InvalidIntervalCount { intervals } => {
                Self::InvalidIntervalCount { intervals }
            }
        }
    }
}
