//! Configuration for training/test splits.

use std::fmt;
use std::str::FromStr;

use crate::error::DataSetError;

/// Default share of records assigned to the training set.
pub const DEFAULT_TRAINING_SHARE: f64 = 0.75;

/// How records are ordered before the split point is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMethod {
    /// A fresh uniform permutation on every split.
    #[default]
    Random,
    /// The original record order.
    Sequential,
}

impl FromStr for SplitMethod {
    type Err = DataSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" => Ok(Self::Sequential),
            _ => Err(DataSetError::UnknownSplitMethod {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Sequential => f.write_str("sequential"),
        }
    }
}

/// Configuration for [`DataSet::split`](crate::DataSet::split).
///
/// # Example
///
/// ```
/// use basilisk_dataset::{SplitConfig, SplitMethod};
///
/// let config = SplitConfig::new()
///     .with_training_share(0.8)
///     .with_method(SplitMethod::Sequential);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    training_share: f64,
    method: SplitMethod,
}

impl SplitConfig {
    /// Creates a configuration with the defaults: 75% training, random order.
    pub fn new() -> Self {
        Self {
            training_share: DEFAULT_TRAINING_SHARE,
            method: SplitMethod::Random,
        }
    }

    /// Sets the share of records used for training.
    pub fn with_training_share(mut self, share: f64) -> Self {
        self.training_share = share;
        self
    }

    /// Sets the split method.
    pub fn with_method(mut self, method: SplitMethod) -> Self {
        self.method = method;
        self
    }

    /// Returns the training share.
    pub fn training_share(&self) -> f64 {
        self.training_share
    }

    /// Returns the split method.
    pub fn method(&self) -> SplitMethod {
        self.method
    }

    /// Returns the number of training records for a dataset of `len` records.
    pub fn split_point(&self, len: usize) -> usize {
        ((len as f64 * self.training_share).floor() as usize).min(len)
    }

    /// Returns an error unless the training share is finite and in `(0, 1]`.
    pub fn validate(&self) -> Result<(), DataSetError> {
        let share = self.training_share;
        if !share.is_finite() || share <= 0.0 || share > 1.0 {
            return Err(DataSetError::InvalidTrainingShare { share });
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new()
    }
}
