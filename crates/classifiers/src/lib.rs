//! k-nearest-neighbors and naive Bayes classifiers over Basilisk datasets.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`distance`] | Euclidean and Manhattan distance |
//! | [`knn`] | k-nearest-neighbors voting |
//! | [`naive_bayes`] | Discretized naive Bayes posterior tables |
//! | [`classifier`] | The [`Classifier`] trait shared by both |
//! | [`result`] | Per-record predictions and accuracy |
//! | [`registry`] | Id-addressed model storage |
//!
//! # Quick start
//!
//! ```
//! use basilisk_classifiers::{Classifier, NaiveBayesClassifier};
//! use basilisk_dataset::{DataSet, Record, SplitConfig};
//!
//! let records = (0..40)
//!     .map(|i| Record::new(i % 2, vec![(i % 2) as f64 * 5.0 + (i % 4) as f64 * 0.1]))
//!     .collect();
//! let ds = DataSet::new(vec!["a".into(), "b".into()], vec!["x".into()], records).unwrap();
//!
//! let mut nb = NaiveBayesClassifier::new().with_seed(7);
//! nb.train_from_dataset(ds, &SplitConfig::default()).unwrap();
//! let analysis = nb.test().unwrap().analyze();
//! assert_eq!(analysis.result_count, 10);
//! ```

pub mod classifier;
pub mod config;
pub mod distance;
pub mod error;
pub mod knn;
pub mod naive_bayes;
pub mod registry;
pub mod result;

pub use classifier::{Classifier, ClassifierKind};
pub use config::{DEFAULT_MAX_COMBINATIONS, KnnConfig, ModelConfig, NaiveBayesConfig};
pub use distance::{DistanceMethod, euclidean, manhattan};
pub use error::ClassifierError;
pub use knn::{KnnClassifier, Neighbor, compute_neighbors};
pub use naive_bayes::{BayesModel, NaiveBayesClassifier};
pub use registry::{BoxedClassifier, ModelId, ModelRegistry, ModelSummary};
pub use result::{TestResult, TestResults, TestResultsAnalysis};
