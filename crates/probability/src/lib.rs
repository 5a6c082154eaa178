//! Discrete probability helpers for the Basilisk classifiers.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`mass_discrete`] | Empirical PMF over integer category codes |
//! | [`discretize`] | Equal-width intervals over an observed value range |
//! | [`bayes`] | Posterior from prior, likelihood and evidence |
//!
//! # Quick start
//!
//! ```
//! use basilisk_probability::{DiscretizationConfig, discretize, mass_discrete};
//!
//! let intervals = discretize(&[1.0, 4.0, 10.0], &DiscretizationConfig::new(3)).unwrap();
//! let codes: Vec<usize> = [1.0, 4.0, 10.0]
//!     .iter()
//!     .filter_map(|&v| intervals.interval_for_value(v))
//!     .collect();
//! assert_eq!(codes, vec![0, 1, 2]);
//!
//! let pmf = mass_discrete(&codes);
//! assert!((pmf.mass(0) - 1.0 / 3.0).abs() < 1e-12);
//! ```

pub mod bayes;
pub mod error;
pub mod interval;
pub mod pmf;

pub use bayes::bayes;
pub use error::ProbabilityError;
pub use interval::{
    DEFAULT_INTERVAL_COUNT, DiscretizationConfig, Interval, Intervals, discretize,
};
pub use pmf::{MassFunction, mass_discrete};
