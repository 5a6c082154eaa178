//! Synthetic labeled datasets for exercising the Basilisk classifiers.
//!
//! A [`DatasetConfig`] names each class and, per attribute, a value range
//! plus the percentage of the class's records to draw from each fifth of
//! that range. [`generate_dataset`] turns it into a [`DataSet`].
//!
//! # Quick start
//!
//! ```
//! use basilisk_dsgen::{AttributeSpec, DatasetConfig, generate_dataset};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = DatasetConfig::new(50)
//!     .with_class("small", vec![AttributeSpec::new("size", 0.0, 10.0).with_allocations(vec![100.0])])
//!     .with_class("large", vec![AttributeSpec::new("size", 0.0, 10.0).with_allocations(vec![0.0, 0.0, 0.0, 0.0, 100.0])]);
//!
//! let ds = generate_dataset(&config, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(ds.len(), 50);
//! assert_eq!(ds.class_names(), ["large", "small"]);
//! ```
//!
//! [`DataSet`]: basilisk_dataset::DataSet

pub mod config;
pub mod error;
pub mod generate;

pub use config::{AttributeSpec, DatasetConfig};
pub use error::DsgenError;
pub use generate::{
    QUINTILES, assign_quintiles, compute_quintile_distribution, generate_dataset, quintile_value,
};
