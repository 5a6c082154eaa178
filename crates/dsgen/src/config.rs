//! Generator configuration, read from JSON.
//!
//! ```json
//! {
//!   "classes": {
//!     "heron": [{"name": "wingspan", "lower": 1.5, "upper": 2.0, "allocationsByQuintile": [0, 10, 20, 30, 40]}]
//!   },
//!   "recordCount": 500
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DsgenError;

/// Value range and quintile allocation of one attribute within one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    /// Attribute name.
    pub name: String,
    /// Lower bound of generated values.
    pub lower: f64,
    /// Upper bound of generated values.
    pub upper: f64,
    /// Percentage of the class's records drawn from each fifth of
    /// `[lower, upper]`, lowest fifth first. Up to five entries; missing
    /// entries count as zero.
    #[serde(default)]
    pub allocations_by_quintile: Vec<f64>,
}

impl AttributeSpec {
    /// Creates a spec with no allocations.
    pub fn new(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            name: name.into(),
            lower,
            upper,
            allocations_by_quintile: Vec::new(),
        }
    }

    /// Sets the per-quintile allocations.
    pub fn with_allocations(mut self, allocations: Vec<f64>) -> Self {
        self.allocations_by_quintile = allocations;
        self
    }
}

/// Classes to generate and how many records to draw.
///
/// Classes are kept in a `BTreeMap`, so generated class indices follow the
/// lexicographic order of class names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    /// Attribute specs per class name.
    pub classes: BTreeMap<String, Vec<AttributeSpec>>,
    /// Total number of records to generate.
    #[serde(default)]
    pub record_count: usize,
}

impl DatasetConfig {
    /// Creates an empty configuration for `record_count` records.
    pub fn new(record_count: usize) -> Self {
        Self {
            classes: BTreeMap::new(),
            record_count,
        }
    }

    /// Adds or replaces a class.
    pub fn with_class(mut self, name: impl Into<String>, attributes: Vec<AttributeSpec>) -> Self {
        self.classes.insert(name.into(), attributes);
        self
    }

    /// Decodes a configuration from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DsgenError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DsgenError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DsgenError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&bytes)
    }

    /// Class names in index order.
    pub fn class_names(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }

    /// Attribute names, taken from the first class.
    pub fn attribute_names(&self) -> Vec<String> {
        self.classes
            .values()
            .next()
            .map(|attrs| attrs.iter().map(|a| a.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Checks that there is at least one class, that every class declares
    /// as many attributes as the first, and that every attribute has finite
    /// ordered bounds.
    pub fn validate(&self) -> Result<(), DsgenError> {
        let expected = self
            .classes
            .values()
            .next()
            .map(Vec::len)
            .ok_or(DsgenError::NoClasses)?;
        for (class, attributes) in &self.classes {
            if attributes.len() != expected {
                return Err(DsgenError::AttributeMismatch {
                    class: class.clone(),
                    expected,
                    got: attributes.len(),
                });
            }
            if let Some(a) = attributes
                .iter()
                .find(|a| !a.lower.is_finite() || !a.upper.is_finite() || a.lower > a.upper)
            {
                return Err(DsgenError::InvalidBounds {
                    attribute: a.name.clone(),
                    lower: a.lower,
                    upper: a.upper,
                });
            }
        }
        Ok(())
    }
}
