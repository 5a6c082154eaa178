//! A single labeled observation.

use serde::{Deserialize, Serialize};

/// A labeled numeric observation.
///
/// `class` indexes the class names of the [`DataSet`](crate::DataSet) that
/// owns the record. Serialises as `{"class": 0, "values": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Index of the record's class.
    pub class: usize,
    /// Attribute values, in attribute order.
    pub values: Vec<f64>,
}

impl Record {
    /// Creates a new record.
    pub fn new(class: usize, values: Vec<f64>) -> Self {
        Self { class, values }
    }

    /// Returns the value of attribute `index`, if present.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}
