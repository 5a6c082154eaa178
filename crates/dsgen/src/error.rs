//! Error types for the basilisk-dsgen crate.

use std::path::PathBuf;

use basilisk_dataset::DataSetError;

/// Error type for all fallible operations in the basilisk-dsgen crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DsgenError {
    /// Returned when the configuration declares no classes.
    #[error("configuration declares no classes")]
    NoClasses,

    /// Returned when a class declares a different number of attributes than
    /// the first class.
    #[error("class '{class}' declares {got} attributes, expected {expected}")]
    AttributeMismatch {
        /// The offending class.
        class: String,
        /// Attribute count of the first class.
        expected: usize,
        /// Attribute count of the offending class.
        got: usize,
    },

    /// Returned when an attribute's bounds are not finite or are reversed.
    #[error("attribute '{attribute}' has invalid bounds [{lower}, {upper}]")]
    InvalidBounds {
        /// The offending attribute.
        attribute: String,
        /// Configured lower bound.
        lower: f64,
        /// Configured upper bound.
        upper: f64,
    },

    /// Returned when a quintile distribution is requested for no records.
    #[error("record count must be >= 1, got {count}")]
    InvalidRecordCount {
        /// The invalid count.
        count: usize,
    },

    /// Returned when more than five allocations or counts are given.
    #[error("at most 5 quintiles may be specified, got {given}")]
    TooManyQuintiles {
        /// Number of entries supplied.
        given: usize,
    },

    /// Returned when an allocation is negative or not finite.
    #[error("allocation {allocation} is not a finite non-negative percentage")]
    InvalidAllocation {
        /// The offending allocation.
        allocation: f64,
    },

    /// Returned when allocations add up to more than 100 percent.
    #[error("allocations total {total}%, which exceeds 100%")]
    AllocationsExceed {
        /// Sum of the allocations.
        total: f64,
    },

    /// Returned when quintile counts do not account for every record.
    #[error("quintile counts sum to {counted} but {records} records were given")]
    QuintileCountMismatch {
        /// Sum of the quintile counts.
        counted: usize,
        /// Number of record indices.
        records: usize,
    },

    /// Returned when the configuration JSON cannot be decoded.
    #[error("invalid configuration: {reason}")]
    Json {
        /// Decoder message.
        reason: String,
    },

    /// Returned when the configuration file cannot be read.
    #[error("failed to read {path}: {reason}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O message.
        reason: String,
    },

    /// Wraps a failure to assemble the generated dataset.
    #[error("data error: {0}")]
    Data(#[from] DataSetError),
}

impl From<serde_json::Error> for DsgenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = DsgenError::AttributeMismatch {
            class: "heron".into(),
            expected: 3,
            got: 2,
        };
        assert_eq!(e.to_string(), "class 'heron' declares 2 attributes, expected 3");

        let e = DsgenError::AllocationsExceed { total: 120.0 };
        assert_eq!(e.to_string(), "allocations total 120%, which exceeds 100%");

        let e = DsgenError::QuintileCountMismatch {
            counted: 4,
            records: 5,
        };
        assert_eq!(
            e.to_string(),
            "quintile counts sum to 4 but 5 records were given"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DsgenError>();
    }
}
