//! Error types for the basilisk-dataset crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the basilisk-dataset crate.
///
/// Covers dataset validation, split configuration, and the JSON/CSV codecs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataSetError {
    /// Returned when a record's class is not a valid index into the class names.
    #[error("record {record} has invalid class {class} (dataset declares {n_classes} classes)")]
    InvalidClass {
        /// Index of the offending record.
        record: usize,
        /// The class code found on the record.
        class: i64,
        /// Number of declared class names.
        n_classes: usize,
    },

    /// Returned when a record carries more values than there are attribute names.
    #[error("record {record} has {values} values but only {attributes} attributes are declared")]
    TooManyAttributes {
        /// Index of the offending record.
        record: usize,
        /// Number of values on the record.
        values: usize,
        /// Number of declared attribute names.
        attributes: usize,
    },

    /// Returned when the training share is outside `(0, 1]` or not finite.
    #[error("training share must be in (0, 1], got {share}")]
    InvalidTrainingShare {
        /// The invalid share.
        share: f64,
    },

    /// Returned when a split method name is not recognised.
    #[error("unknown split method '{name}' (expected 'random' or 'sequential')")]
    UnknownSplitMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Wraps a JSON decoding or encoding failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps a failure reported by the CSV reader or writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when CSV input has no header row.
    #[error("csv input has no header row")]
    EmptyCsv,

    /// Returned when a CSV row has the wrong number of columns.
    #[error("invalid data at line {line}: expected {expected} columns, got {got}")]
    ColumnCount {
        /// 1-based line number (the header is line 1).
        line: u64,
        /// Expected number of columns.
        expected: usize,
        /// Number of columns found.
        got: usize,
    },

    /// Returned when a CSV attribute value cannot be parsed as a float.
    #[error("unable to parse attribute value '{value}', column {column}, at line {line}")]
    InvalidValue {
        /// 1-based line number.
        line: u64,
        /// 0-based attribute column.
        column: usize,
        /// The raw text.
        value: String,
    },

    /// Returned when a record with missing values is exported to CSV.
    #[error("record {record} has {values} values, csv export needs {attributes}")]
    IncompleteRecord {
        /// Index of the offending record.
        record: usize,
        /// Number of values on the record.
        values: usize,
        /// Number of declared attribute names.
        attributes: usize,
    },

    /// Returned when a file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a file cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a file extension does not identify a supported format.
    #[error("unsupported dataset format for {} (expected .json or .csv)", path.display())]
    UnknownFormat {
        /// The offending path.
        path: PathBuf,
    },
}

impl From<serde_json::Error> for DataSetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for DataSetError {
    fn from(e: csv::Error) -> Self {
        Self::Csv {
            reason: e.to_string(),
        }
    }
}
