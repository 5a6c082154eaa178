//! Labeled numeric datasets for the Basilisk classifiers.
//!
//! A [`DataSet`] owns a list of class names, a list of attribute names and a
//! sequence of [`Record`]s, and guarantees that every record fits both lists.
//! [`DataSet::split`] partitions it into training and test datasets, either
//! in original order or via a fresh uniform shuffle.
//!
//! # Quick start
//!
//! ```
//! use basilisk_dataset::{DataSet, Record, SplitConfig, SplitMethod};
//!
//! let ds = DataSet::new(
//!     vec!["small".into(), "large".into()],
//!     vec!["length".into()],
//!     (0..8).map(|i| Record::new(i / 4, vec![i as f64])).collect(),
//! )
//! .unwrap();
//!
//! let config = SplitConfig::new().with_method(SplitMethod::Sequential);
//! let (training, test) = ds.split(&config).unwrap();
//! assert_eq!(training.len(), 6);
//! assert_eq!(test.len(), 2);
//! ```
//!
//! # Formats
//!
//! | Format | Read | Write |
//! |--------|------|-------|
//! | JSON `{classes, attributes, data}` | [`DataSet::from_json`] | [`DataSet::to_json`] |
//! | CSV, trailing class column | [`DataSet::from_csv`] | [`DataSet::to_csv`] |

pub mod csv_io;
pub mod dataset;
pub mod error;
pub mod json;
pub mod record;
pub mod shuffle;
pub mod split;

use std::path::Path;

pub use dataset::DataSet;
pub use error::DataSetError;
pub use record::Record;
pub use shuffle::shuffle_records;
pub use split::{DEFAULT_TRAINING_SHARE, SplitConfig, SplitMethod};

/// On-disk dataset encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `{"classes": [...], "attributes": [...], "data": [...]}`.
    Json,
    /// Attribute columns plus a trailing class-name column.
    Csv,
}

impl Format {
    /// Infers the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DataSetError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(DataSetError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl DataSet {
    /// Reads a dataset from `path`, choosing the codec from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataSetError> {
        let path = path.as_ref();
        Self::read_from(path, Format::from_path(path)?)
    }

    /// Reads a dataset from `path` in the given format.
    pub fn read_from(path: impl AsRef<Path>, format: Format) -> Result<Self, DataSetError> {
        match format {
            Format::Json => Self::from_json_file(path),
            Format::Csv => Self::from_csv_file(path),
        }
    }

    /// Writes the dataset to `path` in the given format.
    pub fn write_to(&self, path: impl AsRef<Path>, format: Format) -> Result<(), DataSetError> {
        match format {
            Format::Json => self.write_json_file(path),
            Format::Csv => self.write_csv_file(path),
        }
    }
}
