//! Labeled datasets and training/test splitting.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DataSetError;
use crate::record::Record;
use crate::shuffle::shuffle_records;
use crate::split::{SplitConfig, SplitMethod};

/// A set of labeled records sharing one list of class names and one list of
/// attribute names.
///
/// Every record's class indexes `class_names`, and no record carries more
/// values than there are attribute names. The name lists are fixed at
/// construction; operations such as [`split`](Self::split) return new
/// datasets instead of modifying this one.
///
/// Serialises as `{"classes": [...], "attributes": [...], "data": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "crate::json::DataSetDocument")]
pub struct DataSet {
    #[serde(rename = "classes")]
    class_names: Vec<String>,
    #[serde(rename = "attributes")]
    attribute_names: Vec<String>,
    #[serde(rename = "data")]
    records: Vec<Record>,
}

impl DataSet {
    /// Creates a dataset, validating every record against the name lists.
    ///
    /// An empty record list is always accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DataSetError::InvalidClass`] if a record's class is not a
    /// valid index into `class_names`, or [`DataSetError::TooManyAttributes`]
    /// if a record has more values than `attribute_names`.
    pub fn new(
        class_names: Vec<String>,
        attribute_names: Vec<String>,
        records: Vec<Record>,
    ) -> Result<Self, DataSetError> {
        validate_records(&class_names, &attribute_names, &records)?;
        Ok(Self {
            class_names,
            attribute_names,
            records,
        })
    }

    /// Builds a dataset sharing this one's name lists. `records` must already
    /// satisfy the invariants (e.g. a subset of `self.records`).
    fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            class_names: self.class_names.clone(),
            attribute_names: self.attribute_names.clone(),
            records,
        }
    }

    /// Returns the class names; a record's class indexes this list.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Returns the name of class `index`, if declared.
    pub fn class_name(&self, index: usize) -> Option<&str> {
        self.class_names.get(index).map(String::as_str)
    }

    /// Returns the attribute names.
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Returns the records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces all records, validating them against the existing name lists.
    ///
    /// On error the dataset is left unchanged.
    pub fn replace_records(&mut self, records: Vec<Record>) -> Result<(), DataSetError> {
        validate_records(&self.class_names, &self.attribute_names, &records)?;
        self.records = records;
        Ok(())
    }

    /// Splits the records into `(training, test)` datasets using the
    /// thread-local RNG.
    ///
    /// See [`split_with_rng`](Self::split_with_rng).
    pub fn split(&self, config: &SplitConfig) -> Result<(DataSet, DataSet), DataSetError> {
        self.split_with_rng(config, &mut rand::rng())
    }

    /// Splits the records into `(training, test)` datasets.
    ///
    /// The first `floor(len * training_share)` records of the chosen ordering
    /// form the training set and the rest the test set. `Sequential` keeps
    /// the original order; `Random` draws a fresh permutation from `rng`.
    /// Records are copied, so the source dataset is never modified, and
    /// together the two halves hold exactly the source records.
    ///
    /// # Errors
    ///
    /// Returns [`DataSetError::InvalidTrainingShare`] if the configuration is
    /// invalid.
    pub fn split_with_rng(
        &self,
        config: &SplitConfig,
        rng: &mut impl Rng,
    ) -> Result<(DataSet, DataSet), DataSetError> {
        config.validate()?;

        let mut training = match config.method() {
            SplitMethod::Random => shuffle_records(&self.records, rng),
            SplitMethod::Sequential => self.records.clone(),
        };
        let split_point = config.split_point(training.len());
        let test = training.split_off(split_point);

        debug!(
            method = %config.method(),
            training = training.len(),
            test = test.len(),
            "dataset split"
        );

        Ok((self.with_records(training), self.with_records(test)))
    }
}

/// Checks the class invariant over all records, then the attribute-count
/// invariant.
pub(crate) fn validate_records(
    class_names: &[String],
    attribute_names: &[String],
    records: &[Record],
) -> Result<(), DataSetError> {
    if let Some((i, r)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| r.class >= class_names.len())
    {
        return Err(DataSetError::InvalidClass {
            record: i,
            class: i64::try_from(r.class).unwrap_or(i64::MAX),
            n_classes: class_names.len(),
        });
    }

    if let Some((i, r)) = records
        .iter()
        .enumerate()
        .find(|(_, r)| r.values.len() > attribute_names.len())
    {
        return Err(DataSetError::TooManyAttributes {
            record: i,
            values: r.values.len(),
            attributes: attribute_names.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample(n: usize) -> DataSet {
        let records = (0..n)
            .map(|i| Record::new(i % 2, vec![i as f64, (i * i) as f64]))
            .collect();
        DataSet::new(names(&["even", "odd"]), names(&["x", "x2"]), records).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let ds = sample(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.class_names(), &names(&["even", "odd"])[..]);
        assert_eq!(ds.attribute_names(), &names(&["x", "x2"])[..]);
        assert_eq!(ds.class_name(1), Some("odd"));
        assert_eq!(ds.class_name(2), None);
    }

    #[test]
    fn test_new_rejects_invalid_class() {
        let records = vec![Record::new(0, vec![1.0]), Record::new(2, vec![1.0])];
        let err = DataSet::new(names(&["a", "b"]), names(&["x"]), records).unwrap_err();
        assert!(matches!(
            err,
            DataSetError::InvalidClass {
                record: 1,
                class: 2,
                n_classes: 2
            }
        ));
    }

    #[test]
    fn test_new_rejects_too_many_attributes() {
        let records = vec![Record::new(0, vec![1.0, 2.0, 3.0])];
        let err = DataSet::new(names(&["a"]), names(&["x", "y"]), records).unwrap_err();
        assert!(matches!(
            err,
            DataSetError::TooManyAttributes {
                record: 0,
                values: 3,
                attributes: 2
            }
        ));
    }

    #[test]
    fn test_new_accepts_fewer_values() {
        let records = vec![Record::new(0, vec![1.0])];
        assert!(DataSet::new(names(&["a"]), names(&["x", "y"]), records).is_ok());
    }

    #[test]
    fn test_new_empty_skips_validation() {
        let ds = DataSet::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_replace_records_validates() {
        let mut ds = sample(3);
        let err = ds.replace_records(vec![Record::new(5, vec![])]);
        assert!(err.is_err());
        assert_eq!(ds.len(), 3);
        ds.replace_records(vec![Record::new(1, vec![0.5])]).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_sequential_split() {
        let ds = sample(8);
        let cfg = SplitConfig::new()
            .with_training_share(0.5)
            .with_method(SplitMethod::Sequential);
        let (training, test) = ds.split(&cfg).unwrap();
        assert_eq!(training.records(), &ds.records()[..4]);
        assert_eq!(test.records(), &ds.records()[4..]);
        assert_eq!(training.class_names(), ds.class_names());
        assert_eq!(test.attribute_names(), ds.attribute_names());
    }

    #[test]
    fn test_random_split_sizes() {
        let ds = sample(20);
        let mut rng = StdRng::seed_from_u64(11);
        let (training, test) = ds.split_with_rng(&SplitConfig::default(), &mut rng).unwrap();
        assert_eq!(training.len(), 15);
        assert_eq!(test.len(), 5);
    }

    #[test]
    fn test_split_invalid_share() {
        let ds = sample(5);
        let cfg = SplitConfig::new().with_training_share(0.0);
        assert!(matches!(
            ds.split(&cfg),
            Err(DataSetError::InvalidTrainingShare { .. })
        ));
    }

    #[test]
    fn test_split_empty_dataset() {
        let ds = DataSet::new(names(&["a"]), names(&["x"]), Vec::new()).unwrap();
        let (training, test) = ds.split(&SplitConfig::default()).unwrap();
        assert!(training.is_empty());
        assert!(test.is_empty());
    }
}
