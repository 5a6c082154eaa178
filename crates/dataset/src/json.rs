//! JSON encoding of datasets.
//!
//! Class codes are decoded as signed integers so that a negative code is
//! reported as [`DataSetError::InvalidClass`] rather than a parse failure.

use std::path::Path;

use serde::Deserialize;

use crate::dataset::DataSet;
use crate::error::DataSetError;
use crate::record::Record;

/// Wire form of a [`DataSet`], prior to validation.
#[derive(Debug, Deserialize)]
pub(crate) struct DataSetDocument {
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    attributes: Vec<String>,
    #[serde(default)]
    data: Vec<RecordDocument>,
}

#[derive(Debug, Deserialize)]
struct RecordDocument {
    class: i64,
    #[serde(default)]
    values: Vec<f64>,
}

impl TryFrom<DataSetDocument> for DataSet {
    type Error = DataSetError;

    fn try_from(doc: DataSetDocument) -> Result<Self, Self::Error> {
        let n_classes = doc.classes.len();
        let records = doc
            .data
            .into_iter()
            .enumerate()
            .map(|(i, r)| match usize::try_from(r.class) {
                Ok(class) => Ok(Record::new(class, r.values)),
                Err(_) => Err(DataSetError::InvalidClass {
                    record: i,
                    class: r.class,
                    n_classes,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        DataSet::new(doc.classes, doc.attributes, records)
    }
}

impl DataSet {
    /// Decodes and validates a dataset from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DataSetError> {
        let doc: DataSetDocument = serde_json::from_slice(bytes)?;
        DataSet::try_from(doc)
    }

    /// Reads a JSON dataset from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataSetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DataSetError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&bytes)
    }

    /// Encodes the dataset as compact JSON.
    pub fn to_json(&self) -> Result<String, DataSetError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the dataset to `path` as JSON.
    pub fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), DataSetError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|e| DataSetError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "classes": ["heron", "egret"],
        "attributes": ["wingspan", "mass"],
        "data": [
            {"class": 0, "values": [1.8, 2.1]},
            {"class": 1, "values": [1.3, 0.9]}
        ]
    }"#;

    #[test]
    fn test_from_json_valid() {
        let ds = DataSet::from_json(VALID.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.class_names()[1], "egret");
        assert_eq!(ds.records()[0].values, vec![1.8, 2.1]);
    }

    #[test]
    fn test_from_json_negative_class() {
        let json = r#"{"classes":["a"],"attributes":["x"],"data":[{"class":-1,"values":[0.0]}]}"#;
        let err = DataSet::from_json(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataSetError::InvalidClass {
                record: 0,
                class: -1,
                n_classes: 1
            }
        ));
    }

    #[test]
    fn test_from_json_out_of_range_class() {
        let json = r#"{"classes":["a"],"attributes":["x"],"data":[{"class":1,"values":[0.0]}]}"#;
        assert!(matches!(
            DataSet::from_json(json.as_bytes()),
            Err(DataSetError::InvalidClass { class: 1, .. })
        ));
    }

    #[test]
    fn test_from_json_too_many_values() {
        let json = r#"{"classes":["a"],"attributes":["x"],"data":[{"class":0,"values":[0.0,1.0]}]}"#;
        assert!(matches!(
            DataSet::from_json(json.as_bytes()),
            Err(DataSetError::TooManyAttributes { .. })
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            DataSet::from_json(b"{not json"),
            Err(DataSetError::Json { .. })
        ));
    }

    #[test]
    fn test_serde_deserialize_validates() {
        let json = r#"{"classes":[],"attributes":[],"data":[{"class":0,"values":[]}]}"#;
        assert!(serde_json::from_str::<DataSet>(json).is_err());
        let ok: DataSet = serde_json::from_str(VALID).unwrap();
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let ds = DataSet::from_json(VALID.as_bytes()).unwrap();
        let encoded = ds.to_json().unwrap();
        assert!(encoded.starts_with(r#"{"classes":["heron","egret"],"attributes":"#));
        let back = DataSet::from_json(encoded.as_bytes()).unwrap();
        assert_eq!(back, ds);
    }
}
