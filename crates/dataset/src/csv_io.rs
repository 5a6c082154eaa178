//! CSV encoding of datasets.
//!
//! The header row lists the attribute names followed by one trailing class
//! column; each data row holds the attribute values followed by the class
//! name. Class indices are assigned in order of first appearance.

use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::dataset::DataSet;
use crate::error::DataSetError;
use crate::record::Record;

/// Header of the trailing class column written by [`DataSet::to_csv`].
pub const CLASS_COLUMN: &str = "class";

impl DataSet {
    /// Decodes a dataset from CSV bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DataSetError::EmptyCsv`] without a header,
    /// [`DataSetError::ColumnCount`] for rows of the wrong width, and
    /// [`DataSetError::InvalidValue`] for attribute values that are not floats.
    /// Line numbers are 1-based with the header on line 1.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, DataSetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(bytes);

        let header = reader.headers()?.clone();
        if header.is_empty() {
            return Err(DataSetError::EmptyCsv);
        }
        let attribute_names: Vec<String> = header
            .iter()
            .take(header.len() - 1)
            .map(str::to_string)
            .collect();
        let n_columns = header.len();

        let mut class_index: HashMap<String, usize> = HashMap::new();
        let mut class_names: Vec<String> = Vec::new();
        let mut records = Vec::new();

        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, |p| p.line());
            // A lone empty field is a blank line.
            if row.len() == 1 && row.get(0).is_some_and(str::is_empty) {
                continue;
            }
            if row.len() != n_columns {
                return Err(DataSetError::ColumnCount {
                    line,
                    expected: n_columns,
                    got: row.len(),
                });
            }

            let values = row
                .iter()
                .take(n_columns - 1)
                .enumerate()
                .map(|(column, raw)| {
                    raw.parse::<f64>().map_err(|_| DataSetError::InvalidValue {
                        line,
                        column,
                        value: raw.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let name = row.get(n_columns - 1).unwrap_or_default();
            let class = match class_index.get(name) {
                Some(&idx) => idx,
                None => {
                    let idx = class_names.len();
                    class_index.insert(name.to_string(), idx);
                    class_names.push(name.to_string());
                    idx
                }
            };

            records.push(Record::new(class, values));
        }

        DataSet::new(class_names, attribute_names, records)
    }

    /// Reads a CSV dataset from `path`.
    pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Self, DataSetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DataSetError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_csv(&bytes)
    }

    /// Encodes the dataset as CSV, rendering values with 6 decimal digits.
    ///
    /// Rows carry class names, not indices. [`DataSet::from_csv`] numbers
    /// classes by first appearance, so reading the output back keeps each
    /// record's class name but may renumber classes, and drops declared
    /// classes that no record uses.
    ///
    /// # Errors
    ///
    /// Returns [`DataSetError::IncompleteRecord`] if a record has fewer values
    /// than there are attributes, since such a row could not be read back.
    pub fn to_csv(&self) -> Result<String, DataSetError> {
        let n_attributes = self.attribute_names().len();
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        let mut header: Vec<&str> = self.attribute_names().iter().map(String::as_str).collect();
        header.push(CLASS_COLUMN);
        writer.write_record(&header)?;

        for (i, record) in self.records().iter().enumerate() {
            if record.values.len() != n_attributes {
                return Err(DataSetError::IncompleteRecord {
                    record: i,
                    values: record.values.len(),
                    attributes: n_attributes,
                });
            }
            let mut row: Vec<String> = record.values.iter().map(|v| format!("{v:.6}")).collect();
            row.push(self.class_name(record.class).unwrap_or_default().to_string());
            writer.write_record(&row)?;
        }

        let bytes = writer.into_inner().map_err(|e| DataSetError::Csv {
            reason: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|e| DataSetError::Csv {
            reason: e.to_string(),
        })
    }

    /// Writes the dataset to `path` as CSV.
    pub fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<(), DataSetError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv()?).map_err(|e| DataSetError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
