//! Per-record predictions and their aggregate accuracy.

use std::ops::Deref;

use basilisk_dataset::Record;
use serde::Serialize;

/// Prediction for one held-out record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// The record that was classified, including its true class.
    pub record: Record,
    /// Index of the predicted class.
    pub predicted_class: usize,
    /// Probability the model assigned to the predicted class.
    pub predicted_probability: f64,
}

impl TestResult {
    /// Returns `true` if the prediction matches the record's class.
    pub fn is_correct(&self) -> bool {
        self.predicted_class == self.record.class
    }
}

/// Predictions for a whole testing set, in testing-set order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TestResults(Vec<TestResult>);

impl TestResults {
    /// Wraps a list of predictions.
    pub fn new(results: Vec<TestResult>) -> Self {
        Self(results)
    }

    /// Consumes the results and returns the predictions.
    pub fn into_inner(self) -> Vec<TestResult> {
        self.0
    }

    /// Counts correct and incorrect predictions.
    ///
    /// An empty result set has zero counts and an accuracy of `0.0`.
    pub fn analyze(&self) -> TestResultsAnalysis {
        let result_count = self.0.len();
        let correct_count = self.0.iter().filter(|r| r.is_correct()).count();
        let accuracy = if result_count == 0 {
            0.0
        } else {
            correct_count as f64 / result_count as f64
        };
        TestResultsAnalysis {
            result_count,
            correct_count,
            incorrect_count: result_count - correct_count,
            accuracy,
        }
    }
}

impl Deref for TestResults {
    type Target = [TestResult];

    fn deref(&self) -> &[TestResult] {
        &self.0
    }
}

impl From<Vec<TestResult>> for TestResults {
    fn from(results: Vec<TestResult>) -> Self {
        Self(results)
    }
}

impl IntoIterator for TestResults {
    type Item = TestResult;
    type IntoIter = std::vec::IntoIter<TestResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Aggregate accuracy of a [`TestResults`] set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResultsAnalysis {
    /// Number of predictions.
    #[serde(rename = "results")]
    pub result_count: usize,
    /// Predictions matching the true class.
    #[serde(rename = "correct")]
    pub correct_count: usize,
    /// Predictions not matching the true class.
    #[serde(rename = "incorrect")]
    pub incorrect_count: usize,
    /// `correct / results`, or `0.0` when there are no results.
    pub accuracy: f64,
}
