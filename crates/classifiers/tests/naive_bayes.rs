//! Naive Bayes classifier integration tests.

use approx::assert_abs_diff_eq;
use basilisk_classifiers::{
    BayesModel, Classifier, ClassifierError, ModelConfig, NaiveBayesClassifier, NaiveBayesConfig,
};
use basilisk_dataset::{DataSet, Record, SplitConfig, SplitMethod};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Three classes separated along both attributes.
fn separated(n: usize, seed: u64) -> DataSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = (0..n)
        .map(|i| {
            let class = i % 3;
            let centre = class as f64 * 10.0;
            Record::new(
                class,
                vec![
                    centre + rng.random_range(0.0..3.0),
                    -centre + rng.random_range(0.0..3.0),
                ],
            )
        })
        .collect();
    DataSet::new(
        vec!["alpha".into(), "beta".into(), "gamma".into()],
        vec!["u".into(), "v".into()],
        records,
    )
    .unwrap()
}

#[test]
fn five_record_priors() {
    let ds = DataSet::new(
        vec!["yes".into(), "no".into()],
        vec!["x".into()],
        vec![
            Record::new(0, vec![1.0]),
            Record::new(1, vec![2.0]),
            Record::new(0, vec![3.0]),
            Record::new(0, vec![4.0]),
            Record::new(1, vec![5.0]),
        ],
    )
    .unwrap();
    let model = BayesModel::fit(&ds, &NaiveBayesConfig::new()).unwrap();
    assert_abs_diff_eq!(model.class_priors()[0], 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(model.class_priors()[1], 0.4, epsilon = 1e-12);
}

#[test]
fn intervals_cover_training_range() {
    let ds = separated(90, 1);
    let model = BayesModel::fit(&ds, &NaiveBayesConfig::new()).unwrap();
    for (a, intervals) in model.attribute_intervals().iter().enumerate() {
        assert_eq!(intervals.len(), 10);
        let values: Vec<f64> = ds.records().iter().map(|r| r.values[a]).collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(intervals.min(), Some(min));
        assert_eq!(intervals.max(), Some(max));
        for &v in &values {
            assert!(intervals.interval_for_value(v).is_some());
        }
    }
}

#[test]
fn joint_table_shape() {
    let ds = separated(30, 2);
    let model = BayesModel::fit(&ds, &NaiveBayesConfig::new().with_intervals(4)).unwrap();
    let table = model.vector_conditioned_class_probabilities();
    assert_eq!(table.len(), 16);
    for row in table {
        assert_eq!(row.len(), 3);
        let sum: f64 = row.iter().sum();
        // Rows are either a distribution or all zero.
        assert!(sum == 0.0 || (sum - 1.0).abs() < 1e-9, "row sums to {sum}");
    }
}

#[test]
fn separated_classes_are_recovered() {
    let mut nb = NaiveBayesClassifier::new().with_seed(5);
    nb.train_from_dataset(separated(300, 3), &SplitConfig::default())
        .unwrap();
    let analysis = nb.test().unwrap().analyze();
    assert_eq!(analysis.result_count, 75);
    assert!(analysis.accuracy > 0.9, "accuracy {}", analysis.accuracy);
}

#[test]
fn retrain_replaces_model() {
    let mut nb = NaiveBayesClassifier::with_config(NaiveBayesConfig::new().with_intervals(3))
        .unwrap()
        .with_seed(9);
    nb.train_from_dataset(separated(60, 4), &SplitConfig::default())
        .unwrap();
    let before = nb.model().unwrap().clone();
    nb.retrain(&SplitConfig::new().with_method(SplitMethod::Sequential))
        .unwrap();
    assert_ne!(nb.model().unwrap(), &before);
    assert!(nb.results().is_none());
}

#[test]
fn failed_retrain_leaves_model_untrained() {
    let mut nb = NaiveBayesClassifier::new();
    nb.train_from_dataset(separated(12, 6), &SplitConfig::default())
        .unwrap();
    let err = nb
        .retrain(&SplitConfig::new().with_training_share(0.0))
        .unwrap_err();
    assert!(matches!(err, ClassifierError::Data(_)));
    assert!(nb.model().is_none());
    assert!(matches!(nb.test(), Err(ClassifierError::Untrained)));
}

#[test]
fn retrain_without_data_fails() {
    let mut nb = NaiveBayesClassifier::new();
    assert!(matches!(
        nb.retrain(&SplitConfig::default()),
        Err(ClassifierError::MissingRawData)
    ));
}

#[test]
fn wide_dataset_hits_combination_ceiling() {
    let n_attributes = 64;
    let ds = DataSet::new(
        vec!["only".into()],
        (0..n_attributes).map(|a| format!("a{a}")).collect(),
        vec![Record::new(0, vec![1.0; n_attributes])],
    )
    .unwrap();
    let mut nb = NaiveBayesClassifier::new();
    let err = nb
        .train_from_dataset(ds, &SplitConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ClassifierError::TooManyCombinations {
            intervals: 10,
            attributes: 64,
            ..
        }
    ));
}

/// 10^12 rows fit in `usize` but not in memory.
fn twelve_attributes() -> DataSet {
    let n_attributes = 12;
    let records = (0..8)
        .map(|i| Record::new(i % 2, (0..n_attributes).map(|a| (i * a) as f64).collect()))
        .collect();
    DataSet::new(
        vec!["even".into(), "odd".into()],
        (0..n_attributes).map(|a| format!("a{a}")).collect(),
        records,
    )
    .unwrap()
}

#[test]
fn table_larger_than_ceiling_is_refused() {
    let mut nb = NaiveBayesClassifier::new();
    let err = nb
        .train_from_dataset(
            twelve_attributes(),
            &SplitConfig::new().with_method(SplitMethod::Sequential),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ClassifierError::TooManyCombinations {
            intervals: 10,
            attributes: 12,
            limit: 1_000_000
        }
    ));
    assert!(nb.model().is_none());
    assert!(matches!(nb.test(), Err(ClassifierError::Untrained)));
}

#[test]
fn ceiling_is_configurable() {
    let config = NaiveBayesConfig::new().with_intervals(2);
    let mut nb = NaiveBayesClassifier::with_config(config.with_max_combinations(4096)).unwrap();
    nb.train_from_dataset(
        twelve_attributes(),
        &SplitConfig::new().with_method(SplitMethod::Sequential),
    )
    .unwrap();
    assert_eq!(nb.model().unwrap().vector_conditioned_class_probabilities().len(), 4096);

    let mut tight = NaiveBayesClassifier::with_config(config.with_max_combinations(4095)).unwrap();
    assert!(matches!(
        tight.train_from_dataset(
            twelve_attributes(),
            &SplitConfig::new().with_method(SplitMethod::Sequential),
        ),
        Err(ClassifierError::TooManyCombinations { limit: 4095, .. })
    ));
}

#[test]
fn config_reports_intervals() {
    let nb = NaiveBayesClassifier::with_config(NaiveBayesConfig::new().with_intervals(6)).unwrap();
    assert_eq!(
        nb.config(),
        ModelConfig::NaiveBayes(NaiveBayesConfig::new().with_intervals(6))
    );
}
