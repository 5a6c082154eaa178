//! Registry integration tests: heterogeneous models addressed by id.

use basilisk_classifiers::{
    ClassifierError, ClassifierKind, KnnClassifier, ModelRegistry, NaiveBayesClassifier,
};
use basilisk_dataset::{DataSet, Record, SplitConfig};

fn dataset() -> DataSet {
    let records = (0..24)
        .map(|i| Record::new(i % 2, vec![(i % 2) as f64 * 8.0 + (i % 5) as f64 * 0.1]))
        .collect();
    DataSet::new(vec!["a".into(), "b".into()], vec!["x".into()], records).unwrap()
}

#[test]
fn train_and_test_every_model() {
    let mut registry = ModelRegistry::new();
    let knn = registry.add(Box::new(KnnClassifier::new(3, "euclidean").unwrap().with_seed(1)));
    let nb = registry.add(Box::new(NaiveBayesClassifier::new().with_seed(1)));
    assert_eq!((knn, nb), (0, 1));

    for id in 0..registry.len() {
        let model = registry.get_mut(id).unwrap();
        model
            .train_from_dataset(dataset(), &SplitConfig::default())
            .unwrap();
        let analysis = model.test().unwrap().analyze();
        assert_eq!(analysis.result_count, 6);
        assert_eq!(analysis.accuracy, 1.0, "model {id}");
    }

    assert_eq!(registry.get(nb).unwrap().kind(), ClassifierKind::NaiveBayes);
    assert!(registry.get(knn).unwrap().data().0.is_some());
}

#[test]
fn models_are_independent() {
    let mut registry = ModelRegistry::new();
    let a = registry.add(Box::new(KnnClassifier::new(1, "euclidean").unwrap()));
    let b = registry.add(Box::new(KnnClassifier::new(1, "euclidean").unwrap()));
    registry
        .get_mut(a)
        .unwrap()
        .train_from_dataset(dataset(), &SplitConfig::default())
        .unwrap();
    assert!(matches!(
        registry.get_mut(b).unwrap().test(),
        Err(ClassifierError::Untrained)
    ));
}

#[test]
fn shared_behind_mutex() {
    use std::sync::{Arc, Mutex};

    let registry = Arc::new(Mutex::new(ModelRegistry::new()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .lock()
                    .unwrap()
                    .add(Box::new(NaiveBayesClassifier::new()))
            })
        })
        .collect();
    let mut ids: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}
