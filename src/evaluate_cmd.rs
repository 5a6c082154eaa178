//! Evaluate command: train every configured model and report accuracy.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use basilisk_classifiers::{
    ClassifierKind, ModelConfig, ModelId, ModelRegistry, TestResultsAnalysis,
};
use basilisk_dataset::DataSet;

use crate::cli::EvaluateArgs;
use crate::config::BasiliskConfig;
use crate::convert;

/// One model's entry in the evaluation report.
#[derive(Debug, Serialize)]
pub struct ModelReport {
    pub id: ModelId,
    pub kind: ClassifierKind,
    pub config: ModelConfig,
    pub analysis: TestResultsAnalysis,
}

/// Run the evaluation pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();

    // 1. Load project TOML, CLI flags take precedence
    let config = BasiliskConfig::load(&args.config)?;
    let seed = args.seed.or(config.seed);
    let data_path = args.data.as_ref().or(config.data.path.as_ref()).ok_or_else(|| {
        anyhow::anyhow!("no dataset path: set [data].path in config or use --data")
    })?;
    if config.models.is_empty() {
        bail!("no models configured: add at least one [[models]] entry");
    }

    // 2. Read the dataset
    let format = convert::data_format(&config.data, data_path)?;
    info!(path = %data_path.display(), "reading dataset");
    let dataset = DataSet::read_from(data_path, format)
        .with_context(|| format!("failed to read dataset: {}", data_path.display()))?;
    info!(
        records = dataset.len(),
        classes = dataset.class_names().len(),
        attributes = dataset.attribute_names().len(),
        "dataset loaded"
    );

    // 3. Register models
    let split = convert::build_split_config(&config.split)?;
    let mut registry = ModelRegistry::new();
    for (i, model) in config.models.iter().enumerate() {
        let classifier = convert::build_model(model, seed)
            .with_context(|| format!("invalid [[models]] entry {i}"))?;
        registry.add(classifier);
    }

    // 4. Train and test each model
    let reports = evaluate_all(&mut registry, &dataset, &split)?;

    // 5. Write report
    let json = serde_json::to_string_pretty(&reports).context("failed to encode report")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Trains and tests every registered model on `dataset`.
pub fn evaluate_all(
    registry: &mut ModelRegistry,
    dataset: &DataSet,
    split: &basilisk_dataset::SplitConfig,
) -> Result<Vec<ModelReport>> {
    let mut reports = Vec::with_capacity(registry.len());
    for id in 0..registry.len() {
        let model = registry.get_mut(id)?;
        let kind = model.kind();
        let _model = info_span!("model", id, kind = %kind).entered();

        model
            .train_from_dataset(dataset.clone(), split)
            .with_context(|| format!("training model {id} ({kind}) failed"))?;
        let analysis = model
            .test()
            .with_context(|| format!("testing model {id} ({kind}) failed"))?
            .analyze();
        info!(
            results = analysis.result_count,
            correct = analysis.correct_count,
            accuracy = analysis.accuracy,
            "model evaluated"
        );
        reports.push(ModelReport {
            id,
            kind,
            config: model.config(),
            analysis,
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basilisk_classifiers::{KnnClassifier, NaiveBayesClassifier};
    use basilisk_dataset::{Record, SplitConfig};

    #[test]
    fn report_per_model() {
        let records = (0..40)
            .map(|i| Record::new(i % 2, vec![(i % 2) as f64 * 6.0 + (i % 7) as f64 * 0.1]))
            .collect();
        let ds = DataSet::new(vec!["a".into(), "b".into()], vec!["x".into()], records).unwrap();

        let mut registry = ModelRegistry::new();
        registry.add(Box::new(KnnClassifier::new(3, "euclidean").unwrap().with_seed(2)));
        registry.add(Box::new(NaiveBayesClassifier::new().with_seed(2)));

        let reports = evaluate_all(&mut registry, &ds, &SplitConfig::default()).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].id, 1);
        assert_eq!(reports[1].kind, ClassifierKind::NaiveBayes);
        assert!(reports.iter().all(|r| r.analysis.result_count == 10));
        assert!(reports.iter().all(|r| r.analysis.accuracy == 1.0));

        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["kind"], "KNearestNeighbors Classifier");
        assert_eq!(json[0]["config"]["k"], 3);
        assert_eq!(json[1]["analysis"]["results"], 10);
    }
}
