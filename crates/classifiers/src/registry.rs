//! Id-addressed storage for trained and untrained models.

use serde::Serialize;

use crate::classifier::{Classifier, ClassifierKind};
use crate::config::ModelConfig;
use crate::error::ClassifierError;

/// Registry id of a model. Ids are assigned sequentially from 0.
pub type ModelId = usize;

/// Boxed classifier as stored by the registry.
pub type BoxedClassifier = Box<dyn Classifier + Send>;

/// Id, kind and configuration of a registered model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    /// Registry id.
    pub id: ModelId,
    /// Classifier variant.
    pub kind: ClassifierKind,
    /// Classifier configuration.
    pub config: ModelConfig,
}

/// Owns any number of classifiers and hands out sequential ids.
///
/// There is no notion of a current model: every operation names its model
/// by id.
///
/// # Concurrency
///
/// The registry is `Send` but not internally synchronised. Mutation goes
/// through `&mut self`, so sharing it across threads requires an external
/// lock such as `Mutex<ModelRegistry>`.
///
/// # Example
///
/// ```
/// use basilisk_classifiers::{KnnClassifier, ModelRegistry, NaiveBayesClassifier};
///
/// let mut registry = ModelRegistry::new();
/// let knn = registry.add(Box::new(KnnClassifier::new(3, "euclidean").unwrap()));
/// let nb = registry.add(Box::new(NaiveBayesClassifier::new()));
/// assert_eq!((knn, nb), (0, 1));
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Default)]
pub struct ModelRegistry {
    models: Vec<BoxedClassifier>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `model` and returns its id.
    pub fn add(&mut self, model: BoxedClassifier) -> ModelId {
        self.models.push(model);
        self.models.len() - 1
    }

    /// Returns the model with the given id.
    pub fn get(&self, id: ModelId) -> Result<&(dyn Classifier + Send), ClassifierError> {
        self.models
            .get(id)
            .map(|m| &**m)
            .ok_or(ClassifierError::UnknownModel { id })
    }

    /// Returns the model with the given id for training or testing.
    pub fn get_mut(
        &mut self,
        id: ModelId,
    ) -> Result<&mut (dyn Classifier + Send), ClassifierError> {
        match self.models.get_mut(id) {
            Some(m) => Ok(&mut **m),
            None => Err(ClassifierError::UnknownModel { id }),
        }
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if no model has been registered.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterates over all models in id order.
    pub fn iter(&self) -> impl Iterator<Item = ModelSummary> + '_ {
        self.models.iter().enumerate().map(|(id, m)| ModelSummary {
            id,
            kind: m.kind(),
            config: m.config(),
        })
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
