//! Ranking orchestration.
//!
//! One model instance per content kind, loaded from its blob or bootstrapped
//! on cold start. Ranking is a single blocking pass over the whole batch; the
//! persisted state carries no locking, so concurrent updates must be
//! serialized by the caller.

use std::path::Path;

use ndarray::{Array1, Array2};

use super::model::RankingModel;
use super::store::ModelStore;
use crate::content::ContentKind;
use crate::core::errors::ScoutError;
use crate::features::{feature_names, FeatureVector};

const PAPER_BLOB: &str = "ranker_paper.json";
const ARTICLE_BLOB: &str = "ranker_article.json";

pub struct Ranker {
    paper_model: RankingModel,
    article_model: RankingModel,
    paper_store: ModelStore,
    article_store: ModelStore,
}

impl Ranker {
    /// Load both models from the model directory, bootstrapping any that is
    /// missing or unreadable. Never fails: a cold or corrupted state still
    /// yields a callable (if meaningless) model.
    pub fn open(model_dir: &Path) -> Self {
        let paper_store = ModelStore::new(model_dir.join(PAPER_BLOB));
        let article_store = ModelStore::new(model_dir.join(ARTICLE_BLOB));

        let paper_model = load_or_bootstrap(&paper_store, ContentKind::Paper);
        let article_model = load_or_bootstrap(&article_store, ContentKind::Article);

        Self {
            paper_model,
            article_model,
            paper_store,
            article_store,
        }
    }

    pub fn model(&self, kind: ContentKind) -> &RankingModel {
        match kind {
            ContentKind::Paper => &self.paper_model,
            ContentKind::Article => &self.article_model,
        }
    }

    /// Rank a batch. `items` and `features` are parallel sequences; a length
    /// or schema mismatch is a caller bug and fails loudly. The result is a
    /// permutation of the input sorted by score descending, stable on ties.
    pub fn rank<T>(
        &self,
        kind: ContentKind,
        items: Vec<T>,
        features: &[FeatureVector],
    ) -> Result<Vec<(T, f64)>, ScoutError> {
        if items.len() != features.len() {
            return Err(ScoutError::InvalidInput(format!(
                "items and features must have the same length: {} != {}",
                items.len(),
                features.len()
            )));
        }
        if let Some(mismatch) = features.iter().find(|f| f.kind() != kind) {
            return Err(ScoutError::InvalidInput(format!(
                "feature vector of kind {} in a {} batch",
                mismatch.kind().as_str(),
                kind.as_str()
            )));
        }

        if items.is_empty() {
            return Ok(Vec::new());
        }

        let model = self.model(kind);
        let x = materialize(model.feature_names(), features);
        let scores = model.predict(&x)?;

        let mut ranked: Vec<(T, f64)> = items.into_iter().zip(scores).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Ok(ranked)
    }

    /// Full refit on observed engagement signal, then persist. A persistence
    /// failure is logged and swallowed; ranking continues on the in-memory
    /// model.
    pub fn update(
        &mut self,
        kind: ContentKind,
        x: &Array2<f64>,
        y: &Array1<f64>,
    ) -> Result<(), ScoutError> {
        let (model, store) = match kind {
            ContentKind::Paper => (&mut self.paper_model, &self.paper_store),
            ContentKind::Article => (&mut self.article_model, &self.article_store),
        };

        model.fit(x, y)?;

        if let Err(err) = store.save(model) {
            tracing::warn!(
                "could not persist {} model to {}: {}",
                kind.as_str(),
                store.path().display(),
                err
            );
        } else {
            tracing::info!("updated {} ranking model", kind.as_str());
        }

        Ok(())
    }
}

fn load_or_bootstrap(store: &ModelStore, kind: ContentKind) -> RankingModel {
    if let Some(model) = store.load() {
        tracing::info!("loaded {} ranking model", kind.as_str());
        return model;
    }

    let mut rng = rand::rng();
    let model = RankingModel::bootstrap(feature_names(kind), &mut rng);
    if let Err(err) = store.save(&model) {
        tracing::warn!(
            "could not persist bootstrap {} model: {}",
            kind.as_str(),
            err
        );
    }
    tracing::info!("created bootstrap {} ranking model", kind.as_str());
    model
}

/// Feature values in the model's fixed name order; names absent from a
/// vector's schema contribute 0.0.
fn materialize(names: &[String], features: &[FeatureVector]) -> Array2<f64> {
    Array2::from_shape_fn((features.len(), names.len()), |(row, col)| {
        features[row].value_or_zero(&names[col])
    })
}
