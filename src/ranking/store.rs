//! Persisted model state.
//!
//! One serialized blob per content kind at a fixed path under the model
//! directory, carrying the weights together with the feature-name ordering.
//! The format is opaque to the rest of the system; only round-trip
//! consistency matters.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::model::RankingModel;
use crate::core::errors::ScoutError;

#[derive(Debug, Serialize, Deserialize)]
struct ModelState {
    weights: Vec<f64>,
    bias: f64,
    feature_names: Vec<String>,
    bootstrap: bool,
}

#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Deserialize the persisted model. Any failure (missing file, corrupt
    /// blob, mismatched shapes) returns None after a warning; the caller
    /// falls back to a bootstrap model rather than propagating the error.
    pub fn load(&self) -> Option<RankingModel> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(
                    "could not read model blob {}: {}. Falling back to bootstrap.",
                    self.path.display(),
                    err
                );
                return None;
            }
        };

        let state: ModelState = match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(
                    "could not parse model blob {}: {}. Falling back to bootstrap.",
                    self.path.display(),
                    err
                );
                return None;
            }
        };

        match RankingModel::from_parts(
            state.weights,
            state.bias,
            state.feature_names,
            state.bootstrap,
        ) {
            Ok(model) => Some(model),
            Err(err) => {
                tracing::warn!(
                    "model blob {} is inconsistent: {}. Falling back to bootstrap.",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    pub fn save(&self, model: &RankingModel) -> Result<(), ScoutError> {
        let state = ModelState {
            weights: model.weights().to_vec(),
            bias: model.bias(),
            feature_names: model.feature_names().to_vec(),
            bootstrap: model.is_bootstrap(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(ScoutError::persistence)?;
        }

        let contents = serde_json::to_string(&state).map_err(ScoutError::persistence)?;
        fs::write(&self.path, contents).map_err(ScoutError::persistence)?;
        Ok(())
    }
}
