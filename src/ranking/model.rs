//! Trainable relevance regressor.
//!
//! A ridge-regularized linear model fit by gradient descent over `ndarray`.
//! The ordered feature-name list is part of the model's contract: inputs are
//! always materialized in that order, and a reordered list silently corrupts
//! predictions, so the names travel with the weights through persistence.

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::core::errors::ScoutError;

const FIT_ITERATIONS: usize = 2000;
const LEARNING_RATE: f64 = 0.1;
const L2_PENALTY: f64 = 1e-3;
const BOOTSTRAP_ROWS: usize = 100;

#[derive(Debug, Clone)]
pub struct RankingModel {
    weights: Array1<f64>,
    bias: f64,
    feature_names: Vec<String>,
    bootstrap: bool,
}

impl RankingModel {
    /// Placeholder model fit on uniform random data, so the system is
    /// callable from cold start. Its predictions carry no real meaning and
    /// `is_bootstrap` stays true until a real fit replaces them.
    pub fn bootstrap<R: Rng>(feature_names: &[&str], rng: &mut R) -> Self {
        let dims = feature_names.len();
        let x = Array2::from_shape_fn((BOOTSTRAP_ROWS, dims), |_| rng.random::<f64>());
        let y = Array1::from_shape_fn(BOOTSTRAP_ROWS, |_| rng.random::<f64>());

        let mut model = Self {
            weights: Array1::zeros(dims),
            bias: 0.0,
            feature_names: feature_names.iter().map(|s| s.to_string()).collect(),
            bootstrap: true,
        };
        model.fit_in_place(&x, &y);
        model.bootstrap = true;
        model
    }

    pub fn from_parts(
        weights: Vec<f64>,
        bias: f64,
        feature_names: Vec<String>,
        bootstrap: bool,
    ) -> Result<Self, ScoutError> {
        if weights.len() != feature_names.len() {
            return Err(ScoutError::Persistence(format!(
                "weight/name count mismatch: {} != {}",
                weights.len(),
                feature_names.len()
            )));
        }
        Ok(Self {
            weights: Array1::from_vec(weights),
            bias,
            feature_names,
            bootstrap,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn is_bootstrap(&self) -> bool {
        self.bootstrap
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ScoutError> {
        if x.ncols() != self.weights.len() {
            return Err(ScoutError::InvalidInput(format!(
                "feature matrix has {} columns, model expects {}",
                x.ncols(),
                self.weights.len()
            )));
        }
        Ok(x.dot(&self.weights) + self.bias)
    }

    /// Full refit on new training signal. Clears the bootstrap flag.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ScoutError> {
        if x.nrows() != y.len() {
            return Err(ScoutError::InvalidInput(format!(
                "feature matrix has {} rows, target vector has {}",
                x.nrows(),
                y.len()
            )));
        }
        if x.ncols() != self.weights.len() {
            return Err(ScoutError::InvalidInput(format!(
                "feature matrix has {} columns, model expects {}",
                x.ncols(),
                self.weights.len()
            )));
        }
        if x.nrows() == 0 {
            return Err(ScoutError::InvalidInput(
                "cannot fit on an empty training set".to_string(),
            ));
        }

        self.fit_in_place(x, y);
        self.bootstrap = false;
        Ok(())
    }

    fn fit_in_place(&mut self, x: &Array2<f64>, y: &Array1<f64>) {
        let n = x.nrows() as f64;
        let mut weights = Array1::<f64>::zeros(self.weights.len());
        let mut bias = 0.0_f64;

        for _ in 0..FIT_ITERATIONS {
            let residual = x.dot(&weights) + bias - y;
            let grad_w = x.t().dot(&residual) * (2.0 / n) + &weights * (2.0 * L2_PENALTY);
            let grad_b = residual.sum() * (2.0 / n);

            weights = weights - grad_w * LEARNING_RATE;
            bias -= grad_b * LEARNING_RATE;
        }

        self.weights = weights;
        self.bias = bias;
    }
}
