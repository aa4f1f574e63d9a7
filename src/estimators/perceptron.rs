extern crate ndarray;

use ndarray::{Array1, ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2, ViewRepr};

use super::error::{EstimatorError, Result};
use super::hyperparams::{PerceptronParams, PerceptronValidParams};
use super::param_guard::ParamGuard;
use super::traits::{Fit, PredictModel};
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::rules::{LearningRule, Rosenblatt};
use crate::solver::train;
use crate::Float;

/// The part of the estimator a call to `fit` mutates: the learned
/// coefficients together with the outcome of the last training run.
#[derive(Debug, Clone, PartialEq)]
struct ModelState<F> {
    weights: Array1<F>,
    intercept: F,
    n_epochs: usize,
    converged: bool,
}

impl<F: Float> ModelState<F> {
    fn zeros(n_features: usize) -> Self {
        ModelState {
            weights: Array1::<F>::zeros(n_features),
            intercept: F::zero(),
            n_epochs: 0,
            converged: false,
        }
    }
}

/// The Perceptron estimator
///
/// A binary linear classifier trained with per-sample step-rule updates. The
/// update policy is pluggable: the default [`Rosenblatt`] rule learns from
/// prediction errors on {0, 1} labels, while [`crate::rules::Hebbian`]
/// reinforces unconditionally on {-1, +1} labels. The model state is empty
/// until the first successful fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron<F, R = Rosenblatt> {
    params: PerceptronValidParams<F, R>,
    state: Option<ModelState<F>>,
}

impl<F: Float> Perceptron<F, Rosenblatt> {
    /// This method instantiates a [`Perceptron`] builder with default
    /// hyperparameters and the error-driven [`Rosenblatt`] rule.
    pub fn params() -> PerceptronParams<F, Rosenblatt> {
        PerceptronParams::new()
    }
}

impl<F: Float, R: LearningRule<F>> PerceptronParams<F, R> {
    /// Checks the hyperparameters and seeds an unfitted classifier with them.
    pub fn build(self) -> Result<Perceptron<F, R>> {
        Ok(Perceptron {
            params: self.check()?,
            state: None,
        })
    }
}

impl<F: Float, R> Perceptron<F, R> {
    fn fitted(&self) -> Result<&ModelState<F>> {
        self.state.as_ref().ok_or(EstimatorError::NotFitted)
    }

    /// This method is a getter for the learned weight vector.
    pub fn weights(&self) -> Result<ArrayBase<ViewRepr<&F>, Ix1>> {
        Ok(self.fitted()?.weights.view())
    }

    /// This method is a getter for the learned intercept.
    pub fn intercept(&self) -> Result<F> {
        Ok(self.fitted()?.intercept)
    }

    /// Number of passes over the dataset the last fit ran.
    pub fn n_epochs(&self) -> Result<usize> {
        Ok(self.fitted()?.n_epochs)
    }

    /// Whether the last fit reached an epoch with zero misclassified samples
    /// within its epoch budget.
    pub fn converged(&self) -> Result<bool> {
        Ok(self.fitted()?.converged)
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }
}

/// This implements the epoch-loop training procedure for dense design
/// matrices.
impl<F, D, T, R> Fit<ArrayBase<D, Ix2>, T, EstimatorError> for Perceptron<F, R>
where
    F: 'static + Float,
    D: Data<Elem = F>,
    T: AsSingleTargets<Elem = F>,
    R: LearningRule<F>,
{
    /// This method fits the classifier to a dataset, visiting samples in
    /// dataset order for at most `max_epochs` passes. The weights are
    /// re-zeroed first, unless warm start is configured and a previous fit
    /// left a state with a matching feature width. On any error the previous
    /// model state is left untouched.
    fn fit(&mut self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<()> {
        let X = dataset.design_matrix();
        let y = dataset.targets().as_single_targets();

        let n_samples = X.n_samples();
        let n_features = X.n_features();

        if n_samples == 0 {
            return Err(EstimatorError::EmptyDataset);
        }
        if y.len() != n_samples {
            return Err(EstimatorError::TargetsMismatch(n_samples, y.len()));
        }
        if self.params.warm_start() {
            if let Some(state) = &self.state {
                if state.weights.len() != n_features {
                    return Err(EstimatorError::DimensionMismatch(
                        state.weights.len(),
                        n_features,
                    ));
                }
            }
        }

        let mut state = match self.state.take() {
            Some(prev) if self.params.warm_start() => prev,
            _ => ModelState::zeros(n_features),
        };

        let log = train(
            X.view(),
            y,
            self.params.rule(),
            &mut state.weights,
            &mut state.intercept,
            self.params.learning_rate(),
            self.params.max_epochs(),
            self.params.verbose(),
        );

        state.n_epochs = log.n_epochs;
        state.converged = log.converged;
        self.state = Some(state);

        Ok(())
    }
}

impl<F, R> PredictModel<F, EstimatorError> for Perceptron<F, R>
where
    F: 'static + Float,
    R: LearningRule<F>,
{
    /// This method predicts the class label of a single sample from the
    /// current model state, without mutating it.
    fn predict(&self, x: ArrayView1<F>) -> Result<F> {
        let state = self.fitted()?;
        if x.len() != state.weights.len() {
            return Err(EstimatorError::DimensionMismatch(
                state.weights.len(),
                x.len(),
            ));
        }
        let score = state.weights.dot(&x) + state.intercept;
        Ok(self.params.rule().activate(score))
    }

    /// This method predicts one label per row of the input, preserving the
    /// row order.
    fn predict_batch(&self, X: ArrayView2<F>) -> Result<Array1<F>> {
        let labels = X
            .rows()
            .into_iter()
            .map(|x| self.predict(x))
            .collect::<Result<Vec<F>>>()?;
        Ok(Array1::from_vec(labels))
    }
}
