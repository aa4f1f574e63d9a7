use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a
/// combination of design matrix and targets). The estimator owns its model
/// state and may be fitted again: depending on its configuration a new fit
/// either restarts from scratch or continues from the current state.
pub trait Fit<DM: DesignMatrix, T: AsSingleTargets, E: std::error::Error> {
    fn fit(&mut self, dataset: &DatasetBase<DM, T>) -> Result<(), E>;
}

/// Predict trait
///
/// Inference on a fitted classifier. Both methods are pure with respect to
/// the model state: repeated calls with identical inputs return identical
/// labels.
pub trait PredictModel<F, E: std::error::Error> {
    /// Predicts the class label of a single sample.
    fn predict(&self, x: ArrayView1<F>) -> Result<F, E>;

    /// Predicts one label per row of the input, preserving the row order.
    fn predict_batch(&self, X: ArrayView2<F>) -> Result<Array1<F>, E>;
}
