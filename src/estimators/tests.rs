extern crate ndarray;

use ndarray::{array, Array1, Array2};

use crate::datasets::DatasetBase;
use crate::estimators::error::EstimatorError;
use crate::estimators::param_guard::ParamGuard;
use crate::estimators::perceptron::Perceptron;
use crate::estimators::traits::{Fit, PredictModel};
use crate::helpers::test_helpers::{assert_array_all_close, generate_separable_data};
use crate::rules::Hebbian;

fn and_gate() -> DatasetBase<Array2<f64>, Array1<f64>> {
    DatasetBase::from((
        array![[0., 0.], [0., 1.], [1., 0.], [1., 1.]],
        array![0., 0., 0., 1.],
    ))
}

fn signed_and_gate() -> DatasetBase<Array2<f64>, Array1<f64>> {
    DatasetBase::from((
        array![[-1., -1.], [-1., 1.], [1., -1.], [1., 1.]],
        array![-1., -1., -1., 1.],
    ))
}

fn signed_or_gate() -> DatasetBase<Array2<f64>, Array1<f64>> {
    DatasetBase::from((
        array![[-1., -1.], [-1., 1.], [1., -1.], [1., 1.]],
        array![-1., 1., 1., 1.],
    ))
}

#[test]
fn test_and_gate_converges() {
    let mut clf = Perceptron::params()
        .learning_rate(0.1)
        .max_epochs(10)
        .build()
        .unwrap();
    clf.fit(&and_gate()).unwrap();

    assert!(clf.converged().unwrap());
    assert_eq!(clf.n_epochs().unwrap(), 4);
    assert_eq!(clf.weights().unwrap().len(), 2);

    let preds = clf
        .predict_batch(and_gate().design_matrix().view())
        .unwrap();
    assert_eq!(preds, array![0., 0., 0., 1.]);
}

#[test]
fn test_predict_is_pure() {
    let mut clf = Perceptron::params()
        .learning_rate(0.1)
        .max_epochs(10)
        .build()
        .unwrap();
    let dataset = and_gate();
    clf.fit(&dataset).unwrap();

    let x = array![1., 1.];
    assert_eq!(clf.predict(x.view()).unwrap(), clf.predict(x.view()).unwrap());

    // Batch prediction agrees with per-sample prediction, in row order.
    let preds = clf
        .predict_batch(dataset.design_matrix().view())
        .unwrap();
    for (row, &label) in dataset
        .design_matrix()
        .rows()
        .into_iter()
        .zip(preds.iter())
    {
        assert_eq!(clf.predict(row).unwrap(), label);
    }
}

#[test]
fn test_refit_is_deterministic() {
    let dataset = and_gate();

    let mut a = Perceptron::params()
        .learning_rate(0.1)
        .max_epochs(10)
        .build()
        .unwrap();
    let mut b = Perceptron::params()
        .learning_rate(0.1)
        .max_epochs(10)
        .build()
        .unwrap();
    a.fit(&dataset).unwrap();
    b.fit(&dataset).unwrap();

    assert_eq!(a.weights().unwrap(), b.weights().unwrap());
    assert_eq!(a.intercept().unwrap(), b.intercept().unwrap());

    // Without warm start a second fit restarts from zero and lands on the
    // same solution.
    a.fit(&dataset).unwrap();
    assert_eq!(a.weights().unwrap(), b.weights().unwrap());
    assert_eq!(a.intercept().unwrap(), b.intercept().unwrap());
}

#[test]
fn test_hebbian_and_gate_single_pass() {
    let mut clf = Perceptron::params()
        .rule(Hebbian)
        .max_epochs(1)
        .build()
        .unwrap();
    clf.fit(&signed_and_gate()).unwrap();

    assert_array_all_close(clf.weights().unwrap(), array![2., 2.].view(), 1e-12);
    assert_eq!(clf.intercept().unwrap(), -2.);

    let preds = clf
        .predict_batch(signed_and_gate().design_matrix().view())
        .unwrap();
    assert_eq!(preds, array![-1., -1., -1., 1.]);
}

#[test]
fn test_hebbian_accumulates_across_fits_with_warm_start() {
    let mut clf = Perceptron::params()
        .rule(Hebbian)
        .max_epochs(1)
        .warm_start(true)
        .build()
        .unwrap();
    clf.fit(&signed_and_gate()).unwrap();
    clf.fit(&signed_or_gate()).unwrap();

    assert_array_all_close(clf.weights().unwrap(), array![4., 4.].view(), 1e-12);
    assert_eq!(clf.intercept().unwrap(), 0.);

    let preds = clf
        .predict_batch(signed_or_gate().design_matrix().view())
        .unwrap();
    assert_eq!(preds, array![-1., 1., 1., 1.]);
}

#[test]
fn test_refit_without_warm_start_resets_weights() {
    let mut clf = Perceptron::params()
        .rule(Hebbian)
        .max_epochs(1)
        .build()
        .unwrap();
    clf.fit(&signed_and_gate()).unwrap();
    clf.fit(&signed_and_gate()).unwrap();

    // Same state as a single pass from zero.
    assert_array_all_close(clf.weights().unwrap(), array![2., 2.].view(), 1e-12);
    assert_eq!(clf.intercept().unwrap(), -2.);
}

#[test]
fn test_not_fitted() {
    let clf = Perceptron::<f64>::params().build().unwrap();

    assert!(!clf.is_fitted());
    assert_eq!(
        clf.predict(array![0., 1.].view()),
        Err(EstimatorError::NotFitted)
    );
    assert_eq!(
        clf.predict_batch(array![[0., 1.]].view()),
        Err(EstimatorError::NotFitted)
    );
    assert!(matches!(clf.weights(), Err(EstimatorError::NotFitted)));
    assert_eq!(clf.intercept(), Err(EstimatorError::NotFitted));
    assert_eq!(clf.converged(), Err(EstimatorError::NotFitted));
}

#[test]
fn test_invalid_hyperparameters() {
    assert_eq!(
        Perceptron::<f64>::params().learning_rate(0.).build().err(),
        Some(EstimatorError::InvalidLearningRate(0.))
    );
    assert_eq!(
        Perceptron::<f64>::params()
            .learning_rate(-0.5)
            .check()
            .err(),
        Some(EstimatorError::InvalidLearningRate(-0.5))
    );
    assert_eq!(
        Perceptron::<f64>::params().max_epochs(0).build().err(),
        Some(EstimatorError::InvalidMaxEpochs(0))
    );
    assert!(Perceptron::<f64>::params().check_ref().is_ok());
}

#[test]
fn test_dimension_mismatch_on_predict() {
    let mut clf = Perceptron::params()
        .learning_rate(0.1)
        .max_epochs(10)
        .build()
        .unwrap();
    clf.fit(&and_gate()).unwrap();

    assert_eq!(
        clf.predict(array![1., 0., 1.].view()),
        Err(EstimatorError::DimensionMismatch(2, 3))
    );
}

#[test]
fn test_warm_start_rejects_width_change() {
    let mut clf = Perceptron::params()
        .learning_rate(0.1)
        .max_epochs(10)
        .warm_start(true)
        .build()
        .unwrap();
    clf.fit(&and_gate()).unwrap();

    let wider = DatasetBase::from((array![[0., 0., 1.]], array![1.]));
    assert_eq!(
        clf.fit(&wider),
        Err(EstimatorError::DimensionMismatch(2, 3))
    );

    // The failed fit left the previous state usable.
    assert!(clf.is_fitted());
    let preds = clf
        .predict_batch(and_gate().design_matrix().view())
        .unwrap();
    assert_eq!(preds, array![0., 0., 0., 1.]);
}

#[test]
fn test_empty_dataset() {
    let mut clf = Perceptron::<f64>::params().build().unwrap();
    let empty = DatasetBase::from((Array2::<f64>::zeros((0, 2)), Array1::<f64>::zeros(0)));

    assert_eq!(clf.fit(&empty), Err(EstimatorError::EmptyDataset));
    assert!(!clf.is_fitted());
}

#[test]
fn test_targets_mismatch() {
    let mut clf = Perceptron::<f64>::params().build().unwrap();
    let dataset = DatasetBase::from((array![[0., 0.], [1., 1.]], array![0.]));

    assert_eq!(
        clf.fit(&dataset),
        Err(EstimatorError::TargetsMismatch(2, 1))
    );
}

#[test]
fn test_separable_data_is_memorized_after_convergence() {
    let (X, y) = generate_separable_data(40, 3);
    let dataset = DatasetBase::from((X, y));

    let mut clf = Perceptron::params()
        .learning_rate(0.1)
        .max_epochs(1000)
        .build()
        .unwrap();
    clf.fit(&dataset).unwrap();

    assert!(clf.converged().unwrap());
    assert_eq!(clf.weights().unwrap().len(), 3);

    let preds = clf
        .predict_batch(dataset.design_matrix().view())
        .unwrap();
    assert_eq!(&preds, dataset.targets());
}
