use ndarray::{Array1, ArrayView1};

use super::Float;


/// This trait provides the two methods needed to drive one training step of a
/// linear threshold unit.
pub trait LearningRule<F: Float> {
    /// This method maps the raw score `w.x + b` onto a class label. It is
    /// called on every sample, both during training and at prediction time.
    fn activate(&self, score: F) -> F;

    /// This method updates the weights and the intercept in place after a
    /// sample has been seen.
    ///
    /// It returns the prediction error `y - y_pred` for this sample, which is
    /// zero when the sample was already classified correctly. The fitting
    /// routine uses the returned error to detect convergence.
    fn update(
        &self,
        w: &mut Array1<F>,
        b: &mut F,
        x: ArrayView1<F>,
        y: F,
        y_pred: F,
        learning_rate: F,
    ) -> F;
}

/// The Rosenblatt perceptron rule
///
/// The classical error-driven rule for labels in {0, 1}. The weights move by
/// `learning_rate * (y - y_pred)` along the sample, so a correctly classified
/// sample contributes a zero step. On a linearly separable dataset the rule
/// reaches a separating hyperplane after finitely many updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rosenblatt;

impl<F: 'static + Float> LearningRule<F> for Rosenblatt {
    /// Step activation thresholded at zero, labels in {0, 1}.
    fn activate(&self, score: F) -> F {
        if score >= F::zero() {
            F::one()
        } else {
            F::zero()
        }
    }

    /// Applies the error-driven update `w += lr * (y - y_pred) * x` and
    /// `b += lr * (y - y_pred)`.
    fn update(
        &self,
        w: &mut Array1<F>,
        b: &mut F,
        x: ArrayView1<F>,
        y: F,
        y_pred: F,
        learning_rate: F,
    ) -> F {
        let error = y - y_pred;
        let step = learning_rate * error;
        w.scaled_add(step, &x);
        *b += step;
        error
    }
}

/// The Hebbian association rule
///
/// A correlation rule for labels in {-1, +1}. Every sample reinforces the
/// weights with `y * x` regardless of whether it was classified correctly,
/// and the learning rate plays no role. Repeated passes keep growing the
/// weights even once the dataset is classified perfectly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hebbian;

impl<F: 'static + Float> LearningRule<F> for Hebbian {
    /// Step activation thresholded at zero, labels in {-1, +1}.
    fn activate(&self, score: F) -> F {
        if score >= F::zero() {
            F::one()
        } else {
            -F::one()
        }
    }

    /// Applies the unconditional update `w += y * x` and `b += y`.
    fn update(
        &self,
        w: &mut Array1<F>,
        b: &mut F,
        x: ArrayView1<F>,
        y: F,
        y_pred: F,
        _learning_rate: F,
    ) -> F {
        w.scaled_add(y, &x);
        *b += y;
        y - y_pred
    }
}
