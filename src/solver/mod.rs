use ndarray::{Array1, ArrayView1, ArrayView2};

use super::Float;
use crate::rules::LearningRule;


/// Summary of one fitting run, reported back by [`train`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitLog {
    /// Number of passes over the dataset that were actually run.
    pub n_epochs: usize,
    /// Whether an epoch with zero misclassified samples was reached before
    /// the epoch budget ran out.
    pub converged: bool,
}

/// This function runs a single in-order pass over the dataset. For each
/// sample it computes the raw score `w.x + b`, activates it through the
/// learning rule and lets the rule update the weights and the intercept in
/// place. It returns the number of samples whose pre-update prediction
/// disagreed with the target.
pub fn train_epoch<F, R>(
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    rule: &R,
    w: &mut Array1<F>,
    b: &mut F,
    learning_rate: F,
) -> usize
where
    F: 'static + Float,
    R: LearningRule<F>,
{
    let mut n_errors = 0;
    for (x_i, &y_i) in X.rows().into_iter().zip(y.iter()) {
        let score = w.dot(&x_i) + *b;
        let y_pred = rule.activate(score);
        let error = rule.update(w, b, x_i, y_i, y_pred, learning_rate);
        if error != F::zero() {
            n_errors += 1;
        }
    }
    n_errors
}

/// This is the backbone function for the [`steplearn`] crate. It drives the
/// epoch loop around [`train_epoch`]: samples are visited in dataset order,
/// once per epoch, for at most `max_epochs` epochs.
///
/// Convergence is tracked on the pre-update predictions. The loop terminates
/// early after the first epoch in which every sample was predicted correctly;
/// the updates applied during that epoch are kept. For an error-driven rule
/// those updates are all zero, while an unconditional rule keeps reinforcing
/// the weights during the final epoch.
///
/// Exhausting `max_epochs` without convergence is not an error. The caller
/// reads the outcome from the returned [`FitLog`].
pub fn train<F, R>(
    X: ArrayView2<F>,
    y: ArrayView1<F>,
    rule: &R,
    w: &mut Array1<F>,
    b: &mut F,
    learning_rate: F,
    max_epochs: usize,
    verbose: bool,
) -> FitLog
where
    F: 'static + Float,
    R: LearningRule<F>,
{
    let mut n_epochs = 0;
    let mut converged = false;

    for epoch in 0..max_epochs {
        let n_errors = train_epoch(X, y, rule, w, b, learning_rate);
        n_epochs = epoch + 1;

        if verbose {
            println!("epoch: {} :: misclassified: {}", epoch + 1, n_errors);
        }

        if n_errors == 0 {
            converged = true;
            if verbose {
                println!("Converged after {} epochs.", epoch + 1);
            }
            break;
        }
    }

    FitLog {
        n_epochs,
        converged,
    }
}
