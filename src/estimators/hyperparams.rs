use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use crate::rules::{LearningRule, Rosenblatt};
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a perceptron
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronValidParams<F, R> {
    learning_rate: F,
    max_epochs: usize,
    warm_start: bool,
    verbose: bool,
    rule: R,
}

impl<F: Float, R> PerceptronValidParams<F, R> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn warm_start(&self) -> bool {
        self.warm_start
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

/// A hyper-parameter set during construction
///
/// Configures the per-sample training schedule:
/// ```ignore
/// for epoch in 0..max_epochs:
///     for (x, y) in dataset:
///         y_pred = rule.activate(w.x + b)
///         rule.update(w, b, x, y, y_pred, learning_rate)
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronParams<F, R>(PerceptronValidParams<F, R>);

impl<F: Float> Default for PerceptronParams<F, Rosenblatt> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and build a Perceptron classifier
impl<F: Float> PerceptronParams<F, Rosenblatt> {
    /// Create default perceptron hyper parameters with the error-driven
    /// [`Rosenblatt`] rule
    pub fn new() -> PerceptronParams<F, Rosenblatt> {
        Self(PerceptronValidParams {
            learning_rate: F::cast(0.01),
            max_epochs: 100,
            warm_start: false,
            verbose: false,
            rule: Rosenblatt,
        })
    }
}

impl<F: Float, R> PerceptronParams<F, R> {
    /// Set the step size applied to each error-driven weight update.
    /// Defaults to `0.01` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the upper bound on training passes over the dataset.
    /// Defaults to `100` if not set.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.0.max_epochs = max_epochs;
        self
    }

    /// Continue from the previously fitted weights on the next fit instead
    /// of re-zeroing them.
    /// Defaults to `false` if not set.
    pub fn warm_start(mut self, warm_start: bool) -> Self {
        self.0.warm_start = warm_start;
        self
    }

    /// Sets the verbosity of the training loop.
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }

    /// Swap the learning rule driving activation and weight updates.
    /// Defaults to [`Rosenblatt`] if not set.
    pub fn rule<R2: LearningRule<F>>(self, rule: R2) -> PerceptronParams<F, R2> {
        PerceptronParams(PerceptronValidParams {
            learning_rate: self.0.learning_rate,
            max_epochs: self.0.max_epochs,
            warm_start: self.0.warm_start,
            verbose: self.0.verbose,
            rule,
        })
    }
}

impl<F: Float, R> ParamGuard for PerceptronParams<F, R> {
    type Checked = PerceptronValidParams<F, R>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.learning_rate <= F::zero() {
            Err(EstimatorError::InvalidLearningRate(
                self.0.learning_rate.to_f32().unwrap(),
            ))
        } else if self.0.max_epochs == 0 {
            Err(EstimatorError::InvalidMaxEpochs(self.0.max_epochs))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
