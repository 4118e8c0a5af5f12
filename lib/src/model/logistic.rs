//! Logistic model over a bias-augmented design matrix.
//!
//! Parameters are a single vector `θ` of length `d + 1`: `θ[0]` is the bias and
//! `θ[1..]` are the feature weights. During training the model sees inputs that
//! already carry a leading column of ones, so the bias receives its gradient
//! through that column like any other weight.
//!
//! - [`LogisticModel<Unfitted>`]: forward pass yields logits `X·θ`.
//! - [`LogisticModel<Fitted>`]: takes raw `(m, d)` features and returns
//!   probabilities `σ([1 | X]·θ)`.

use crate::backend::{add_bias_column, sigmoid, sigmoid_1d};
use crate::error::{ClassifierError, Result};
use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use ndarray::{s, Array1, Array2, ArrayView1};
use std::marker::PhantomData;

/// Trainable parameters: bias followed by weights.
///
/// `θ` always holds at least the bias.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticParams {
    pub(crate) theta: Array1<f64>,
}

impl LogisticParams {
    /// Wraps an explicit `θ` (bias first).
    ///
    /// # Errors
    /// `InvalidInput` if `theta` is empty.
    pub fn new(theta: Array1<f64>) -> Result<Self> {
        if theta.is_empty() {
            return Err(ClassifierError::InvalidInput(
                "Parameter vector must hold at least the bias".into(),
            ));
        }
        Ok(Self { theta })
    }

    /// All-zero parameters for `n_features` inputs (length `n_features + 1`).
    pub fn zeros(n_features: usize) -> Self {
        Self {
            theta: Array1::zeros(n_features + 1),
        }
    }

    pub fn theta(&self) -> ArrayView1<'_, f64> {
        self.theta.view()
    }

    pub fn bias(&self) -> f64 {
        self.theta[0]
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.theta.slice(s![1..])
    }

    /// Number of raw input features (`θ.len() - 1`).
    pub fn n_features(&self) -> usize {
        self.theta.len() - 1
    }
}

impl ParamOps for LogisticParams {
    fn add(&self, other: &Self) -> Self {
        Self {
            theta: &self.theta + &other.theta,
        }
    }

    fn scale(&self, scalar: f64) -> Self {
        Self {
            theta: &self.theta * scalar,
        }
    }

    fn first_non_finite(&self) -> Option<f64> {
        self.theta.iter().copied().find(|v| !v.is_finite())
    }
}

/// Logistic model with its training state at the type level.
#[derive(Clone, Debug)]
pub struct LogisticModel<S> {
    params: LogisticParams,
    _state: PhantomData<S>,
}

/// Alias for an **unfitted** logistic model, used as the trainer's input.
pub type LogisticRegression = LogisticModel<Unfitted>;

impl LogisticRegression {
    /// Zero-initialized model for `n_features` raw inputs.
    pub fn new(n_features: usize) -> Self {
        Self::from_params(LogisticParams::zeros(n_features))
    }

    /// Constructs a model from explicit parameters (e.g. for tests).
    pub fn from_params(params: LogisticParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

/// Forward: `z = X·θ` on the augmented matrix.
/// Backward: `∇θ = Xᵀ · ∂L/∂z`.
impl TrainableModel for LogisticModel<Unfitted> {
    type Input = Array2<f64>;
    type Prediction = Array1<f64>;
    type Params = LogisticParams;
    type Gradients = LogisticParams;
    type Output = LogisticModel<Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.dot(&self.params.theta)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        LogisticParams {
            theta: x.t().dot(grad_output),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = params.clone();
    }

    fn into_fitted(self) -> LogisticModel<Fitted> {
        LogisticModel {
            params: self.params,
            _state: PhantomData,
        }
    }
}

impl LogisticModel<Fitted> {
    pub fn params(&self) -> &LogisticParams {
        &self.params
    }

    /// Logits `[1 | X]·θ` for raw features.
    pub fn decision_function(&self, x: &Array2<f64>) -> Array1<f64> {
        add_bias_column(x.view()).dot(&self.params.theta)
    }
}

/// Probability of the positive class.
///
/// # Panics
/// If the input width differs from the fitted feature count.
impl InferenceModel for LogisticModel<Fitted> {
    type InputSingle = Array1<f64>;
    type OutputSingle = f64;
    type InputBatch = Array2<f64>;
    type OutputBatch = Array1<f64>;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle {
        sigmoid(self.params.bias() + self.params.weights().dot(input))
    }

    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch {
        sigmoid_1d(&self.decision_function(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // === ParamOps Tests ===

    #[test]
    fn test_param_ops_add() {
        let p1 = LogisticParams {
            theta: array![0.5, 1.0, 2.0],
        };
        let p2 = LogisticParams {
            theta: array![0.5, 0.5, 1.0],
        };
        assert_eq!(p1.add(&p2).theta, array![1.0, 1.5, 3.0]);
    }

    #[test]
    fn test_param_ops_scale_negative() {
        let p = LogisticParams {
            theta: array![1.0, -2.0],
        };
        assert_eq!(p.scale(-0.5).theta, array![-0.5, 1.0]);
    }

    #[test]
    fn test_params_accessors() {
        let p = LogisticParams {
            theta: array![0.25, 1.0, 2.0, 3.0],
        };
        assert_eq!(p.bias(), 0.25);
        assert_eq!(p.weights().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(p.n_features(), 3);
    }

    #[test]
    fn test_params_new_rejects_empty() {
        let err = LogisticParams::new(Array1::zeros(0)).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));

        let p = LogisticParams::new(array![-1.0]).unwrap();
        assert_eq!(p.bias(), -1.0);
        assert_eq!(p.n_features(), 0);
        assert!(p.weights().is_empty());
    }

    #[test]
    fn test_first_non_finite() {
        let ok = LogisticParams::new(array![0.0, 1e300]).unwrap();
        assert_eq!(ok.first_non_finite(), None);

        let inf = LogisticParams::new(array![0.0, f64::INFINITY]).unwrap();
        assert_eq!(inf.first_non_finite(), Some(f64::INFINITY));

        let nan = LogisticParams::new(array![f64::NAN, 1.0]).unwrap();
        assert!(nan.first_non_finite().unwrap().is_nan());
    }

    // === Unfitted Tests ===

    #[test]
    fn test_new_zero_initialized() {
        let model = LogisticRegression::new(4);
        assert_eq!(model.params().theta.len(), 5);
        assert!(model.params().theta.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_forward_on_augmented_input() {
        let model = LogisticRegression::from_params(LogisticParams {
            theta: array![1.0, 2.0, -1.0],
        });
        // rows: [1, x1, x2]
        let x = array![[1.0, 1.0, 1.0], [1.0, 0.0, 2.0]];
        // [1 + 2 - 1, 1 + 0 - 2] = [2, -1]
        assert_eq!(model.forward(&x), array![2.0, -1.0]);
    }

    #[test]
    fn test_backward_includes_bias_column() {
        let model = LogisticRegression::new(1);
        let x = array![[1.0, 2.0], [1.0, 4.0]];
        let grad = array![0.5, 0.25];
        let grads = model.backward(&x, &grad);
        // bias: 0.5 + 0.25; weight: 2*0.5 + 4*0.25
        assert!((grads.theta[0] - 0.75).abs() < 1e-12);
        assert!((grads.theta[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_update_params() {
        let mut model = LogisticRegression::new(2);
        let p = LogisticParams {
            theta: array![1.0, 2.0, 3.0],
        };
        model.update_params(&p);
        assert_eq!(model.params(), &p);
    }

    // === Fitted Tests ===

    #[test]
    fn test_into_fitted_keeps_params() {
        let p = LogisticParams {
            theta: array![0.5, -1.0],
        };
        let fitted = LogisticRegression::from_params(p.clone()).into_fitted();
        assert_eq!(fitted.params(), &p);
    }

    #[test]
    fn test_zero_params_predict_half() {
        let fitted = LogisticRegression::new(3).into_fitted();
        let probs = fitted.predict_batch(&array![[1.0, 2.0, 3.0], [-4.0, 0.0, 9.0]]);
        assert_eq!(probs.to_vec(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_predict_single_matches_batch() {
        let fitted = LogisticRegression::from_params(LogisticParams {
            theta: array![-0.5, 1.5, 0.25],
        })
        .into_fitted();
        let x = array![[2.0, -1.0], [0.0, 4.0]];
        let batch = fitted.predict_batch(&x);
        for (i, row) in x.rows().into_iter().enumerate() {
            let single = fitted.predict(&row.to_owned());
            assert!((single - batch[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_decision_function_adds_bias() {
        let fitted = LogisticRegression::from_params(LogisticParams {
            theta: array![3.0, 2.0],
        })
        .into_fitted();
        assert_eq!(fitted.decision_function(&array![[1.0], [-1.0]]), array![5.0, 1.0]);
    }

    #[test]
    fn test_predict_does_not_mutate_input() {
        let fitted = LogisticRegression::from_params(LogisticParams {
            theta: array![0.0, 1.0],
        })
        .into_fitted();
        let input = array![[1.0], [2.0]];
        let original = input.clone();
        let _ = fitted.predict_batch(&input);
        assert_eq!(input, original);
    }
}
