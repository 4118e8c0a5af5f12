use crate::backend::{sigmoid_1d, softplus};
use ndarray::{Array1, Zip};

/// A trait for differentiable loss functions used during model training.
///
/// Implementors must define:
/// - How to compute the scalar loss value (for logging/metrics).
/// - How to compute the gradient of the loss w.r.t. the model's predictions.
///
/// This gradient is passed to the model's `backward()` method to update parameters.
pub trait Loss {
    /// Computes the scalar loss value (for logging/metrics).
    fn loss(&self, prediction: &Array1<f64>, target: &Array1<f64>) -> f64;

    /// Computes the gradient of the loss w.r.t. the prediction: ∂L/∂pred.
    fn grad_wrt_prediction(&self, prediction: &Array1<f64>, target: &Array1<f64>)
        -> Array1<f64>;
}

/// Binary cross-entropy on logits.
///
/// Computes the mean of `-(t * log(σ(z)) + (1-t) * log(1 - σ(z)))`
/// using the stable formulation `max(z,0) - z*t + log(1 + exp(-|z|))`,
/// so `log(0)` is never evaluated.
///
/// Gradient w.r.t. logits: `∂L/∂z = (σ(z) - t) / n`
#[derive(Clone, Copy, Debug, Default)]
pub struct BCEWithLogitsLoss;

impl Loss for BCEWithLogitsLoss {
    fn loss(&self, logits: &Array1<f64>, targets: &Array1<f64>) -> f64 {
        let per_sample = Zip::from(logits)
            .and(targets)
            .map_collect(|&z, &t| softplus(z) - z * t);
        per_sample.mean().unwrap_or(0.0)
    }

    fn grad_wrt_prediction(&self, logits: &Array1<f64>, targets: &Array1<f64>) -> Array1<f64> {
        let n = logits.len().max(1) as f64;
        (sigmoid_1d(logits) - targets) / n
    }
}
