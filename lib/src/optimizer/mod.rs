use crate::model::ParamOps;

/// Trait for gradient-based optimizers.
///
/// Optimizers update model parameters from computed gradients. Training logic
/// (`Trainer`) is decoupled from the update rule, so any model whose parameters
/// implement [`ParamOps`] can be paired with any optimizer.
///
/// # Example
/// ```rust
/// use logistic_rs::model::logistic::LogisticParams;
/// use logistic_rs::optimizer::{Optimizer, SGD};
/// use ndarray::array;
///
/// let params = LogisticParams::new(array![0.5, 1.0]).unwrap();
/// let grads = LogisticParams::new(array![-0.1, 0.2]).unwrap();
/// let updated = SGD::new(0.1).step(&params, &grads);
/// assert!((updated.theta()[1] - 0.98).abs() < 1e-12);
/// ```
pub trait Optimizer<P> {
    /// Returns `params - learning_rate * gradients` (or the rule's equivalent).
    ///
    /// Inputs are not mutated; a new parameter value is returned.
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Plain stochastic gradient descent: `θ ← θ - η · ∇L(θ)`.
///
/// Stateless: no momentum, no adaptive step size.
#[derive(Clone, Copy, Debug)]
pub struct SGD {
    lr: f64,
}

impl SGD {
    /// Creates a new SGD optimizer with the specified learning rate.
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }

    /// Returns the current learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.lr
    }
}

impl<P: ParamOps> Optimizer<P> for SGD {
    fn step(&self, params: &P, grads: &P) -> P {
        // Using (-lr) enables single scaling operation instead of scale + subtract
        params.add(&grads.scale(-self.lr))
    }
}
