//! Models with compile-time training state.
//!
//! A model is `Model<Unfitted>` while it is being trained and `Model<Fitted>`
//! once training is over. Only the fitted form exposes prediction.

pub mod logistic;
pub mod state;

pub use state::{Fitted, Unfitted};

/// Training-side interface: forward pass, backward pass and parameter access.
pub trait TrainableModel {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    fn forward(&self, input: &Self::Input) -> Self::Prediction;
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;
    fn params(&self) -> &Self::Params;
    fn update_params(&mut self, new_params: &Self::Params);

    fn into_fitted(self) -> Self::Output;
}

/// Arithmetic needed by optimizers to combine parameters and gradients.
pub trait ParamOps: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, scalar: f64) -> Self;

    /// First NaN or infinite entry, if any.
    fn first_non_finite(&self) -> Option<f64>;
}

/// Inference-side interface of a fitted model.
pub trait InferenceModel {
    type InputSingle;
    type OutputSingle;
    type InputBatch;
    type OutputBatch;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle;
    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;
}
