/// Marks a model that is still being trained.
///
/// `LogisticModel<Unfitted>` implements [`TrainableModel`](super::TrainableModel)
/// and has no prediction methods.
#[derive(Clone, Copy, Debug)]
pub struct Unfitted;

/// Marks a model whose training has finished.
///
/// `LogisticModel<Fitted>` implements [`InferenceModel`](super::InferenceModel).
/// It holds only the learned parameters: no optimizer, loss or hyperparameters.
#[derive(Clone, Copy, Debug)]
pub struct Fitted;
