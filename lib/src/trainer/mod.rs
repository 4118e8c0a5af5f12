// trainer/mod.rs
use crate::{
    dataset::{Dataset, IndexSampler},
    error::{ClassifierError, Result},
    loss::Loss,
    model::{ParamOps, TrainableModel},
    optimizer::Optimizer,
};
use log::{debug, info};
use ndarray::{Array1, Array2};
use std::marker::PhantomData;

pub mod history;
pub use history::LossHistory;

/// Orchestrates the training loop for a `TrainableModel`.
///
/// Combines a loss function and an optimizer to fit a model on a dataset.
/// Once built via `TrainerBuilder`, it is immutable and can be reused across
/// multiple models (as long as types match).
///
/// Each epoch:
/// 1. records the loss over the **whole** dataset at the current parameters,
/// 2. draws one mini-batch of `batch_size` row indices from the sampler,
/// 3. takes one optimizer step on that batch.
pub struct Trainer<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    pub(crate) batch_size: usize,
    pub(crate) max_epochs: usize,
    pub(crate) verbose: bool,
    pub(crate) log_every: usize,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    _phantom_model: PhantomData<M>,
}

/// Fluent builder for constructing a `Trainer` with custom hyperparameters.
///
/// Defaults:
/// - `batch_size`: 1
/// - `max_epochs`: 10000
/// - `verbose`: true
/// - `log_every`: 1000
pub struct TrainerBuilder<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    batch_size: usize,
    max_epochs: usize,
    verbose: bool,
    log_every: usize,
    loss_fn: L,
    optimizer: O,
    _phantom_model: PhantomData<M>,
}

impl<L, O, M, P> TrainerBuilder<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    /// Creates a new `TrainerBuilder` with the given components.
    ///
    /// # Arguments
    /// * `loss_fn`: differentiable loss (e.g., `BCEWithLogitsLoss`)
    /// * `optimizer`: parameter updater (e.g., `SGD`)
    pub fn new(loss_fn: L, optimizer: O) -> Self {
        Self {
            batch_size: 1,
            max_epochs: 10000,
            verbose: true,
            log_every: 1000,
            loss_fn,
            optimizer,
            _phantom_model: PhantomData,
        }
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    pub fn max_epochs(mut self, epochs: usize) -> Self {
        self.max_epochs = epochs;
        self
    }

    /// Sets verbosity for training output.
    ///
    /// When `false`, suppresses the periodic `info!` loss lines.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Emit a progress line every `every` epochs (when verbose).
    pub fn log_every(mut self, every: usize) -> Self {
        self.log_every = every;
        self
    }

    pub fn build(self) -> Trainer<L, O, M, P> {
        Trainer {
            batch_size: self.batch_size,
            max_epochs: self.max_epochs,
            verbose: self.verbose,
            log_every: self.log_every,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            _phantom_model: PhantomData,
        }
    }
}

impl<L, O, M, P> Trainer<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<
        Input = Array2<f64>,
        Prediction = Array1<f64>,
        Params = P,
        Gradients = P,
    >,
    O: Optimizer<P>,
    P: ParamOps,
{
    /// Trains the model for exactly `max_epochs` epochs.
    ///
    /// # Returns
    /// The fitted model (`M::Output`) and the per-epoch loss history.
    ///
    /// # Errors
    /// - `InvalidInput` if the dataset is empty, `batch_size == 0` or
    ///   `log_every == 0` (checked before any update)
    /// - `NumericDegenerate` if the loss or an updated parameter stops
    ///   being finite
    /// - errors from [`Dataset::get_batch`]
    pub fn fit<D, S>(
        &self,
        mut model: M,
        dataset: &D,
        sampler: &mut S,
    ) -> Result<(M::Output, LossHistory)>
    where
        D: Dataset,
        S: IndexSampler + ?Sized,
    {
        if self.batch_size == 0 {
            return Err(ClassifierError::InvalidInput(
                "batch_size must be at least 1".into(),
            ));
        }
        if self.log_every == 0 {
            return Err(ClassifierError::InvalidInput(
                "log_every must be at least 1".into(),
            ));
        }
        let n_total = dataset.len();
        if n_total == 0 {
            return Err(ClassifierError::InvalidInput("Dataset is empty".into()));
        }

        debug!(
            "Starting fit: {} samples, {} columns, {} epochs, batch size {}",
            n_total,
            dataset.n_features(),
            self.max_epochs,
            self.batch_size
        );

        let (x_view, y_view) = dataset.full();
        let (x_full, y_full) = (x_view.to_owned(), y_view.to_owned());
        let mut history = LossHistory::with_capacity(self.max_epochs);

        for epoch in 0..self.max_epochs {
            let full_preds = model.forward(&x_full);
            let loss = self.loss_fn.loss(&full_preds, &y_full);
            if !loss.is_finite() {
                return Err(ClassifierError::NumericDegenerate { epoch, value: loss });
            }
            history.record(loss);
            if self.verbose && epoch % self.log_every == 0 {
                info!("Epoch {}: loss = {}", epoch, loss);
            }

            let indices = sampler.sample(n_total, self.batch_size);
            let (batch_x, batch_y) = dataset.get_batch(&indices)?;
            let preds = model.forward(&batch_x);
            let grad_preds = self.loss_fn.grad_wrt_prediction(&preds, &batch_y);
            let grads = model.backward(&batch_x, &grad_preds);

            let new_params = self.optimizer.step(model.params(), &grads);
            if let Some(value) = new_params.first_non_finite() {
                return Err(ClassifierError::NumericDegenerate { epoch, value });
            }
            model.update_params(&new_params);
        }

        if let Some(last) = history.last() {
            debug!("Finished fit: last recorded loss = {}", last);
        }

        Ok((model.into_fitted(), history))
    }
}

// --- Convenience constructor ---
impl<L, O, M, P> Trainer<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    /// Convenience constructor that starts the builder pattern.
    ///
    /// Equivalent to `TrainerBuilder::new(...)`.
    pub fn builder(loss_fn: L, optimizer: O) -> TrainerBuilder<L, O, M, P> {
        TrainerBuilder::new(loss_fn, optimizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::add_bias_column,
        dataset::{InMemoryDataset, SequentialSampler, UniformSampler},
        loss::BCEWithLogitsLoss,
        model::{
            logistic::{LogisticParams, LogisticRegression},
            InferenceModel,
        },
        optimizer::SGD,
    };
    use ndarray::array;

    type LogisticTrainerBuilder =
        TrainerBuilder<BCEWithLogitsLoss, SGD, LogisticRegression, LogisticParams>;

    fn step_dataset() -> InMemoryDataset {
        let x = array![[0.0], [0.0], [0.0], [1.0], [1.0], [1.0]];
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        InMemoryDataset::new(add_bias_column(x.view()), y).unwrap()
    }

    // === TrainerBuilder Tests ===

    #[test]
    fn test_trainer_builder_default_values() {
        let builder = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.001));

        assert_eq!(builder.batch_size, 1);
        assert_eq!(builder.max_epochs, 10000);
        assert!(builder.verbose);
        assert_eq!(builder.log_every, 1000);
    }

    #[test]
    fn test_trainer_builder_chaining() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.1))
            .batch_size(128)
            .max_epochs(250)
            .verbose(false)
            .log_every(10)
            .build();

        assert_eq!(trainer.batch_size, 128);
        assert_eq!(trainer.max_epochs, 250);
        assert!(!trainer.verbose);
        assert_eq!(trainer.log_every, 10);
        assert_eq!(trainer.optimizer.learning_rate(), 0.1);
    }

    // === Trainer Tests ===

    #[test]
    fn test_fit_rejects_zero_batch_size() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.1))
            .batch_size(0)
            .build();
        let result = trainer.fit(
            LogisticRegression::new(1),
            &step_dataset(),
            &mut SequentialSampler::new(),
        );
        assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
    }

    #[test]
    fn test_fit_rejects_zero_log_every() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.1))
            .log_every(0)
            .build();
        let result = trainer.fit(
            LogisticRegression::new(1),
            &step_dataset(),
            &mut SequentialSampler::new(),
        );
        assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
    }

    #[test]
    fn test_fit_history_length_equals_epochs() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.1))
            .max_epochs(37)
            .verbose(false)
            .build();
        let (_, history) = trainer
            .fit(
                LogisticRegression::new(1),
                &step_dataset(),
                &mut UniformSampler::from_seed(Some(3)),
            )
            .unwrap();
        assert_eq!(history.len(), 37);
    }

    #[test]
    fn test_fit_first_loss_is_at_zero_params() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.5))
            .max_epochs(5)
            .verbose(false)
            .build();
        let (_, history) = trainer
            .fit(
                LogisticRegression::new(1),
                &step_dataset(),
                &mut SequentialSampler::new(),
            )
            .unwrap();
        let first = history.first().unwrap();
        assert!((first - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_fit_zero_epochs_returns_zero_params() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.5))
            .max_epochs(0)
            .build();
        let (fitted, history) = trainer
            .fit(
                LogisticRegression::new(1),
                &step_dataset(),
                &mut SequentialSampler::new(),
            )
            .unwrap();
        assert!(history.is_empty());
        assert_eq!(fitted.params().theta, array![0.0, 0.0]);
    }

    #[test]
    fn test_fit_single_step_matches_gradient_formula() {
        // One full-batch step from zero: grad = -(1/n) Xᵀ (y - 0.5)
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(1.0))
            .batch_size(6)
            .max_epochs(1)
            .verbose(false)
            .build();
        let (fitted, _) = trainer
            .fit(
                LogisticRegression::new(1),
                &step_dataset(),
                &mut SequentialSampler::new(),
            )
            .unwrap();
        // bias grad: -(1/6) * (3 * -0.5 + 3 * 0.5) = 0
        // weight grad: -(1/6) * (3 * 0.5) = -0.25
        assert!(fitted.params().theta[0].abs() < 1e-12);
        assert!((fitted.params().theta[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_fit_full_batch_learns_step_function() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(1.0))
            .batch_size(6)
            .max_epochs(500)
            .verbose(false)
            .build();
        let (fitted, history) = trainer
            .fit(
                LogisticRegression::new(1),
                &step_dataset(),
                &mut SequentialSampler::new(),
            )
            .unwrap();

        let tail = &history.as_slice()[100..];
        assert!(tail.windows(2).all(|w| w[1] < w[0]));

        let probs = fitted.predict_batch(&array![[0.0], [1.0]]);
        assert!(probs[0] < 0.5);
        assert!(probs[1] > 0.5);
    }

    #[test]
    fn test_fit_is_deterministic_for_same_seed() {
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.3))
            .batch_size(2)
            .max_epochs(200)
            .verbose(false)
            .build();
        let run = |seed| {
            trainer
                .fit(
                    LogisticRegression::new(1),
                    &step_dataset(),
                    &mut UniformSampler::from_seed(Some(seed)),
                )
                .unwrap()
        };
        let (a, ha) = run(11);
        let (b, hb) = run(11);
        assert_eq!(a.params(), b.params());
        assert_eq!(ha, hb);
    }

    #[test]
    fn test_fit_propagates_bad_sampler_indices() {
        struct OutOfRange;
        impl IndexSampler for OutOfRange {
            fn sample(&mut self, n_rows: usize, batch_size: usize) -> Vec<usize> {
                vec![n_rows; batch_size]
            }
        }

        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(0.1))
            .max_epochs(3)
            .verbose(false)
            .build();
        let result = trainer.fit(LogisticRegression::new(1), &step_dataset(), &mut OutOfRange);
        assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
    }

    #[test]
    fn test_fit_reports_non_finite_loss() {
        struct NanLoss;
        impl Loss for NanLoss {
            fn loss(&self, _: &Array1<f64>, _: &Array1<f64>) -> f64 {
                f64::NAN
            }
            fn grad_wrt_prediction(&self, p: &Array1<f64>, _: &Array1<f64>) -> Array1<f64> {
                Array1::zeros(p.len())
            }
        }

        let trainer: Trainer<NanLoss, SGD, LogisticRegression, LogisticParams> =
            Trainer::builder(NanLoss, SGD::new(0.1))
                .max_epochs(3)
                .verbose(false)
                .build();
        let result = trainer.fit(
            LogisticRegression::new(1),
            &step_dataset(),
            &mut SequentialSampler::new(),
        );
        assert!(matches!(
            result,
            Err(ClassifierError::NumericDegenerate { epoch: 0, .. })
        ));
    }

    #[test]
    fn test_fit_rejects_overflowing_parameters() {
        // One full-batch step with the largest finite rate pushes the weight to inf
        // while the recorded loss is still ln 2.
        let x = array![[0.0], [1e10]];
        let dataset =
            InMemoryDataset::new(add_bias_column(x.view()), array![0.0, 1.0]).unwrap();
        let trainer = LogisticTrainerBuilder::new(BCEWithLogitsLoss, SGD::new(f64::MAX))
            .batch_size(2)
            .max_epochs(1)
            .verbose(false)
            .build();

        let result = trainer.fit(
            LogisticRegression::new(1),
            &dataset,
            &mut SequentialSampler::new(),
        );
        match result {
            Err(ClassifierError::NumericDegenerate { epoch, value }) => {
                assert_eq!(epoch, 0);
                assert!(value.is_infinite());
            }
            other => panic!("expected NumericDegenerate, got {:?}", other.map(|_| ())),
        }
    }
}
