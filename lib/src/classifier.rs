//! High-level binary classifier.
//!
//! [`BinaryClassifier`] only holds hyperparameters. Calling
//! [`fit`](BinaryClassifier::fit) runs mini-batch gradient descent on the
//! cross-entropy and returns a [`FittedClassifier`], the only type that can
//! predict. Labels can be any `PartialOrd` type with exactly two distinct
//! values; the larger one is the positive class.
//!
//! ```rust
//! use logistic_rs::BinaryClassifier;
//! use ndarray::array;
//!
//! let x = array![[0.0], [0.0], [0.0], [1.0], [1.0], [1.0]];
//! let y = ["no", "no", "no", "yes", "yes", "yes"];
//!
//! let model = BinaryClassifier::builder()
//!     .learning_rate(1.0)
//!     .epochs(500)
//!     .batch_size(6)
//!     .verbose(false)
//!     .seed(42)
//!     .build()
//!     .fit(x.view(), &y)
//!     .unwrap();
//!
//! assert_eq!(model.predict_classes(x.view()).unwrap(), y.to_vec());
//! ```

use crate::{
    backend::{add_bias_column, all_finite},
    config::ClassifierConfig,
    dataset::{InMemoryDataset, IndexSampler, UniformSampler},
    encoding::BinaryLabelEncoder,
    error::{ClassifierError, Result},
    loss::{BCEWithLogitsLoss, Loss},
    metrics::Metrics,
    model::{
        logistic::{LogisticModel, LogisticParams, LogisticRegression},
        Fitted, InferenceModel,
    },
    optimizer::SGD,
    trainer::{LossHistory, Trainer},
};
use ndarray::{Array1, ArrayView1, ArrayView2};
use std::fmt::Debug;

/// Trainer specialised to logistic regression with SGD on the BCE loss.
pub type LogisticTrainer = Trainer<BCEWithLogitsLoss, SGD, LogisticRegression, LogisticParams>;

/// An unfitted classifier: configuration only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BinaryClassifier {
    config: ClassifierConfig,
}

impl BinaryClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Starts a builder with default hyperparameters.
    pub fn builder() -> BinaryClassifierBuilder {
        BinaryClassifierBuilder::default()
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Fits on raw features `x` (`m × d`) and labels `y` (length `m`).
    ///
    /// Rows are drawn with a [`UniformSampler`] seeded from `config.seed`.
    ///
    /// # Errors
    /// Checked in this order, before any training state exists:
    /// - `ShapeMismatch` if `x.nrows() != y.len()`
    /// - `InvalidInput` for an empty `x`, non-finite features, a bad
    ///   learning rate, `batch_size == 0` or `log_every == 0`
    /// - `LabelCount` unless `y` holds exactly two distinct values
    ///
    /// During training, `NumericDegenerate` if the loss or a parameter stops
    /// being finite.
    pub fn fit<L>(&self, x: ArrayView2<f64>, y: &[L]) -> Result<FittedClassifier<L>>
    where
        L: PartialOrd + Clone + Debug,
    {
        let mut sampler = UniformSampler::from_seed(self.config.seed);
        self.fit_with_sampler(x, y, &mut sampler)
    }

    /// Same as [`fit`](Self::fit) with an explicit mini-batch sampler.
    pub fn fit_with_sampler<L, S>(
        &self,
        x: ArrayView2<f64>,
        y: &[L],
        sampler: &mut S,
    ) -> Result<FittedClassifier<L>>
    where
        L: PartialOrd + Clone + Debug,
        S: IndexSampler + ?Sized,
    {
        if x.nrows() != y.len() {
            return Err(ClassifierError::ShapeMismatch {
                what: "labels",
                expected: x.nrows(),
                got: y.len(),
            });
        }
        if x.nrows() == 0 {
            return Err(ClassifierError::InvalidInput(
                "Cannot fit on an empty dataset".into(),
            ));
        }
        if !all_finite(x) {
            return Err(ClassifierError::InvalidInput(
                "Features must be finite".into(),
            ));
        }
        self.config.validate()?;

        let encoder = BinaryLabelEncoder::fit(y)?;
        let targets = encoder.transform(y)?;
        let dataset = InMemoryDataset::new(add_bias_column(x), targets)?;

        let (model, loss_history) =
            self.trainer()
                .fit(LogisticRegression::new(x.ncols()), &dataset, sampler)?;

        Ok(FittedClassifier {
            config: self.config.clone(),
            model,
            encoder,
            loss_history,
        })
    }

    fn trainer(&self) -> LogisticTrainer {
        Trainer::builder(BCEWithLogitsLoss, SGD::new(self.config.learning_rate))
            .batch_size(self.config.batch_size)
            .max_epochs(self.config.epochs)
            .verbose(self.config.verbose)
            .log_every(self.config.log_every)
            .build()
    }
}

/// Fluent builder for [`BinaryClassifier`]. Starts from
/// [`ClassifierConfig::default`].
#[derive(Clone, Debug, Default)]
pub struct BinaryClassifierBuilder {
    config: ClassifierConfig,
}

impl BinaryClassifierBuilder {
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.config.learning_rate = lr;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.config.epochs = epochs;
        self
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn log_every(mut self, every: usize) -> Self {
        self.config.log_every = every;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> BinaryClassifier {
        BinaryClassifier::new(self.config)
    }
}

/// A trained classifier: parameters, label mapping and loss history.
///
/// Read-only; fitting again produces a new value.
#[derive(Clone, Debug)]
pub struct FittedClassifier<L> {
    config: ClassifierConfig,
    model: LogisticModel<Fitted>,
    encoder: BinaryLabelEncoder<L>,
    loss_history: LossHistory,
}

impl<L> FittedClassifier<L>
where
    L: PartialOrd + Clone + Debug,
{
    /// Trains from scratch with the same configuration.
    ///
    /// Parameters start at zero again and the history is rebuilt, so the
    /// result equals a fresh [`BinaryClassifier::fit`] with that config.
    pub fn fit(&self, x: ArrayView2<f64>, y: &[L]) -> Result<FittedClassifier<L>> {
        BinaryClassifier::new(self.config.clone()).fit(x, y)
    }

    /// Positive-class probability for each row of raw features.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `x` does not have the fitted number of columns
    /// - `InvalidInput` if any feature is NaN or infinite
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        self.check_features(x)?;
        Ok(self.model.predict_batch(&x.to_owned()))
    }

    /// Predicted labels: the larger class when `p >= 0.5`, else the smaller.
    pub fn predict_classes(&self, x: ArrayView2<f64>) -> Result<Vec<L>> {
        let probabilities = self.predict(x)?;
        Ok(probabilities
            .iter()
            .map(|&p| self.encoder.inverse_transform(p).clone())
            .collect())
    }

    /// Mean cross-entropy on `(x, y)`, the quantity recorded during training.
    ///
    /// # Errors
    /// - `ShapeMismatch` on a row or column mismatch
    /// - `InvalidInput` for empty input or non-finite features
    /// - `UnknownLabel` if `y` holds a value outside the fitted classes
    pub fn score(&self, x: ArrayView2<f64>, y: &[L]) -> Result<f64> {
        self.check_labelled(x, y)?;
        let targets = self.encoder.transform(y)?;
        let logits = self.model.decision_function(&x.to_owned());
        Ok(BCEWithLogitsLoss.loss(&logits, &targets))
    }

    /// Fraction of rows whose predicted label equals `y`.
    ///
    /// # Errors
    /// Same as [`score`](Self::score).
    pub fn accuracy(&self, x: ArrayView2<f64>, y: &[L]) -> Result<f64> {
        self.check_labelled(x, y)?;
        self.encoder.transform(y)?;
        let predicted = self.predict_classes(x)?;
        Ok(Metrics::accuracy(y, &predicted))
    }

    /// `θ`, bias first.
    pub fn parameters(&self) -> ArrayView1<'_, f64> {
        self.model.params().theta.view()
    }

    pub fn bias(&self) -> f64 {
        self.model.params().bias()
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.model.params().weights()
    }

    /// `(smaller, larger)` label pair; the larger is the positive class.
    pub fn classes(&self) -> (&L, &L) {
        self.encoder.classes()
    }

    /// Full-dataset loss before each update, one entry per epoch.
    pub fn loss_history(&self) -> &LossHistory {
        &self.loss_history
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Number of raw input features `d`.
    pub fn n_features(&self) -> usize {
        self.model.params().n_features()
    }

    fn check_features(&self, x: ArrayView2<f64>) -> Result<()> {
        if x.ncols() != self.n_features() {
            return Err(ClassifierError::ShapeMismatch {
                what: "features",
                expected: self.n_features(),
                got: x.ncols(),
            });
        }
        if !all_finite(x) {
            return Err(ClassifierError::InvalidInput(
                "Features must be finite".into(),
            ));
        }
        Ok(())
    }

    fn check_labelled(&self, x: ArrayView2<f64>, y: &[L]) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::ShapeMismatch {
                what: "labels",
                expected: x.nrows(),
                got: y.len(),
            });
        }
        if y.is_empty() {
            return Err(ClassifierError::InvalidInput(
                "Cannot evaluate on an empty dataset".into(),
            ));
        }
        self.check_features(x)
    }
}
