//! # logistic-rs
//!
//! Binary logistic regression trained with mini-batch stochastic gradient
//! descent on the cross-entropy loss.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: models carry their training state in the type
//!   system (`Unfitted` vs `Fitted`); only fitted models can predict.
//! - **Training/Inference Separation**: a fitted model holds parameters only;
//!   the loss, optimizer and trainer are separate components.
//! - **Arbitrary labels**: any `PartialOrd` label type with exactly two
//!   distinct values. The larger value is the positive class.
//!
//! ## Quick Start
//!
//! ```rust
//! use logistic_rs::{BinaryClassifier, ClassifierConfig};
//! use ndarray::array;
//!
//! let x = array![[0.0], [0.0], [0.0], [1.0], [1.0], [1.0]];
//! let y = [0, 0, 0, 1, 1, 1];
//!
//! let config = ClassifierConfig {
//!     learning_rate: 1.0,
//!     epochs: 500,
//!     batch_size: 6,
//!     verbose: false,
//!     seed: Some(42),
//!     ..ClassifierConfig::default()
//! };
//!
//! let model = BinaryClassifier::new(config).fit(x.view(), &y).unwrap();
//! assert_eq!(model.loss_history().len(), 500);
//! assert_eq!(model.predict_classes(x.view()).unwrap(), y.to_vec());
//! ```
//!
//! ## Module Structure
//!
//! - `backend`: numeric kernels on `ndarray` (sigmoid, softplus, bias column)
//! - `dataset`: in-memory dataset and mini-batch index samplers
//! - `encoding`: mapping two arbitrary labels to 0/1 targets and back
//! - `model`: logistic model with `Unfitted` / `Fitted` states
//! - `loss`: binary cross-entropy on logits
//! - `optimizer`: SGD
//! - `trainer`: training loop and loss history
//! - `classifier`: `BinaryClassifier` / `FittedClassifier` front end
//! - `config`: hyperparameters, loadable from JSON
//! - `metrics`: accuracy
//!
//! Training progress is reported through the `log` facade; install a logger
//! such as `env_logger` to see it.

pub mod backend;

/// High-level classifier API.
pub mod classifier;

/// Training hyperparameters.
pub mod config;

/// Dataset abstractions and mini-batch samplers.
pub mod dataset;

/// Label encoding for binary targets.
pub mod encoding;

pub mod error;

/// Differentiable loss functions for model training.
pub mod loss;

/// Evaluation metrics.
pub mod metrics;

/// Machine learning models with compile-time state safety.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

/// Training loop orchestration.
pub mod trainer;

pub use classifier::{BinaryClassifier, BinaryClassifierBuilder, FittedClassifier};
pub use config::ClassifierConfig;
pub use error::{ClassifierError, Result};
