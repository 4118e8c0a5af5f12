//! Dataset abstractions for training.
//!
//! A [`Dataset`] exposes a design matrix `X` of shape `(n_samples, n_features)`
//! and a target vector `y` of shape `(n_samples,)`. The trainer reads the whole
//! dataset to record the epoch loss and pulls random mini-batches through
//! [`Dataset::get_batch`], with row indices produced by an [`IndexSampler`].
//!
//! # Example
//!
//! ```rust
//! use logistic_rs::dataset::{Dataset, InMemoryDataset};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [1.0, 1.0]];
//! let y = array![0.0, 1.0];
//! let dataset = InMemoryDataset::new(x, y).unwrap();
//!
//! let (xb, yb) = dataset.get_batch(&[1, 1]).unwrap();
//! assert_eq!(xb.nrows(), 2);
//! assert_eq!(yb.to_vec(), vec![1.0, 1.0]);
//! ```

use crate::error::Result;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod memory;
pub mod sampler;

pub use self::memory::InMemoryDataset;
pub use self::sampler::{IndexSampler, SequentialSampler, UniformSampler};

/// Source of `(X, y)` training data addressable by row index.
pub trait Dataset {
    /// Number of samples.
    fn len(&self) -> usize;

    /// Returns `true` when the dataset holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns in `X`.
    fn n_features(&self) -> usize;

    /// Borrowed view of the complete `(X, y)` pair.
    fn full(&self) -> (ArrayView2<'_, f64>, ArrayView1<'_, f64>);

    /// Copies the rows at `indices` (in order, duplicates allowed).
    ///
    /// # Errors
    /// `InvalidInput` if any index is out of bounds.
    fn get_batch(&self, indices: &[usize]) -> Result<(Array2<f64>, Array1<f64>)>;
}
