use crate::backend::{gather_1d, gather_rows};
use crate::dataset::Dataset;
use crate::error::{ClassifierError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Dataset held entirely in memory as dense `ndarray` buffers.
#[derive(Clone, Debug)]
pub struct InMemoryDataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl InMemoryDataset {
    /// Wraps a feature matrix and a target vector.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `x.nrows() != y.len()`
    /// - `InvalidInput` if there are no samples
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::ShapeMismatch {
                what: "targets",
                expected: x.nrows(),
                got: y.len(),
            });
        }
        if x.nrows() == 0 {
            return Err(ClassifierError::InvalidInput("Dataset is empty".into()));
        }
        Ok(Self { x, y })
    }
}

impl Dataset for InMemoryDataset {
    fn len(&self) -> usize {
        self.y.len()
    }

    fn n_features(&self) -> usize {
        self.x.ncols()
    }

    fn full(&self) -> (ArrayView2<'_, f64>, ArrayView1<'_, f64>) {
        (self.x.view(), self.y.view())
    }

    fn get_batch(&self, indices: &[usize]) -> Result<(Array2<f64>, Array1<f64>)> {
        let n = self.len();
        if let Some(&bad) = indices.iter().find(|&&i| i >= n) {
            return Err(ClassifierError::InvalidInput(format!(
                "Row index {} out of bounds for dataset of {} samples",
                bad, n
            )));
        }
        Ok((gather_rows(&self.x, indices), gather_1d(&self.y, indices)))
    }
}
