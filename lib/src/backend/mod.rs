//! # Numeric kernels
//!
//! Dense `ndarray` operations shared by the model, loss and dataset layers.
//! Everything works on `f64` and runs on the CPU.
//!
//! ## Example
//!
//! ```rust
//! use logistic_rs::backend::{add_bias_column, sigmoid};
//! use ndarray::array;
//!
//! let x = array![[2.0, 3.0], [4.0, 5.0]];
//! let xb = add_bias_column(x.view());
//! assert_eq!(xb, array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
//! assert_eq!(sigmoid(0.0), 0.5);
//! ```

use ndarray::{s, Array1, Array2, ArrayView2, Axis};

/// Numerically stable logistic function `1 / (1 + e^{-z})`.
///
/// Only ever exponentiates a non-positive number, so it never overflows.
/// For `|z|` above roughly 37 the result rounds to exactly `0.0` or `1.0`.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

/// Element-wise [`sigmoid`].
pub fn sigmoid_1d(z: &Array1<f64>) -> Array1<f64> {
    z.mapv(sigmoid)
}

/// `log(1 + e^{z})` without overflow: `max(z, 0) + log1p(e^{-|z|})`.
pub fn softplus(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

/// Prepends a constant column of ones, producing an `(m, d + 1)` design matrix.
pub fn add_bias_column(x: ArrayView2<f64>) -> Array2<f64> {
    let (rows, cols) = x.dim();
    let mut out = Array2::ones((rows, cols + 1));
    out.slice_mut(s![.., 1..]).assign(&x);
    out
}

/// Copies the listed rows, in order. Indices may repeat.
///
/// # Panics
/// If any index is out of bounds.
pub fn gather_rows(x: &Array2<f64>, indices: &[usize]) -> Array2<f64> {
    x.select(Axis(0), indices)
}

/// Copies the listed elements, in order. Indices may repeat.
///
/// # Panics
/// If any index is out of bounds.
pub fn gather_1d(v: &Array1<f64>, indices: &[usize]) -> Array1<f64> {
    v.select(Axis(0), indices)
}

/// Returns `true` when every element is finite.
pub fn all_finite(x: ArrayView2<f64>) -> bool {
    x.iter().all(|v| v.is_finite())
}
