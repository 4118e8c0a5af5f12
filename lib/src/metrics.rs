//! Evaluation metrics for classifiers.

/// Metrics for evaluating classification results.
pub struct Metrics;

impl Metrics {
    /// Fraction of positions where the predicted label equals the true one.
    ///
    /// Returns `0.0` for empty input.
    ///
    /// # Panics
    /// If the slices differ in length.
    ///
    /// ```rust
    /// use logistic_rs::metrics::Metrics;
    ///
    /// let acc = Metrics::accuracy(&["a", "b", "b", "a"], &["a", "b", "a", "a"]);
    /// assert_eq!(acc, 0.75);
    /// ```
    pub fn accuracy<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> f64 {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count();

        correct as f64 / y_true.len() as f64
    }

    /// Fraction of wrong predictions, `1 - accuracy`.
    pub fn error_rate<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> f64 {
        if y_true.is_empty() {
            return 0.0;
        }
        1.0 - Self::accuracy(y_true, y_pred)
    }
}
