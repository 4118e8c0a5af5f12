//! Two-class label encoding.
//!
//! Maps arbitrary ordered labels onto `{0.0, 1.0}` targets: the smaller of the
//! two observed values becomes `0`, the larger becomes `1`.

use crate::error::{ClassifierError, Result};
use ndarray::Array1;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Fitted mapping between two label values and binary targets.
///
/// # Example
/// ```rust
/// use logistic_rs::encoding::BinaryLabelEncoder;
///
/// let encoder = BinaryLabelEncoder::fit(&["spam", "ham", "spam"]).unwrap();
/// assert_eq!(encoder.classes(), (&"ham", &"spam"));
/// assert_eq!(encoder.transform(&["spam", "ham"]).unwrap().to_vec(), vec![1.0, 0.0]);
/// assert_eq!(encoder.inverse_transform(0.7), &"spam");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryLabelEncoder<L> {
    negative: L,
    positive: L,
}

impl<L> BinaryLabelEncoder<L>
where
    L: PartialOrd + Clone + Debug,
{
    /// Collects the distinct labels and sorts them ascending.
    ///
    /// # Errors
    /// - `InvalidInput` if two labels cannot be ordered (e.g. `NaN`)
    /// - `LabelCount` unless exactly two distinct values are present
    pub fn fit(labels: &[L]) -> Result<Self> {
        let mut distinct: Vec<L> = Vec::with_capacity(2);
        for label in labels {
            if label.partial_cmp(label).is_none() {
                return Err(ClassifierError::InvalidInput(format!(
                    "Label {:?} is not comparable",
                    label
                )));
            }
            if !distinct.iter().any(|d| d == label) {
                distinct.push(label.clone());
            }
        }

        if distinct.len() != 2 {
            return Err(ClassifierError::LabelCount {
                found: distinct.len(),
            });
        }

        let (a, b) = (distinct[0].clone(), distinct[1].clone());
        let (negative, positive) = match a.partial_cmp(&b) {
            Some(Ordering::Less) => (a, b),
            Some(Ordering::Greater) => (b, a),
            _ => {
                return Err(ClassifierError::InvalidInput(format!(
                    "Labels {:?} and {:?} cannot be ordered",
                    a, b
                )))
            }
        };

        Ok(Self { negative, positive })
    }

    /// The `(smaller, larger)` label pair.
    pub fn classes(&self) -> (&L, &L) {
        (&self.negative, &self.positive)
    }

    /// Target for a single label.
    ///
    /// # Errors
    /// `UnknownLabel` if `label` is neither of the fitted classes.
    pub fn encode(&self, label: &L) -> Result<f64> {
        if *label == self.positive {
            Ok(1.0)
        } else if *label == self.negative {
            Ok(0.0)
        } else {
            Err(ClassifierError::UnknownLabel(format!("{:?}", label)))
        }
    }

    /// Targets for a slice of labels.
    pub fn transform(&self, labels: &[L]) -> Result<Array1<f64>> {
        labels
            .iter()
            .map(|l| self.encode(l))
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from)
    }

    /// Label for a positive-class probability: `p >= 0.5` gives the larger label.
    pub fn inverse_transform(&self, probability: f64) -> &L {
        if probability >= 0.5 {
            &self.positive
        } else {
            &self.negative
        }
    }
}
