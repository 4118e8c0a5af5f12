use serde::{Deserialize, Serialize};

/// Per-epoch training loss, in epoch order.
///
/// One value is appended per epoch, measured on the whole dataset before that
/// epoch's update. The history only grows while training runs and is read-only
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LossHistory {
    losses: Vec<f64>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(epochs: usize) -> Self {
        Self {
            losses: Vec::with_capacity(epochs),
        }
    }

    pub(crate) fn record(&mut self, loss: f64) {
        self.losses.push(loss);
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// Loss at the initial parameters.
    pub fn first(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    /// Loss recorded at the start of the final epoch.
    pub fn last(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    pub fn get(&self, epoch: usize) -> Option<f64> {
        self.losses.get(epoch).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.losses
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.losses.iter().copied()
    }
}

impl<'a> IntoIterator for &'a LossHistory {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.losses.iter()
    }
}
