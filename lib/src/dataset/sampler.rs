//! Random row-index generation for mini-batches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the row indices of one mini-batch.
///
/// The trainer calls [`IndexSampler::sample`] once per epoch. Implementations
/// own their randomness, so a seeded sampler makes training reproducible and
/// tests can inject a fixed sequence.
pub trait IndexSampler {
    /// Returns `batch_size` indices in `0..n_rows`.
    fn sample(&mut self, n_rows: usize, batch_size: usize) -> Vec<usize>;
}

/// Draws indices independently and uniformly, **with replacement**.
///
/// A batch may hold the same row more than once and `batch_size` may exceed
/// `n_rows`.
///
/// # Example
/// ```rust
/// use logistic_rs::dataset::{IndexSampler, UniformSampler};
///
/// let mut a = UniformSampler::from_seed(Some(7));
/// let mut b = UniformSampler::from_seed(Some(7));
/// assert_eq!(a.sample(10, 4), b.sample(10, 4));
/// ```
#[derive(Clone, Debug)]
pub struct UniformSampler<R: Rng = StdRng> {
    rng: R,
}

impl UniformSampler<StdRng> {
    /// Seeded `StdRng` when `seed` is `Some`, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl<R: Rng> UniformSampler<R> {
    /// Wraps an arbitrary random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSampler for UniformSampler<R> {
    /// # Panics
    /// If `n_rows == 0` and `batch_size > 0`.
    fn sample(&mut self, n_rows: usize, batch_size: usize) -> Vec<usize> {
        (0..batch_size)
            .map(|_| self.rng.random_range(0..n_rows))
            .collect()
    }
}

/// Walks `0..n_rows` in order and wraps around, ignoring randomness.
///
/// With `batch_size == n_rows` every batch is the whole dataset, which turns
/// mini-batch training into plain gradient descent.
#[derive(Clone, Debug, Default)]
pub struct SequentialSampler {
    next: usize,
}

impl SequentialSampler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexSampler for SequentialSampler {
    /// # Panics
    /// If `n_rows == 0` and `batch_size > 0`.
    fn sample(&mut self, n_rows: usize, batch_size: usize) -> Vec<usize> {
        (0..batch_size)
            .map(|_| {
                let i = self.next % n_rows;
                self.next = (self.next + 1) % n_rows;
                i
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_length_and_bounds() {
        let mut sampler = UniformSampler::from_seed(Some(42));
        let idx = sampler.sample(5, 100);
        assert_eq!(idx.len(), 100);
        assert!(idx.iter().all(|&i| i < 5));
    }

    #[test]
    fn test_sample_with_replacement_repeats() {
        // 50 draws from 3 rows must repeat at least one row.
        let mut sampler = UniformSampler::from_seed(Some(1));
        let idx = sampler.sample(3, 50);
        let mut seen = [0usize; 3];
        for i in idx {
            seen[i] += 1;
        }
        assert!(seen.iter().any(|&c| c > 1));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = UniformSampler::from_seed(Some(123));
        let mut b = UniformSampler::from_seed(Some(123));
        for _ in 0..10 {
            assert_eq!(a.sample(1000, 8), b.sample(1000, 8));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = UniformSampler::from_seed(Some(1));
        let mut b = UniformSampler::from_seed(Some(2));
        assert_ne!(a.sample(1_000_000, 16), b.sample(1_000_000, 16));
    }

    #[test]
    fn test_single_row_always_zero() {
        let mut sampler = UniformSampler::from_seed(None);
        assert_eq!(sampler.sample(1, 4), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_custom_rng() {
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(9));
        assert_eq!(sampler.sample(10, 3).len(), 3);
    }

    #[test]
    fn test_zero_batch_is_empty() {
        let mut sampler = UniformSampler::from_seed(Some(0));
        assert!(sampler.sample(10, 0).is_empty());
    }

    #[test]
    fn test_sequential_wraps_around() {
        let mut sampler = SequentialSampler::new();
        assert_eq!(sampler.sample(3, 2), vec![0, 1]);
        assert_eq!(sampler.sample(3, 4), vec![2, 0, 1, 2]);
    }

    #[test]
    fn test_sequential_full_batch_is_whole_dataset() {
        let mut sampler = SequentialSampler::new();
        for _ in 0..3 {
            assert_eq!(sampler.sample(4, 4), vec![0, 1, 2, 3]);
        }
    }
}
