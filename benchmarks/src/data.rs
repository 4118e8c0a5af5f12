use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two labelled clusters, one per class.
#[derive(Debug, Clone)]
pub struct Blobs {
    pub x: Array2<f64>,
    pub y: Vec<u8>,
}

impl Blobs {
    pub fn n_samples(&self) -> usize {
        self.y.len()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }
}

/// Generates `n_samples` rows in `n_features` dimensions.
///
/// Class 1 is centred at `+separation / 2` in every coordinate and class 0 at
/// `-separation / 2`, with uniform noise in `[-1, 1)`. Any `separation > 2`
/// makes the classes linearly separable. Rows alternate between classes.
pub fn two_blobs(n_samples: usize, n_features: usize, separation: f64, seed: u64) -> Blobs {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = separation / 2.0;

    let y: Vec<u8> = (0..n_samples).map(|i| (i % 2) as u8).collect();
    let x = Array2::from_shape_fn((n_samples, n_features), |(row, _)| {
        let center = if y[row] == 1 { half } else { -half };
        center + rng.random_range(-1.0..1.0)
    });

    Blobs { x, y }
}
