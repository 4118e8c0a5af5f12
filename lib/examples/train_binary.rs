//! Binary classification on a small synthetic dataset.
//!
//! Trains on two Gaussian-ish clusters, prints the loss curve at a few epochs,
//! then reports train/test accuracy and cross-entropy.
//!
//! Run with: RUST_LOG=info cargo run --example train_binary
//!
//! An optional argument points to a JSON config file:
//! `cargo run --example train_binary -- config.json`

use logistic_rs::{BinaryClassifier, ClassifierConfig};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
enum Species {
    Setosa,
    Versicolor,
}

/// Two clusters in 4 dimensions, loosely shaped like the iris measurements.
fn make_data(
    n_per_class: usize,
    rng: &mut StdRng,
) -> Result<(Array2<f64>, Vec<Species>), Box<dyn Error>> {
    let centers = [
        (Species::Setosa, [5.0, 3.4, 1.5, 0.2]),
        (Species::Versicolor, [5.9, 2.8, 4.3, 1.3]),
    ];
    let mut rows = Vec::with_capacity(2 * n_per_class * 4);
    let mut labels = Vec::with_capacity(2 * n_per_class);
    for (species, center) in centers {
        for _ in 0..n_per_class {
            for c in center {
                rows.push(c + rng.random_range(-0.4..0.4));
            }
            labels.push(species);
        }
    }
    let x = Array2::from_shape_vec((labels.len(), 4), rows)?;
    Ok((x, labels))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ClassifierConfig::from_json_file(path)?,
        None => ClassifierConfig {
            learning_rate: 0.1,
            epochs: 10000,
            batch_size: 4,
            seed: Some(42),
            ..ClassifierConfig::default()
        },
    };
    println!("Config: {:?}", config);

    let mut rng = StdRng::seed_from_u64(7);
    let (x_train, y_train) = make_data(40, &mut rng)?;
    let (x_test, y_test) = make_data(10, &mut rng)?;

    let model = BinaryClassifier::new(config).fit(x_train.view(), &y_train)?;

    let history = model.loss_history();
    for epoch in [0, 10, 100, 1000, history.len().saturating_sub(1)] {
        if let Some(loss) = history.get(epoch) {
            println!("epoch {:>5}: loss = {:.6}", epoch, loss);
        }
    }

    println!("Classes: {:?}", model.classes());
    println!("Bias: {:.4}, weights: {:.4}", model.bias(), model.weights());
    println!(
        "Train accuracy: {:.2}%, loss: {:.4}",
        model.accuracy(x_train.view(), &y_train)? * 100.0,
        model.score(x_train.view(), &y_train)?
    );
    println!(
        "Test accuracy:  {:.2}%, loss: {:.4}",
        model.accuracy(x_test.view(), &y_test)? * 100.0,
        model.score(x_test.view(), &y_test)?
    );

    let probe = x_test.slice(ndarray::s![..3, ..]);
    let probabilities = model.predict(probe)?;
    let classes = model.predict_classes(probe)?;
    for (p, c) in probabilities.iter().zip(classes) {
        println!("P(Versicolor) = {:.4} -> {:?}", p, c);
    }

    Ok(())
}
