//! Quick timing table: training cost and accuracy for a few configurations.
//!
//! For statistically sound numbers use `cargo bench --package benchmarks`.

use benchmarks::{time_fn, two_blobs, Timer};
use logistic_rs::{BinaryClassifier, ClassifierConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("logistic-rs benchmark suite");
    println!();
    println!(
        "{:>8} {:>9} {:>7} {:>7} {:>11} {:>9}",
        "samples", "features", "batch", "epochs", "fit (ms)", "accuracy"
    );

    let mut predict_timer = Timer::new();
    for &(n_samples, n_features) in &[(100, 2), (1000, 4), (10000, 8)] {
        let data = two_blobs(n_samples, n_features, 3.0, 42);
        for &batch_size in &[1, 32, 256] {
            let config = ClassifierConfig {
                learning_rate: 0.1,
                epochs: 2000,
                batch_size,
                verbose: false,
                seed: Some(0),
                ..ClassifierConfig::default()
            };
            let (fitted, elapsed) =
                time_fn(|| BinaryClassifier::new(config).fit(data.x.view(), &data.y));
            let fitted = fitted?;

            predict_timer.start();
            let accuracy = fitted.accuracy(data.x.view(), &data.y)?;
            predict_timer.stop();

            println!(
                "{:>8} {:>9} {:>7} {:>7} {:>11.2} {:>8.2}%",
                data.n_samples(),
                data.n_features(),
                batch_size,
                fitted.loss_history().len(),
                elapsed.as_secs_f64() * 1000.0,
                accuracy * 100.0
            );
        }
    }

    println!();
    println!("Total prediction time: {:.3} ms", predict_timer.total_ms());
    Ok(())
}
