use std::time::{Duration, Instant};

/// Accumulating stopwatch.
#[derive(Debug, Default)]
pub struct Timer {
    start: Option<Instant>,
    total: Duration,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    /// Stops the timer and adds the lap to the total. Returns the lap.
    pub fn stop(&mut self) -> Duration {
        match self.start.take() {
            Some(start) => {
                let lap = start.elapsed();
                self.total += lap;
                lap
            }
            None => Duration::ZERO,
        }
    }

    pub fn total_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0
    }
}

/// Runs `f` once and returns its result with the elapsed time.
pub fn time_fn<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
