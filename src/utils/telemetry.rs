// file: src/utils/telemetry.rs
// description: Wall-clock timing for search operations
// reference: https://doc.rust-lang.org/std/time/struct.Instant.html

use std::time::{Duration, Instant};
use tracing::debug;

/// Operation timer for performance tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed operation: {} in {:.3}ms",
            self.operation,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed operation: {} - {} items in {:.3}ms",
            self.operation,
            count,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }
}
