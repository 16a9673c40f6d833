//! # Timer Module
//!
//! A stopwatch for measuring how long a named operation takes and logging it.

use log::info;
use web_time::{Duration, Instant};

/// Times one named operation at a time.
///
/// Starting a new operation ends the running one first, so consecutive
/// `begin_operation` calls log each step of a sequence.
///
/// # Example
/// ```rust
/// use voxel_geometry::timer::Stopwatch;
///
/// let mut stopwatch = Stopwatch::new();
/// stopwatch.begin_operation("Generate terrain");
/// stopwatch.begin_operation("Build mesh"); // logs "Generate terrain"
/// assert!(stopwatch.end_operation().is_some()); // logs "Build mesh"
/// assert!(stopwatch.end_operation().is_none());
/// ```
#[derive(Debug, Default)]
pub struct Stopwatch {
    running: Option<(String, Instant)>,
}

impl Stopwatch {
    /// Creates a stopwatch with no running operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ends the running operation, if any, and starts timing `operation`.
    pub fn begin_operation(&mut self, operation: impl Into<String>) {
        self.end_operation();
        self.running = Some((operation.into(), Instant::now()));
    }

    /// Stops the running operation and logs its duration.
    ///
    /// # Returns
    /// The elapsed time, or `None` if no operation was running.
    pub fn end_operation(&mut self) -> Option<Duration> {
        let (operation, started) = self.running.take()?;
        let elapsed = started.elapsed();

        info!("Operation {} took {}ms", operation, elapsed.as_millis());

        Some(elapsed)
    }

    /// Name of the running operation.
    pub fn current_operation(&self) -> Option<&str> {
        self.running.as_ref().map(|(operation, _)| operation.as_str())
    }
}
