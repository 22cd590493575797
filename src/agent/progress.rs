use std::time::Duration;

/// Training progress accessors with formatted checkpoint output.
///
/// # Required Methods
///
/// - `episodes()` — Episodes completed
/// - `steps()` — Environment steps taken across all episodes
/// - `rows()` — Observations with a table row
/// - `elapsed()` — Wall-clock training duration
pub trait Progress {
    fn episodes(&self) -> usize;
    fn steps(&self) -> usize;
    fn rows(&self) -> usize;
    fn elapsed(&self) -> Duration;
    /// Formats stats as aligned columns with throughput calculation.
    fn format(&self) -> String {
        let rates = self.steps() as f64 / self.elapsed().as_secs_f64().max(1e-3);
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("episode {}", self.episodes()),
            format!("steps {}", self.steps()),
            format!("rows {}", self.rows()),
            format!("S/sec {:.1}", rates),
        )
    }
    fn summary(&self) -> String {
        format!("training stopped\n{}", self.format())
    }
}
