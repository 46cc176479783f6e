use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting sink for pipeline status events.
///
/// Keeps the use case free of any particular output mechanism: the CLI
/// prints to stdout, tests record or discard.
pub trait PipelineLogger {
    /// A human-readable status line.
    fn info(&mut self, message: &str);

    /// How long a named pipeline stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn info(&mut self, _message: &str) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
}

/// Prints status lines to stdout and keeps per-stage timings, reported
/// through the `log` facade at debug level when the run finishes.
pub struct ConsolePipelineLogger {
    timings: Vec<(String, f64)>,
    start_time: Instant,
}

impl ConsolePipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary, or `None` if no stage was timed.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut totals: HashMap<&str, f64> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for (stage, ms) in &self.timings {
            if !totals.contains_key(stage.as_str()) {
                order.push(stage);
            }
            *totals.entry(stage).or_default() += ms;
        }

        let mut lines = vec![format!("Pipeline summary ({:.1}s total):", elapsed_ms / 1000.0)];
        for stage in order {
            let total_ms = totals[stage];
            let pct = if elapsed_ms > 0.0 {
                total_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!("  {stage:12}: {total_ms:9.0}ms  ({pct:4.1}%)"));
        }
        Some(lines.join("\n"))
    }

    #[cfg(test)]
    fn timings_for(&self, stage: &str) -> Vec<f64> {
        self.timings
            .iter()
            .filter(|(s, _)| s == stage)
            .map(|(_, ms)| *ms)
            .collect()
    }
}

impl Default for ConsolePipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for ConsolePipelineLogger {
    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        log::debug!("{stage} took {duration_ms:.0}ms");
        self.timings.push((stage.to_string(), duration_ms));
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::debug!("\n{text}");
        }
    }
}
