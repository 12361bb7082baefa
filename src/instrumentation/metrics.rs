use std::io::{self, Write};

use hashbrown::HashMap;

use crate::core::outcome::Outcome;
use crate::handlers::handler_kind::HandlerKind;

/// Dispatch counts collected over a run
///
/// Records which handler terminated each traversal, plus the requests that ran
/// off the end of the chain.
///
/// # Example
///
/// ```ignore
/// use handler_chain::instrumentation::metrics::DispatchMetrics;
///
/// let mut metrics = DispatchMetrics::new();
/// for outcome in chain.dispatch_all(["A", "B", "Z"], &mut out)? {
///     metrics.record(&outcome);
/// }
/// metrics.write_summary(&mut std::io::stderr())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatchMetrics {
    processed: HashMap<HandlerKind, u64>,
    unhandled: u64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome.handled_by() {
            Some(kind) => *self.processed.entry(kind).or_insert(0) += 1,
            None => self.unhandled += 1,
        }
    }

    /// Number of requests processed by `kind`
    pub fn processed_by(&self, kind: HandlerKind) -> u64 {
        self.processed.get(&kind).copied().unwrap_or(0)
    }

    pub fn unhandled(&self) -> u64 {
        self.unhandled
    }

    pub fn total(&self) -> u64 {
        self.processed.values().sum::<u64>() + self.unhandled
    }

    /// Share of requests that some handler processed (0.0 - 100.0)
    pub fn handled_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            ((total - self.unhandled) as f64 / total as f64) * 100.0
        }
    }

    pub fn reset(&mut self) {
        self.processed.clear();
        self.unhandled = 0;
    }

    /// Write a summary table of all counts
    pub fn write_summary<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "=== Dispatch Metrics Summary ===")?;
        writeln!(out, "{:<12} {:>10}", "Handler", "Processed")?;
        writeln!(out, "{}", "-".repeat(23))?;

        let mut sorted: Vec<_> = self.processed.iter().collect();
        sorted.sort_by_key(|(kind, _)| **kind);

        for (kind, count) in sorted {
            writeln!(out, "{:<12} {:>10}", kind.name(), count)?;
        }
        writeln!(out, "{:<12} {:>10}", "Unhandled", self.unhandled)?;
        writeln!(out, "Handled: {:.1}%", self.handled_rate())
    }
}
