//! handler-chain - runs the A → B → C demonstration chain
//!
//! Handler output goes to stdout; diagnostics go to stderr via `RUST_LOG`.

use std::io::Write;

use handler_chain::HandlerChain;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_REQUESTS: [&str; 3] = ["A", "B", "C"];

fn main() -> anyhow::Result<()> {
    // Diagnostics stay off stdout so the transcript is exact
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let chain = HandlerChain::demo();
    info!(handlers = chain.len(), "dispatching demo requests");

    let mut stdout = std::io::stdout().lock();
    let outcomes = chain.dispatch_all(DEMO_REQUESTS, &mut stdout)?;
    stdout.flush()?;

    let handled = outcomes.iter().filter(|outcome| outcome.is_handled()).count();
    info!(requests = outcomes.len(), handled, "demo complete");

    #[cfg(feature = "metrics")]
    log_metrics(&outcomes);

    Ok(())
}

#[cfg(feature = "metrics")]
fn log_metrics(outcomes: &[handler_chain::Outcome]) {
    use handler_chain::{DispatchMetrics, HandlerKind};

    let mut metrics = DispatchMetrics::new();
    for outcome in outcomes {
        metrics.record(outcome);
    }

    tracing::debug!(
        handler_a = metrics.processed_by(HandlerKind::A),
        handler_b = metrics.processed_by(HandlerKind::B),
        handler_c = metrics.processed_by(HandlerKind::C),
        unhandled = metrics.unhandled(),
        "dispatch metrics"
    );
}
