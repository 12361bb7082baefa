use handler_chain::core::handler_chain::HandlerChain;
use handler_chain::core::unmatched_policy::UnmatchedPolicy;
use handler_chain::handlers::handler_kind::HandlerKind;
use handler_chain::instrumentation::metrics::DispatchMetrics;
use handler_chain::Request;

// ============================================================================
// DEMO SCENARIOS
// ============================================================================

fn demo_default_chain() -> anyhow::Result<()> {
    println!("\n=== Demo 1: A → B → C with requests A, B, C ===\n");

    let chain = HandlerChain::demo();
    let mut stdout = std::io::stdout().lock();
    let outcomes = chain.dispatch_all(["A", "B", "C"], &mut stdout)?;

    println!("\n   Outcomes: {:?}", outcomes);
    Ok(())
}

fn demo_silent_drop() -> anyhow::Result<()> {
    println!("\n=== Demo 2: Unmatched request (Silent) ===\n");

    let chain = HandlerChain::demo();
    let mut stdout = std::io::stdout().lock();
    let outcome = chain.dispatch(&Request::from("Z"), &mut stdout)?;

    println!("\n   Outcome: {:?} (no handler claimed \"Z\")", outcome);
    Ok(())
}

fn demo_strict_policy() {
    println!("\n=== Demo 3: Unmatched request (Strict) ===\n");

    let chain = HandlerChain::demo().with_unmatched_policy(UnmatchedPolicy::Strict);
    let mut stdout = std::io::stdout().lock();

    match chain.dispatch(&Request::from("Z"), &mut stdout) {
        Ok(outcome) => println!("\n   Unexpected success: {:?}", outcome),
        Err(e) => println!("\n   Error: {}", e),
    }
}

fn demo_reordered_chain() -> anyhow::Result<()> {
    println!("\n=== Demo 4: Reordered chain C → B → A ===\n");

    let chain = HandlerChain::builder()
        .handler(HandlerKind::C)
        .handler(HandlerKind::B)
        .handler(HandlerKind::A)
        .build();

    let mut stdout = std::io::stdout().lock();
    let outcomes = chain.dispatch_all(["A", "B", "C", "Q"], &mut stdout)?;

    let mut metrics = DispatchMetrics::new();
    for outcome in &outcomes {
        metrics.record(outcome);
    }
    println!();
    metrics.write_summary(&mut stdout)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    println!("╔════════════════════════════════════════════╗");
    println!("║  Handler Chain - Chain of Responsibility   ║");
    println!("╚════════════════════════════════════════════╝");

    demo_default_chain()?;
    demo_silent_drop()?;
    demo_strict_policy();
    demo_reordered_chain()?;

    println!("\n✓ All demos completed");
    Ok(())
}
