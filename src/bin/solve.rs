//! Binary that runs one search approach over a directory of graph instances,
//! each under a hard per-instance deadline.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

use budget_cover::approach::Approach;
use budget_cover::driver::Batch;

#[derive(Parser)]
#[command(name = "solve")]
#[command(about = "Bounded vertex cover search over a batch of graph instances")]
struct Cmd {
    /// Approach name: brute_force, recursion_2k, recursion_1_618k,
    /// recursion_1_47k, approx_2 or approx_log
    approach: String,

    /// Glob pattern naming the graph instance files
    #[arg(long, default_value = "graph/*")]
    graphs: String,

    /// Cover size budget for the exact approaches
    #[arg(long, default_value_t = 20)]
    budget: usize,

    /// Per-instance wall clock limit in seconds
    #[arg(long, default_value_t = 5)]
    timeout: u64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    // fail on a bad approach name before touching any graph
    let approach: Approach = cmd.approach.parse()?;
    let batch = Batch::load(&cmd.graphs)?;
    tracing::info!(
        approach = %approach,
        instances = batch.instances().len(),
        "batch loaded"
    );
    if approach.is_approximation() {
        let removed = batch.remove_stale_solutions()?;
        if removed > 0 {
            tracing::info!(removed, "deleted stale solution files");
        }
    }
    batch.run(approach, cmd.budget, Duration::from_secs(cmd.timeout));
    Ok(())
}
