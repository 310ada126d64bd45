use clap::Parser;

use plan_simulator::cli::{Cli, run};
use plan_simulator::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    run(Cli::parse()).await
}
