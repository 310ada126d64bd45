use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::api::run_http_server;
use crate::catalog::{SimulatorData, resolve_catalog};
use crate::config::{CatalogArgs, ServerConfig};
use crate::core::{SimulationInput, SimulationOutcome, SimulationSession};
use crate::validation::validate_input;

#[derive(Parser, Debug)]
#[command(
    name = "plan-simulator",
    about = "Insurance plan pricing and recommendation simulator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the simulator JSON API.
    Serve(ServerConfig),
    /// Price every plan once and print the outcome as JSON.
    Quote(QuoteArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct QuoteArgs {
    #[arg(long, help = "Vehicle value in currency units, 10000 to 500000")]
    pub vehicle_value: f64,
    #[arg(long, help = "Client age in years, 18 to 90")]
    pub client_age: u32,
    #[arg(
        long = "coverage",
        value_name = "ID",
        help = "Additional coverage id; repeat for several"
    )]
    pub coverages: Vec<String>,
    #[arg(long = "select", value_name = "PLAN", help = "Plan chosen by the client")]
    pub selected_plan: Option<String>,
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(config) => {
            let data = resolve_catalog(config.catalog.path.as_deref())
                .context("failed to load plan catalog")?;
            run_http_server(&config, data)
                .await
                .context("HTTP server error")
        }
        Command::Quote(args) => {
            let data = resolve_catalog(args.catalog.path.as_deref())
                .context("failed to load plan catalog")?;
            let outcome = quote(&data, &args)?;
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &outcome)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

pub fn quote(data: &SimulatorData, args: &QuoteArgs) -> anyhow::Result<SimulationOutcome> {
    let input = SimulationInput::new(args.vehicle_value, args.client_age)
        .with_coverages(args.coverages.iter().cloned());
    validate_input(&input)?;

    let mut session = SimulationSession::new(data.plans_indicators.clone());
    session.set_vehicle_value(input.vehicle_value);
    session.set_client_age(input.client_age);
    for id in &input.selected_coverage_ids {
        session.toggle_coverage(id)?;
    }
    if let Some(name) = &args.selected_plan {
        session.select_plan(name)?;
    }

    let outcome = session.outcome();
    info!(
        plans = outcome.plans.len(),
        recommended = outcome.recommended_plan.as_deref().unwrap_or("-"),
        "quote computed"
    );
    Ok(outcome)
}
