//! Neighbors Force CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the bot HTTP server
//! - attack: Print the attack decision for a snapshot file
//! - upgrade: Print the upgrade decision for a snapshot file

mod decide;
mod planner_args;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use decide::{DecideArgs, Decision};
use planner_args::PlannerArgs;
use server::ServerArgs;

#[derive(Parser)]
#[command(name = "neighbors")]
#[command(about = "Neighbors Force bot player")]
struct Cli {
    #[command(flatten)]
    planner: PlannerArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot HTTP server
    Serve(ServerArgs),
    /// Decide an attack for a snapshot
    Attack(DecideArgs),
    /// Decide an upgrade for a snapshot
    Upgrade(DecideArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for decisions
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let planner = cli.planner.to_config();

    match cli.command {
        Commands::Serve(args) => server::run(args, planner),
        Commands::Attack(args) => decide::run(args, Decision::Attack, planner),
        Commands::Upgrade(args) => decide::run(args, Decision::Upgrade, planner),
    }
}
