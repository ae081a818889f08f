use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use openclaw_client::{ApiClient, ClientConfig};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{agents, monitor, swarms, templates};

#[derive(Parser)]
#[command(name = "openclaw")]
#[command(about = "Admin CLI for the OpenClaw agent orchestration API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage agents
    #[command(subcommand)]
    Agents(agents::AgentsCommand),
    /// Manage agent swarms
    #[command(subcommand)]
    Swarms(swarms::SwarmsCommand),
    /// Manage agent templates
    #[command(subcommand)]
    Templates(templates::TemplatesCommand),
    /// Swarm monitoring views
    #[command(subcommand)]
    Monitor(monitor::MonitorCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let client = Arc::new(ApiClient::new(ClientConfig::from_env())?);

    match cli.command {
        Commands::Agents(command) => agents::run(command, client).await,
        Commands::Swarms(command) => swarms::run(command, client).await,
        Commands::Templates(command) => templates::run(command, client).await,
        Commands::Monitor(command) => monitor::run(command, client).await,
    }
}
