use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use openclaw_client::ApiClient;
use openclaw_core::{
    CoordinationStrategy, CreateSwarmRequest, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET,
    SwarmStatus, UpdateSwarmRequest,
};
use openclaw_service::SwarmService;

use super::print_json;

#[derive(Subcommand)]
pub enum SwarmsCommand {
    /// List swarms
    List {
        /// Filter by status (idle|running|paused|stopped|failed)
        #[arg(short, long)]
        status: Option<SwarmStatus>,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_OFFSET)]
        offset: u32,
    },
    /// Show one swarm
    Get { id: String },
    /// Create a swarm
    Create {
        name: String,
        /// Coordination strategy (parallel|sequential|hierarchical)
        #[arg(short, long, default_value = "parallel")]
        strategy: CoordinationStrategy,
        #[arg(short, long)]
        description: Option<String>,
        /// Task description handed to the swarm on start
        #[arg(short, long)]
        task: Option<String>,
        /// Agent ids to attach, comma-separated
        #[arg(short, long, value_delimiter = ',')]
        agents: Option<Vec<String>>,
    },
    /// Update swarm fields (only the given fields change)
    Update {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        strategy: Option<CoordinationStrategy>,
        #[arg(short, long)]
        task: Option<String>,
    },
    /// Attach agents to a swarm
    AddAgents {
        id: String,
        /// Agent ids, comma-separated
        #[arg(value_delimiter = ',')]
        agents: Vec<String>,
    },
    /// Detach agents from a swarm
    RemoveAgents {
        id: String,
        /// Agent ids, comma-separated
        #[arg(value_delimiter = ',')]
        agents: Vec<String>,
    },
    /// Start a swarm
    Start { id: String },
    /// Pause a running swarm
    Pause { id: String },
    /// Resume a paused swarm
    Resume { id: String },
    /// Stop and discard a swarm
    Stop { id: String },
}

pub async fn run(command: SwarmsCommand, client: Arc<ApiClient>) -> Result<()> {
    let service = SwarmService::new(client);
    match command {
        SwarmsCommand::List { status, limit, offset } => {
            print_json(&service.list(status, limit, offset).await?)
        },
        SwarmsCommand::Get { id } => print_json(&service.get(&id).await?),
        SwarmsCommand::Create { name, strategy, description, task, agents } => {
            let request = CreateSwarmRequest {
                name,
                description,
                strategy,
                task_description: task,
                agent_ids: agents,
            };
            print_json(&service.create(&request).await?)
        },
        SwarmsCommand::Update { id, name, description, strategy, task } => {
            let request =
                UpdateSwarmRequest { name, description, strategy, task_description: task };
            print_json(&service.update(&id, &request).await?)
        },
        SwarmsCommand::AddAgents { id, agents } => {
            print_json(&service.add_agents(&id, &agents).await?)
        },
        SwarmsCommand::RemoveAgents { id, agents } => {
            print_json(&service.remove_agents(&id, &agents).await?)
        },
        SwarmsCommand::Start { id } => print_json(&service.start(&id).await?),
        SwarmsCommand::Pause { id } => print_json(&service.pause(&id).await?),
        SwarmsCommand::Resume { id } => print_json(&service.resume(&id).await?),
        SwarmsCommand::Stop { id } => {
            service.stop(&id).await?;
            println!("Stopped swarm {id}");
            Ok(())
        },
    }
}
