use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use openclaw_client::ApiClient;
use openclaw_core::{
    AgentStatus, CreateAgentRequest, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET, HeartbeatConfig,
    UpdateAgentSettingsRequest,
};
use openclaw_service::AgentService;

use super::print_json;

#[derive(Subcommand)]
pub enum AgentsCommand {
    /// List agents
    List {
        /// Filter by status (provisioning|running|paused|stopped|error)
        #[arg(short, long)]
        status: Option<AgentStatus>,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_OFFSET)]
        offset: u32,
    },
    /// Show one agent
    Get { id: String },
    /// Create an agent
    Create {
        name: String,
        #[arg(short, long)]
        model: String,
        #[arg(short, long)]
        persona: Option<String>,
        /// Enable a scheduled heartbeat with this interval, e.g. "5m"
        #[arg(long, value_name = "INTERVAL")]
        heartbeat: Option<String>,
        /// Checklist prompt for the scheduled heartbeat
        #[arg(long, requires = "heartbeat")]
        checklist: Option<String>,
    },
    /// Provision backing infrastructure for an agent
    Provision { id: String },
    /// Pause an agent
    Pause { id: String },
    /// Resume a paused agent
    Resume { id: String },
    /// Update agent settings (only the given fields change)
    Settings {
        id: String,
        #[arg(short, long)]
        persona: Option<String>,
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Delete an agent
    Delete { id: String },
    /// Trigger an immediate heartbeat run
    Heartbeat { id: String },
}

pub async fn run(command: AgentsCommand, client: Arc<ApiClient>) -> Result<()> {
    let service = AgentService::new(client);
    match command {
        AgentsCommand::List { status, limit, offset } => {
            print_json(&service.list(status, limit, offset).await?)
        },
        AgentsCommand::Get { id } => print_json(&service.get(&id).await?),
        AgentsCommand::Create { name, model, persona, heartbeat, checklist } => {
            let request = CreateAgentRequest {
                name,
                model,
                persona,
                heartbeat: heartbeat.map(|interval| HeartbeatConfig {
                    enabled: true,
                    interval,
                    checklist,
                }),
            };
            print_json(&service.create(&request).await?)
        },
        AgentsCommand::Provision { id } => print_json(&service.provision(&id).await?),
        AgentsCommand::Pause { id } => print_json(&service.pause(&id).await?),
        AgentsCommand::Resume { id } => print_json(&service.resume(&id).await?),
        AgentsCommand::Settings { id, persona, model } => {
            let request = UpdateAgentSettingsRequest { persona, model, heartbeat: None };
            print_json(&service.update_settings(&id, &request).await?)
        },
        AgentsCommand::Delete { id } => {
            service.delete(&id).await?;
            println!("Deleted agent {id}");
            Ok(())
        },
        AgentsCommand::Heartbeat { id } => print_json(&service.execute_heartbeat(&id).await?),
    }
}
