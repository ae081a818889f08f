use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use openclaw_client::ApiClient;
use openclaw_core::{
    CreateTemplateRequest, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET, UpdateTemplateRequest,
};
use openclaw_service::TemplateService;

use super::print_json;

#[derive(Subcommand)]
pub enum TemplatesCommand {
    /// List templates
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_OFFSET)]
        offset: u32,
    },
    /// Show one template
    Get { id: String },
    /// Create a template
    Create {
        name: String,
        #[arg(short, long)]
        category: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Template config as inline JSON
        #[arg(long, value_parser = parse_json)]
        config: Option<serde_json::Value>,
    },
    /// Update template fields (only the given fields change)
    Update {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Template config as inline JSON
        #[arg(long, value_parser = parse_json)]
        config: Option<serde_json::Value>,
    },
    /// Delete a template
    Delete { id: String },
    /// Populate the backend's built-in template catalog
    Seed,
}

fn parse_json(raw: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(raw)
}

pub async fn run(command: TemplatesCommand, client: Arc<ApiClient>) -> Result<()> {
    let service = TemplateService::new(client);
    match command {
        TemplatesCommand::List { category, limit, offset } => {
            print_json(&service.list(category.as_deref(), limit, offset).await?)
        },
        TemplatesCommand::Get { id } => print_json(&service.get(&id).await?),
        TemplatesCommand::Create { name, category, description, config } => {
            let request = CreateTemplateRequest { name, description, category, config };
            print_json(&service.create(&request).await?)
        },
        TemplatesCommand::Update { id, name, category, description, config } => {
            let request = UpdateTemplateRequest { name, description, category, config };
            print_json(&service.update(&id, &request).await?)
        },
        TemplatesCommand::Delete { id } => {
            service.delete(&id).await?;
            println!("Deleted template {id}");
            Ok(())
        },
        TemplatesCommand::Seed => print_json(&service.seed().await?),
    }
}
