use std::sync::Arc;

use openclaw_client::{ApiClient, ApiError};
use openclaw_core::{
    Agent, AgentListResponse, AgentStatus, CreateAgentRequest, HeartbeatOutcome,
    UpdateAgentSettingsRequest,
};

use crate::{decode, encode};

const BASE_PATH: &str = "/agents";

/// Operations on individual agents.
#[derive(Debug, Clone)]
pub struct AgentService {
    client: Arc<ApiClient>,
}

impl AgentService {
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List agents with pagination, optionally filtered by status.
    pub async fn list(
        &self,
        status: Option<AgentStatus>,
        limit: u32,
        offset: u32,
    ) -> Result<AgentListResponse, ApiError> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let mut params = vec![("limit", limit.as_str()), ("offset", offset.as_str())];
        if let Some(status) = status {
            params.push(("status", status.as_str()));
        }
        decode(BASE_PATH, self.client.get(BASE_PATH, &params).await?)
    }

    pub async fn get(&self, agent_id: &str) -> Result<Agent, ApiError> {
        let path = format!("{BASE_PATH}/{agent_id}");
        decode(&path, self.client.get(&path, &[]).await?)
    }

    pub async fn create(&self, request: &CreateAgentRequest) -> Result<Agent, ApiError> {
        let body = encode(BASE_PATH, request)?;
        decode(BASE_PATH, self.client.post(BASE_PATH, Some(&body)).await?)
    }

    /// Provision backing infrastructure for a created agent.
    pub async fn provision(&self, agent_id: &str) -> Result<Agent, ApiError> {
        self.lifecycle_action(agent_id, "provision").await
    }

    pub async fn pause(&self, agent_id: &str) -> Result<Agent, ApiError> {
        self.lifecycle_action(agent_id, "pause").await
    }

    pub async fn resume(&self, agent_id: &str) -> Result<Agent, ApiError> {
        self.lifecycle_action(agent_id, "resume").await
    }

    pub async fn update_settings(
        &self,
        agent_id: &str,
        request: &UpdateAgentSettingsRequest,
    ) -> Result<Agent, ApiError> {
        let path = format!("{BASE_PATH}/{agent_id}/settings");
        let body = encode(&path, request)?;
        decode(&path, self.client.patch(&path, &body).await?)
    }

    pub async fn delete(&self, agent_id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{BASE_PATH}/{agent_id}")).await
    }

    /// Trigger an immediate heartbeat run outside the configured schedule.
    pub async fn execute_heartbeat(&self, agent_id: &str) -> Result<HeartbeatOutcome, ApiError> {
        let path = format!("{BASE_PATH}/{agent_id}/heartbeat");
        decode(&path, self.client.post(&path, None).await?)
    }

    async fn lifecycle_action(&self, agent_id: &str, action: &str) -> Result<Agent, ApiError> {
        let path = format!("{BASE_PATH}/{agent_id}/{action}");
        decode(&path, self.client.post(&path, None).await?)
    }
}
