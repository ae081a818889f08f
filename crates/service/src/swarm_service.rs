use std::sync::Arc;

use openclaw_client::{ApiClient, ApiError};
use openclaw_core::{
    CreateSwarmRequest, Swarm, SwarmListResponse, SwarmStatus, UpdateSwarmRequest,
};
use serde_json::json;

use crate::{decode, encode};

const BASE_PATH: &str = "/swarms";

/// Operations on agent swarms.
#[derive(Debug, Clone)]
pub struct SwarmService {
    client: Arc<ApiClient>,
}

impl SwarmService {
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List swarms with pagination, optionally filtered by status.
    pub async fn list(
        &self,
        status: Option<SwarmStatus>,
        limit: u32,
        offset: u32,
    ) -> Result<SwarmListResponse, ApiError> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let mut params = vec![("limit", limit.as_str()), ("offset", offset.as_str())];
        if let Some(status) = status {
            params.push(("status", status.as_str()));
        }
        decode(BASE_PATH, self.client.get(BASE_PATH, &params).await?)
    }

    pub async fn get(&self, swarm_id: &str) -> Result<Swarm, ApiError> {
        let path = format!("{BASE_PATH}/{swarm_id}");
        decode(&path, self.client.get(&path, &[]).await?)
    }

    pub async fn create(&self, request: &CreateSwarmRequest) -> Result<Swarm, ApiError> {
        let body = encode(BASE_PATH, request)?;
        decode(BASE_PATH, self.client.post(BASE_PATH, Some(&body)).await?)
    }

    pub async fn update(
        &self,
        swarm_id: &str,
        request: &UpdateSwarmRequest,
    ) -> Result<Swarm, ApiError> {
        let path = format!("{BASE_PATH}/{swarm_id}");
        let body = encode(&path, request)?;
        decode(&path, self.client.patch(&path, &body).await?)
    }

    /// Attach agents to a swarm. Returns the updated swarm.
    pub async fn add_agents(
        &self,
        swarm_id: &str,
        agent_ids: &[String],
    ) -> Result<Swarm, ApiError> {
        let path = format!("{BASE_PATH}/{swarm_id}/agents");
        let body = json!({ "agentIds": agent_ids });
        decode(&path, self.client.post(&path, Some(&body)).await?)
    }

    /// Detach agents from a swarm. Returns the updated swarm.
    ///
    /// The backend takes the payload on DELETE for this route; it goes
    /// through the standard body pipeline, so the wire body is
    /// `{"agent_ids": [...]}` like every other converted payload.
    pub async fn remove_agents(
        &self,
        swarm_id: &str,
        agent_ids: &[String],
    ) -> Result<Swarm, ApiError> {
        let path = format!("{BASE_PATH}/{swarm_id}/agents");
        let body = json!({ "agentIds": agent_ids });
        decode(&path, self.client.delete_with_body(&path, &body).await?)
    }

    pub async fn start(&self, swarm_id: &str) -> Result<Swarm, ApiError> {
        self.lifecycle_action(swarm_id, "start").await
    }

    pub async fn pause(&self, swarm_id: &str) -> Result<Swarm, ApiError> {
        self.lifecycle_action(swarm_id, "pause").await
    }

    pub async fn resume(&self, swarm_id: &str) -> Result<Swarm, ApiError> {
        self.lifecycle_action(swarm_id, "resume").await
    }

    /// Stop and discard a swarm. The agents themselves survive.
    pub async fn stop(&self, swarm_id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{BASE_PATH}/{swarm_id}")).await
    }

    async fn lifecycle_action(&self, swarm_id: &str, action: &str) -> Result<Swarm, ApiError> {
        let path = format!("{BASE_PATH}/{swarm_id}/{action}");
        decode(&path, self.client.post(&path, None).await?)
    }
}
