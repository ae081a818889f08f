use std::sync::Arc;

use openclaw_client::{ApiClient, ApiError};
use openclaw_core::{
    AlertThresholdUpdate, AlertThresholds, MonitoringStatus, SwarmHealth, TimelineFilters,
    TimelineResponse,
};

use crate::{decode, encode};

const HEALTH_PATH: &str = "/swarm/health";
const TIMELINE_PATH: &str = "/swarm/timeline";
const THRESHOLDS_PATH: &str = "/swarm/alerts/thresholds";
const STATUS_PATH: &str = "/swarm/monitoring/status";

/// Read-mostly facade over the swarm monitoring endpoints.
#[derive(Debug, Clone)]
pub struct MonitoringService {
    client: Arc<ApiClient>,
}

impl MonitoringService {
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn swarm_health(&self) -> Result<SwarmHealth, ApiError> {
        decode(HEALTH_PATH, self.client.get(HEALTH_PATH, &[]).await?)
    }

    /// Fetch coordination events, newest first.
    ///
    /// Timeline filter keys go on the wire as query parameters, which the
    /// client never case-converts; they are spelled snake_case here.
    pub async fn timeline(&self, filters: &TimelineFilters) -> Result<TimelineResponse, ApiError> {
        let limit = filters.limit.map(|limit| limit.to_string());
        let offset = filters.offset.map(|offset| offset.to_string());

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(task_id) = &filters.task_id {
            params.push(("task_id", task_id));
        }
        if let Some(peer_id) = &filters.peer_id {
            params.push(("peer_id", peer_id));
        }
        if let Some(event_type) = &filters.event_type {
            params.push(("event_type", event_type));
        }
        if let Some(since) = &filters.since {
            params.push(("since", since));
        }
        if let Some(until) = &filters.until {
            params.push(("until", until));
        }
        if let Some(limit) = &limit {
            params.push(("limit", limit));
        }
        if let Some(offset) = &offset {
            params.push(("offset", offset));
        }

        decode(TIMELINE_PATH, self.client.get(TIMELINE_PATH, &params).await?)
    }

    pub async fn alert_thresholds(&self) -> Result<AlertThresholds, ApiError> {
        decode(THRESHOLDS_PATH, self.client.get(THRESHOLDS_PATH, &[]).await?)
    }

    pub async fn update_alert_thresholds(
        &self,
        request: &AlertThresholdUpdate,
    ) -> Result<AlertThresholds, ApiError> {
        let body = encode(THRESHOLDS_PATH, request)?;
        decode(THRESHOLDS_PATH, self.client.put(THRESHOLDS_PATH, &body).await?)
    }

    pub async fn status(&self) -> Result<MonitoringStatus, ApiError> {
        decode(STATUS_PATH, self.client.get(STATUS_PATH, &[]).await?)
    }
}
