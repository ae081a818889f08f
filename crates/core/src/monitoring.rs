//! Types for the five `/swarm` monitoring endpoints.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health snapshot of one coordination subsystem.
///
/// Subsystems report arbitrary extra gauges alongside the availability flag;
/// those land in `extra` untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsystemStats {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
        }
    }
}

/// Aggregate swarm health, `GET /swarm/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwarmHealth {
    pub status: HealthState,
    pub timestamp: DateTime<Utc>,
    pub subsystems_available: u32,
    pub subsystems_total: u32,
    pub lease_expiration: Option<SubsystemStats>,
    pub result_buffer: Option<SubsystemStats>,
    pub partition_detection: Option<SubsystemStats>,
    pub node_crash_detection: Option<SubsystemStats>,
    pub lease_revocation: Option<SubsystemStats>,
    pub duplicate_prevention: Option<SubsystemStats>,
    pub ip_pool: Option<SubsystemStats>,
    pub message_verification: Option<SubsystemStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub event_type: String,
    pub task_id: Option<String>,
    pub peer_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub events: Vec<TimelineEvent>,
    pub total_count: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Filter set for `GET /swarm/timeline`. All fields optional; unset fields
/// are omitted from the query string entirely.
#[derive(Debug, Clone, Default)]
pub struct TimelineFilters {
    pub task_id: Option<String>,
    pub peer_id: Option<String>,
    pub event_type: Option<String>,
    /// Inclusive lower bound, RFC 3339.
    pub since: Option<String>,
    /// Inclusive upper bound, RFC 3339.
    pub until: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Alert thresholds, `GET`/`PUT /swarm/alerts/thresholds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertThresholds {
    pub buffer_utilization: f64,
    pub crash_count: u32,
    pub revocation_rate: f64,
    pub ip_pool_utilization: f64,
    pub updated_at: DateTime<Utc>,
}

/// Partial threshold update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertThresholdUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_utilization: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crash_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_pool_utilization: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsystemAvailability {
    pub available: bool,
}

/// Monitoring pipeline status, `GET /swarm/monitoring/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub subsystems: HashMap<String, SubsystemAvailability>,
    pub registered_health_subsystems: u32,
    pub timeline_event_count: u64,
    pub bootstrapped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swarm_health_deserializes_with_missing_subsystems() {
        let health: SwarmHealth = serde_json::from_value(json!({
            "status": "degraded",
            "timestamp": "2026-03-11T12:00:00Z",
            "subsystemsAvailable": 6,
            "subsystemsTotal": 8,
            "leaseExpiration": {"available": true, "activeLeases": 12},
            "resultBuffer": {"available": false, "error": "buffer full", "utilization": 1.0},
            "partitionDetection": null,
            "nodeCrashDetection": null,
            "leaseRevocation": null,
            "duplicatePrevention": null,
            "ipPool": null,
            "messageVerification": null
        }))
        .expect("valid SwarmHealth");
        assert_eq!(health.status, HealthState::Degraded);
        let buffer = health.result_buffer.expect("resultBuffer");
        assert_eq!(buffer.error.as_deref(), Some("buffer full"));
        assert_eq!(buffer.extra.get("utilization"), Some(&json!(1.0)));
    }

    #[test]
    fn test_threshold_update_serializes_partially() {
        let update = AlertThresholdUpdate {
            buffer_utilization: Some(0.9),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).expect("serializable");
        assert_eq!(value, json!({"bufferUtilization": 0.9}));
    }
}
