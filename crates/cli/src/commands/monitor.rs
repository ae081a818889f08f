use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use openclaw_client::ApiClient;
use openclaw_core::{
    AlertThresholdUpdate, MAX_WATCH_INTERVAL_SECS, MIN_WATCH_INTERVAL_SECS, TimelineFilters,
};
use openclaw_service::MonitoringService;

use super::print_json;

#[derive(Subcommand)]
pub enum MonitorCommand {
    /// Aggregate swarm health
    Health,
    /// Coordination event timeline
    Timeline {
        #[arg(long)]
        task_id: Option<String>,
        #[arg(long)]
        peer_id: Option<String>,
        #[arg(long)]
        event_type: Option<String>,
        /// Earliest event timestamp, RFC 3339
        #[arg(long)]
        since: Option<String>,
        /// Latest event timestamp, RFC 3339
        #[arg(long)]
        until: Option<String>,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long)]
        offset: Option<u32>,
    },
    /// Show alert thresholds
    Thresholds,
    /// Update alert thresholds (only the given fields change)
    SetThresholds {
        #[arg(long)]
        buffer_utilization: Option<f64>,
        #[arg(long)]
        crash_count: Option<u32>,
        #[arg(long)]
        revocation_rate: Option<f64>,
        #[arg(long)]
        ip_pool_utilization: Option<f64>,
    },
    /// Monitoring pipeline status
    Status,
    /// Poll health and status on an interval until interrupted
    Watch {
        /// Seconds between polls, clamped to 5-60
        #[arg(short, long, default_value_t = 10)]
        interval: u64,
    },
}

pub async fn run(command: MonitorCommand, client: Arc<ApiClient>) -> Result<()> {
    let service = MonitoringService::new(client);
    match command {
        MonitorCommand::Health => print_json(&service.swarm_health().await?),
        MonitorCommand::Timeline { task_id, peer_id, event_type, since, until, limit, offset } => {
            let filters =
                TimelineFilters { task_id, peer_id, event_type, since, until, limit, offset };
            print_json(&service.timeline(&filters).await?)
        },
        MonitorCommand::Thresholds => print_json(&service.alert_thresholds().await?),
        MonitorCommand::SetThresholds {
            buffer_utilization,
            crash_count,
            revocation_rate,
            ip_pool_utilization,
        } => {
            let request = AlertThresholdUpdate {
                buffer_utilization,
                crash_count,
                revocation_rate,
                ip_pool_utilization,
            };
            print_json(&service.update_alert_thresholds(&request).await?)
        },
        MonitorCommand::Status => print_json(&service.status().await?),
        MonitorCommand::Watch { interval } => watch(&service, interval).await,
    }
}

/// Poll the two live-dashboard endpoints until interrupted. Transient
/// failures are logged and the loop keeps going; a dashboard that dies on
/// one failed poll is useless.
async fn watch(service: &MonitoringService, interval_secs: u64) -> Result<()> {
    let interval_secs = interval_secs.clamp(MIN_WATCH_INTERVAL_SECS, MAX_WATCH_INTERVAL_SECS);
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    tracing::info!(interval_secs, "watching swarm health; Ctrl-C to stop");

    loop {
        ticker.tick().await;
        match service.swarm_health().await {
            Ok(health) => print_json(&health)?,
            Err(e) => tracing::warn!(error = %e, "health poll failed"),
        }
        match service.status().await {
            Ok(status) => print_json(&status)?,
            Err(e) => tracing::warn!(error = %e, "status poll failed"),
        }
    }
}
