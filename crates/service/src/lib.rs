//! Service facades for openclaw
//!
//! One facade per API resource group. Each operation maps to exactly one
//! [`openclaw_client::ApiClient`] call and decodes the response into the
//! typed models from `openclaw-core`.

mod agent_service;
mod monitoring_service;
mod swarm_service;
mod template_service;

pub use agent_service::AgentService;
pub use monitoring_service::MonitoringService;
pub use swarm_service::SwarmService;
pub use template_service::TemplateService;

use openclaw_client::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response value into a typed model, treating a no-content
/// response as an error (every facade operation that calls this expects a
/// body).
pub(crate) fn decode<T: DeserializeOwned>(
    context: &str,
    value: Option<Value>,
) -> Result<T, ApiError> {
    let value = value.ok_or_else(|| ApiError::EmptyResponse { path: context.to_owned() })?;
    serde_json::from_value(value)
        .map_err(|source| ApiError::Decode { context: context.to_owned(), source })
}

/// Serialize a request model to the application-format JSON the client
/// expects.
pub(crate) fn encode<T: Serialize>(context: &str, request: &T) -> Result<Value, ApiError> {
    serde_json::to_value(request)
        .map_err(|source| ApiError::Encode { context: context.to_owned(), source })
}
