//! Core types and utilities for openclaw
//!
//! This crate contains domain types shared across all other crates, plus the
//! snake_case/camelCase key conversion used by the HTTP client.

mod agent;
mod case;
mod constants;
mod env_config;
mod monitoring;
mod swarm;
mod template;

pub use agent::*;
pub use case::*;
pub use constants::*;
pub use env_config::*;
pub use monitoring::*;
pub use swarm::*;
pub use template::*;
