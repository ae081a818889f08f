pub mod agents;
pub mod monitor;
pub mod swarms;
pub mod templates;

use anyhow::Result;
use serde::Serialize;

/// Print an API response as pretty JSON, the output format every subcommand
/// shares.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
