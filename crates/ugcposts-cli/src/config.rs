//! Environment-driven configuration for the CLI.

use std::env::VarError;

use anyhow::anyhow;

const DEFAULT_USER_AGENT: &str = "ugcposts/0.1 (reviews-scrape)";

pub struct CliConfig {
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

/// Loads CLI configuration from the process environment.
///
/// `.env` loading is the caller's concern (`main` runs `dotenvy` first).
///
/// # Errors
///
/// Returns an error when a set variable fails to parse.
pub fn load_config() -> anyhow::Result<CliConfig> {
    build_config(|key| std::env::var(key))
}

/// Builds configuration from the provided lookup so tests can use a plain
/// map instead of mutating the process environment.
fn build_config<F>(lookup: F) -> anyhow::Result<CliConfig>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_owned());

    let raw_timeout = or_default("UGCPOSTS_REQUEST_TIMEOUT_SECS", "30");
    let request_timeout_secs = raw_timeout.parse::<u64>().map_err(|e| {
        anyhow!("invalid UGCPOSTS_REQUEST_TIMEOUT_SECS \"{raw_timeout}\": {e}")
    })?;

    let user_agent = or_default("UGCPOSTS_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(CliConfig {
        request_timeout_secs,
        user_agent,
    })
}
