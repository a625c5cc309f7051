//! Configuration file reading and generation

use crate::models::{Config, TEAM_ENV_VAR};
use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;

/// Parse a configuration file from a string.
///
/// Unknown keys (including the generated `__NOTE__`) are ignored and
/// missing keys fall back to their defaults.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config =
        serde_json::from_str(content).context("Failed to parse configuration file")?;
    Ok(config)
}

/// Load and parse the configuration file from disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content)
}

/// Write the default configuration file, including a reminder that the
/// team identifier comes from the environment rather than this file.
pub fn write_default_config(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut value = serde_json::to_value(Config::default())
        .context("Failed to serialize default configuration")?;
    value["__NOTE__"] = json!(format!(
        "Don't forget to set the environment variable {TEAM_ENV_VAR}"
    ));

    let content = serde_json::to_string_pretty(&value)
        .context("Failed to serialize default configuration")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
