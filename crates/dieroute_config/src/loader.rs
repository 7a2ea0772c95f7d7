//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{ProjectConfig, RoutingConfig};
use std::path::Path;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "dieroute.toml";

/// Loads and validates a `dieroute.toml` configuration from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `dieroute.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are in range.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    for (field, value) in [
        ("inputs.position", &config.inputs.position),
        ("inputs.network", &config.inputs.network),
        ("inputs.net", &config.inputs.net),
    ] {
        if value.is_empty() {
            return Err(ConfigError::MissingField(field.to_string()));
        }
    }
    if config.report.output.is_empty() {
        return Err(ConfigError::MissingField("report.output".to_string()));
    }
    validate_routing(&config.routing)
}

/// Checks routing options; also used after CLI overrides are applied.
///
/// A route needs at least a source and a target die, so the hop limit must
/// be at least 2, and the path search must be allowed to collect something.
pub fn validate_routing(routing: &RoutingConfig) -> Result<(), ConfigError> {
    if routing.hop_limit < 2 {
        return Err(ConfigError::ValidationError(format!(
            "routing.hop_limit must be at least 2, got {}",
            routing.hop_limit
        )));
    }
    if routing.exploration_budget == 0 {
        return Err(ConfigError::ValidationError(
            "routing.exploration_budget must be at least 1".to_string(),
        ));
    }
    Ok(())
}
