use crate::conf::{AnalysisConfig, ConfigError, ConfigOverrides, validate_config};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    analysis: Option<AnalysisConfig>,
}

/// Loads and validates an HCL config file. A file without an `analysis`
/// block yields the defaults.
pub fn load_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let config = parse_config_file(path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Merges the optional config file with command line overrides, then
/// validates the result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AnalysisConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config_file(path)?,
        None => AnalysisConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let parsed: ConfigFile = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;
    Ok(parsed.analysis.unwrap_or_default())
}
