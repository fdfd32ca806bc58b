use crate::conf::{AnalysisConfig, ConfigError};

/// Rejects configurations the aggregation pass cannot run with.
pub fn validate_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.batch_size == 0 {
        return Err(ConfigError::ZeroBatchSize);
    }
    if config.top_k == 0 {
        return Err(ConfigError::ZeroTopK);
    }
    if config.output.as_os_str().is_empty() {
        return Err(ConfigError::EmptyOutput);
    }
    if config.exclude_info && config.exclude_severity.trim().is_empty() {
        return Err(ConfigError::EmptyExcludeSeverity);
    }

    let columns = [
        ("categories", &config.columns.categories),
        ("severity", &config.columns.severity),
        ("status", &config.columns.status),
    ];

    for (role, name) in columns {
        if name.is_empty() {
            return Err(ConfigError::EmptyColumn { role });
        }
    }

    for (i, (first, a)) in columns.iter().enumerate() {
        for (second, b) in &columns[i + 1..] {
            if a == b {
                return Err(ConfigError::DuplicateColumn {
                    first: *first,
                    second: *second,
                    name: a.to_string(),
                });
            }
        }
    }

    Ok(())
}
