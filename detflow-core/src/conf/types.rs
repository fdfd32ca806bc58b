use crate::normalize::DEFAULT_NULL_MARKERS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BATCH_SIZE: usize = 100_000;
pub const DEFAULT_OUTPUT: &str = "sankey_diagram.png";
pub const DEFAULT_EXCLUDE_SEVERITY: &str = "INFO";
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Rows read per batch.
    pub batch_size: usize,
    pub output: PathBuf,
    /// Enables the severity exclusion policy.
    pub exclude_info: bool,
    /// Sentinel severity dropped when `exclude_info` is set.
    pub exclude_severity: String,
    pub top_k: usize,
    pub columns: ColumnConfig,
    /// Raw cell texts treated as missing.
    pub null_markers: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclude_info: false,
            exclude_severity: DEFAULT_EXCLUDE_SEVERITY.to_string(),
            top_k: DEFAULT_TOP_K,
            columns: ColumnConfig::default(),
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    pub categories: String,
    pub severity: String,
    pub status: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            categories: "sensor_types".to_string(),
            severity: "severity".to_string(),
            status: "status".to_string(),
        }
    }
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub batch_size: Option<usize>,
    pub output: Option<PathBuf>,
    pub exclude_info: bool,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut AnalysisConfig) {
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        // A flag can only switch the policy on.
        if self.exclude_info {
            config.exclude_info = true;
        }
    }
}
