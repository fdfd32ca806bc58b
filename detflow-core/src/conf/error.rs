use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("batch_size must be a positive integer")]
    ZeroBatchSize,

    #[error("top_k must be a positive integer")]
    ZeroTopK,

    #[error("column name for '{role}' must not be empty")]
    EmptyColumn { role: &'static str },

    #[error("columns '{first}' and '{second}' must be distinct (both are '{name}')")]
    DuplicateColumn {
        first: &'static str,
        second: &'static str,
        name: String,
    },

    #[error("exclude_severity must not be empty")]
    EmptyExcludeSeverity,

    #[error("output path must not be empty")]
    EmptyOutput,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Operator-facing guidance for errors that have an obvious fix.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::ZeroBatchSize => Some(
                "The batch size bounds how many rows are held in memory at once.\n\
                 \n\
                 Example:\n\
                 \n\
                 analysis = {\n\
                 \x20 batch_size = 100000\n\
                 }",
            ),
            ConfigError::EmptyColumn { .. } | ConfigError::DuplicateColumn { .. } => Some(
                "Each analysed stage needs its own CSV column.\n\
                 \n\
                 Example:\n\
                 \n\
                 analysis = {\n\
                 \x20 columns = {\n\
                 \x20   categories = \"sensor_types\"\n\
                 \x20   severity   = \"severity\"\n\
                 \x20   status     = \"status\"\n\
                 \x20 }\n\
                 }",
            ),
            _ => None,
        }
    }
}
