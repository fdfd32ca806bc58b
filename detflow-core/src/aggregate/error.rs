use crate::normalize::str_list_repr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{column}' column not found in CSV\nAvailable columns: {}", str_list_repr(available))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("failed to read CSV header: {source}")]
    Header {
        #[source]
        source: csv::Error,
    },

    #[error("failed to read batch {batch}: {source}")]
    Csv {
        batch: u64,
        #[source]
        source: csv::Error,
    },

    #[error("row at line {line} has {found} fields, header declares {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl AggregateError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::InputUnavailable { path, source }
        }
    }
}
