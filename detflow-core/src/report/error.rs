use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No valid data found in CSV file")]
    EmptyResult,
}
