//! Streaming aggregation
//!
//! Detection exports routinely run to millions of rows, so the input is read
//! in fixed-size batches and only aggregate state stays resident between
//! them. Each record is normalized, filtered, and folded into a sparse
//! three-key frequency table:
//!
//! csv file
//! BatchReader
//! RawRecord
//! Aggregator
//! Aggregation
//!
//! Any error other than a record-level normalization miss aborts the run.

mod aggregator;
mod error;
mod run;
mod source;
#[cfg(test)]
mod tests;
mod types;

pub use aggregator::*;
pub use error::*;
pub use run::*;
pub use source::*;
pub use types::*;
