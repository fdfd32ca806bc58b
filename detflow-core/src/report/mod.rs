//! Console reporting
//!
//! The text printed to stdout is part of the tool's contract: the same input
//! always yields the same report. Diagnostics go through `tracing` instead.

mod error;
mod format;
mod progress;
mod summary;
#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use format::thousands;
pub use progress::ConsoleProgress;
pub use summary::{RULE, render_preamble, render_summary};
