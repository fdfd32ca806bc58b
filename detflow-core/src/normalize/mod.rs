//! Field normalization
//!
//! Detection exports are not consistent about how they encode the
//! `sensor_types` cell. Depending on the exporter a row may carry a JSON
//! array, a Python-style literal (single quotes, trailing commas), or plain
//! bracketed text. Scalar cells carry stray whitespace and an extra layer of
//! double quotes.
//!
//! Everything in here is pure: raw cell text goes in, clean values come out.
//! The category parser is an ordered chain of strategies, the first one that
//! succeeds wins:
//!
//! raw cell
//! strict JSON
//! permissive literal
//! bracket split
//! verbatim
//!

mod list;
mod literal;
mod nulls;
mod scalar;
#[cfg(test)]
mod tests;
mod types;

pub(crate) use literal::str_list_repr;
pub use list::*;
pub use nulls::*;
pub use scalar::*;
pub use types::*;
