pub mod fixture;
pub mod sinks;
pub mod tracing;

pub use fixture::{CsvFixture, HEADER};
pub use sinks::{FailingSink, TouchSink};
pub use self::tracing::{CapturedEvent, capture_events};
