use crate::aggregate::{Aggregation, BatchObserver};
use crate::report::thousands;
use std::io::Write;

/// A milestone line is printed every this many batches.
const MILESTONE_EVERY: u64 = 10;

/// Prints batch progress as it happens. Write failures are ignored; progress
/// output is best effort.
pub struct ConsoleProgress<'a> {
    out: &'a mut dyn Write,
    /// Sentinel to mention in the closing line when exclusion is on.
    excluded_severity: Option<String>,
}

impl<'a> ConsoleProgress<'a> {
    pub fn new(out: &'a mut dyn Write, excluded_severity: Option<String>) -> Self {
        Self {
            out,
            excluded_severity,
        }
    }
}

impl BatchObserver for ConsoleProgress<'_> {
    fn on_batch(&mut self, batch: u64, rows: usize, total_rows: u64) {
        let _ = write!(
            self.out,
            "Processing chunk {batch} ({} rows)...\r",
            thousands(rows as u64)
        );

        if batch % MILESTONE_EVERY == 0 {
            let _ = writeln!(
                self.out,
                "\nProcessed {batch} chunks ({} rows total)",
                thousands(total_rows)
            );
        }
        let _ = self.out.flush();
    }

    fn on_finish(&mut self, aggregation: &Aggregation) {
        let _ = writeln!(
            self.out,
            "\nFinished processing {} rows",
            thousands(aggregation.total_rows)
        );

        if let Some(severity) = &self.excluded_severity {
            let _ = writeln!(
                self.out,
                "Excluded {} rows with {severity} severity",
                thousands(aggregation.excluded_rows)
            );
        }
        let _ = self.out.flush();
    }
}
