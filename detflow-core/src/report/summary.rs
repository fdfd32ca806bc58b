use crate::aggregate::Aggregation;
use crate::conf::AnalysisConfig;
use crate::project::FlowSummary;
use crate::report::thousands;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

pub const RULE: &str =
    "================================================================================";

/// Lines printed before the aggregation pass starts.
pub fn render_preamble(input: &Path, config: &AnalysisConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Processing CSV file: {}", input.display());
    let _ = writeln!(out, "Chunk size: {} rows", thousands(config.batch_size as u64));
    if config.exclude_info {
        let _ = writeln!(
            out,
            "Excluding {} severity level from analysis",
            config.exclude_severity
        );
    }

    out
}

pub fn render_summary(aggregation: &Aggregation, summary: &FlowSummary, top_k: usize) -> String {
    let mut out = String::new();
    let labels = &aggregation.labels;

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "ANALYSIS SUMMARY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Total alerts processed: {}",
        thousands(aggregation.total_rows)
    );
    let _ = writeln!(out, "Unique sensor types: {}", labels.categories.len());
    let _ = writeln!(out, "Unique severity levels: {}", labels.severities.len());
    let _ = writeln!(out, "Unique status values: {}", labels.statuses.len());

    // Sensor types are listed from the universe, the other stages from the
    // distributions. Both views agree by construction.
    let _ = writeln!(out, "\nSensor Types:");
    for label in &labels.categories {
        let count = summary.per_category.get(label).copied().unwrap_or(0);
        let _ = writeln!(out, "  - {label}: {} alerts", thousands(count));
    }

    render_distribution(&mut out, "Severity Distribution", &summary.per_severity);
    render_distribution(&mut out, "Status Distribution", &summary.per_status);

    let _ = writeln!(
        out,
        "\nTop {top_k} Sensor Type → Severity → Status Flows:"
    );
    for (key, count) in &summary.top_flows {
        let _ = writeln!(out, "  {key}: {} alerts", thousands(*count));
    }

    let _ = writeln!(out, "{RULE}");
    out
}

fn render_distribution(out: &mut String, title: &str, counts: &BTreeMap<String, u64>) {
    let _ = writeln!(out, "\n{title}:");
    for (label, count) in counts {
        let _ = writeln!(out, "  - {label}: {} alerts", thousands(*count));
    }
}
