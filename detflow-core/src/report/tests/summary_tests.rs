use crate::aggregate::{Aggregator, ExclusionPolicy, RawRecord};
use crate::conf::AnalysisConfig;
use crate::normalize::NullMarkers;
use crate::project::summarize;
use crate::report::{RULE, render_preamble, render_summary};
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn summary_lists_every_section_in_order() {
    // Arrange
    let mut agg = Aggregator::new(ExclusionPolicy::Disabled, NullMarkers::default());
    for (c, sev, st) in [
        ("[edr, network]", "HIGH", "OPEN"),
        ("[edr]", "LOW", "CLOSED"),
        ("", "LOW", "CLOSED"),
    ] {
        agg.push(RawRecord {
            categories: Some(c),
            severity: Some(sev),
            status: Some(st),
        });
    }
    let agg = agg.finish();
    let summary = summarize(&agg.flows, 10);

    // Act
    let text = render_summary(&agg, &summary, 10);

    // Assert
    let expected = format!(
        "\n{RULE}\n\
         ANALYSIS SUMMARY\n\
         {RULE}\n\
         Total alerts processed: 3\n\
         Unique sensor types: 2\n\
         Unique severity levels: 2\n\
         Unique status values: 2\n\
         \n\
         Sensor Types:\n\
         \x20 - edr: 2 alerts\n\
         \x20 - network: 1 alerts\n\
         \n\
         Severity Distribution:\n\
         \x20 - HIGH: 2 alerts\n\
         \x20 - LOW: 1 alerts\n\
         \n\
         Status Distribution:\n\
         \x20 - CLOSED: 1 alerts\n\
         \x20 - OPEN: 2 alerts\n\
         \n\
         Top 10 Sensor Type → Severity → Status Flows:\n\
         \x20 edr → HIGH → OPEN: 1 alerts\n\
         \x20 edr → LOW → CLOSED: 1 alerts\n\
         \x20 network → HIGH → OPEN: 1 alerts\n\
         {RULE}\n"
    );
    assert_eq!(text, expected);
}

#[test]
fn preamble_mentions_exclusion_when_enabled() {
    // Arrange
    let cfg = AnalysisConfig {
        exclude_info: true,
        ..AnalysisConfig::default()
    };

    // Act
    let text = render_preamble(Path::new("detections.csv"), &cfg);

    // Assert
    assert_eq!(
        text,
        "Processing CSV file: detections.csv\n\
         Chunk size: 100,000 rows\n\
         Excluding INFO severity level from analysis\n"
    );
}
