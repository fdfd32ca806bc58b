mod write_tests;

use crate::aggregate::{Aggregator, ExclusionPolicy, RawRecord};
use crate::normalize::NullMarkers;
use crate::project::{FlowDiagram, project};

pub(super) fn diagram(rows: &[(&str, &str, &str)]) -> FlowDiagram {
    let mut agg = Aggregator::new(ExclusionPolicy::Disabled, NullMarkers::default());
    for (categories, severity, status) in rows {
        agg.push(RawRecord {
            categories: Some(*categories),
            severity: Some(*severity),
            status: Some(*status),
        });
    }
    project(&agg.finish())
}
