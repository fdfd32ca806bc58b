use crate::aggregate::{FlowKey, FrequencyTable};
use crate::project::PairCounts;
use std::collections::BTreeMap;

/// Per-label totals, pair distributions and the heaviest flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowSummary {
    pub per_category: BTreeMap<String, u64>,
    pub per_severity: BTreeMap<String, u64>,
    pub per_status: BTreeMap<String, u64>,
    pub pairs: PairCounts,
    pub top_flows: Vec<(FlowKey, u64)>,
}

pub fn summarize(flows: &FrequencyTable, top_k: usize) -> FlowSummary {
    let mut summary = FlowSummary {
        pairs: PairCounts::from_flows(flows),
        top_flows: top_flows(flows, top_k),
        ..FlowSummary::default()
    };

    for (key, count) in flows {
        *summary.per_category.entry(key.category.clone()).or_insert(0) += count;
        *summary.per_severity.entry(key.severity.clone()).or_insert(0) += count;
        *summary.per_status.entry(key.status.clone()).or_insert(0) += count;
    }

    summary
}

/// Highest counts first; equal counts fall back to flow key order so the
/// ranking is reproducible.
pub fn top_flows(flows: &FrequencyTable, k: usize) -> Vec<(FlowKey, u64)> {
    let mut ranked: Vec<(&FlowKey, u64)> = flows.iter().map(|(key, c)| (key, *c)).collect();
    ranked.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));

    ranked
        .into_iter()
        .take(k)
        .map(|(key, c)| (key.clone(), c))
        .collect()
}
