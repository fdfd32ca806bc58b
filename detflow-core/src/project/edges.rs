use crate::aggregate::FrequencyTable;
use crate::project::{NodeIndex, Stage};
use serde::Serialize;
use std::collections::BTreeMap;

pub type PairTable = BTreeMap<(String, String), u64>;

/// The frequency table summed down to adjacent stage pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCounts {
    /// Summed over status.
    pub category_severity: PairTable,
    /// Summed over category.
    pub severity_status: PairTable,
}

impl PairCounts {
    pub fn from_flows(flows: &FrequencyTable) -> Self {
        let mut pairs = Self::default();

        for (key, count) in flows {
            *pairs
                .category_severity
                .entry((key.category.clone(), key.severity.clone()))
                .or_insert(0) += count;
            *pairs
                .severity_status
                .entry((key.severity.clone(), key.status.clone()))
                .or_insert(0) += count;
        }

        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub value: u64,
}

/// Both link layers. Category→severity links come first, then
/// severity→status; each layer is ordered by (source, target).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub category_severity: Vec<Link>,
    pub severity_status: Vec<Link>,
}

impl EdgeList {
    pub fn build(nodes: &NodeIndex, pairs: &PairCounts) -> Self {
        Self {
            category_severity: layer(
                nodes,
                &pairs.category_severity,
                Stage::Category,
                Stage::Severity,
            ),
            severity_status: layer(nodes, &pairs.severity_status, Stage::Severity, Stage::Status),
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.category_severity
            .iter()
            .chain(self.severity_status.iter())
    }

    pub fn total(links: &[Link]) -> u64 {
        links.iter().map(|l| l.value).sum()
    }
}

fn layer(nodes: &NodeIndex, pairs: &PairTable, from: Stage, to: Stage) -> Vec<Link> {
    let mut links: Vec<Link> = pairs
        .iter()
        .filter_map(|((source, target), value)| {
            Some(Link {
                source: nodes.position(from, source)?,
                target: nodes.position(to, target)?,
                value: *value,
            })
        })
        .collect();

    links.sort_by_key(|l| (l.source, l.target));
    links
}
