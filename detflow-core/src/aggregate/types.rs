use crate::normalize::ParseStrategy;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One path through the three analysis stages.
///
/// Field order defines the lexicographic ordering used for deterministic
/// output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FlowKey {
    pub category: String,
    pub severity: String,
    pub status: String,
}

impl FlowKey {
    pub fn new(
        category: impl Into<String>,
        severity: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            severity: severity.into(),
            status: status.into(),
        }
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} → {}", self.category, self.severity, self.status)
    }
}

pub type FrequencyTable = BTreeMap<FlowKey, u64>;

/// Distinct labels seen at each stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelUniverse {
    pub categories: BTreeSet<String>,
    pub severities: BTreeSet<String>,
    pub statuses: BTreeSet<String>,
}

/// How many category cells each strategy resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    counts: BTreeMap<ParseStrategy, u64>,
}

impl ParseStats {
    pub(crate) fn record(&mut self, strategy: ParseStrategy) {
        *self.counts.entry(strategy).or_insert(0) += 1;
    }

    pub fn count(&self, strategy: ParseStrategy) -> u64 {
        self.counts.get(&strategy).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParseStrategy, u64)> + '_ {
        self.counts.iter().map(|(s, c)| (*s, *c))
    }
}

/// Finished aggregation state. Immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub flows: FrequencyTable,
    pub labels: LabelUniverse,

    /// Every data row read, before normalization or exclusion.
    pub total_rows: u64,
    /// Rows dropped by the severity exclusion policy.
    pub excluded_rows: u64,
    /// Rows that contributed to `flows`.
    pub usable_rows: u64,

    pub batches: u64,
    pub parse_stats: ParseStats,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Sum of all frequency table counts.
    pub fn flow_total(&self) -> u64 {
        self.flows.values().sum()
    }
}
