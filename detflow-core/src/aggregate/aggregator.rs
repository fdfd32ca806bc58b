use crate::aggregate::{Aggregation, Batch, ColumnIndex, FlowKey, RawRecord};
use crate::normalize::{NullMarkers, clean_scalar, normalize_categories};

/// Drops records whose severity matches a sentinel level.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExclusionPolicy {
    #[default]
    Disabled,
    /// Holds the sentinel, upper-cased.
    Severity(String),
}

impl ExclusionPolicy {
    pub fn severity(sentinel: &str) -> Self {
        Self::Severity(sentinel.to_uppercase())
    }

    /// Case-insensitive match against the sentinel.
    pub fn excludes(&self, severity: &str) -> bool {
        match self {
            Self::Disabled => false,
            Self::Severity(sentinel) => severity.to_uppercase() == *sentinel,
        }
    }
}

/// What happened to a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Counted,
    /// A required field was missing or unparsable.
    Dropped,
    Excluded,
}

/// Owns all running totals for one aggregation pass.
#[derive(Debug, Default)]
pub struct Aggregator {
    policy: ExclusionPolicy,
    nulls: NullMarkers,
    state: Aggregation,
}

impl Aggregator {
    pub fn new(policy: ExclusionPolicy, nulls: NullMarkers) -> Self {
        Self {
            policy,
            nulls,
            state: Aggregation::default(),
        }
    }

    pub fn state(&self) -> &Aggregation {
        &self.state
    }

    pub fn push_batch(&mut self, batch: &Batch, columns: &ColumnIndex) {
        for record in &batch.records {
            let raw = columns.extract(record, &self.nulls);
            self.push(raw);
        }
        self.state.batches += 1;
    }

    pub fn push(&mut self, raw: RawRecord<'_>) -> RecordOutcome {
        self.state.total_rows += 1;

        let categories = normalize_categories(raw.categories);
        if let Some(strategy) = categories.strategy {
            self.state.parse_stats.record(strategy);
        }

        let severity = clean_scalar(raw.severity);
        let status = clean_scalar(raw.status);

        let (Some(severity), Some(status)) = (severity, status) else {
            return RecordOutcome::Dropped;
        };
        if categories.is_empty() {
            return RecordOutcome::Dropped;
        }

        if self.policy.excludes(&severity) {
            self.state.excluded_rows += 1;
            return RecordOutcome::Excluded;
        }

        self.state.usable_rows += 1;

        for category in categories.labels {
            let key = FlowKey::new(category.clone(), severity.clone(), status.clone());
            *self.state.flows.entry(key).or_insert(0) += 1;
            self.state.labels.categories.insert(category);
        }
        self.state.labels.severities.insert(severity);
        self.state.labels.statuses.insert(status);

        RecordOutcome::Counted
    }

    pub fn finish(self) -> Aggregation {
        self.state
    }
}
