use crate::aggregate::{AggregateError, Aggregation, Aggregator, BatchReader, ExclusionPolicy};
use crate::conf::AnalysisConfig;
use crate::normalize::NullMarkers;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Receives progress notifications while batches are processed.
pub trait BatchObserver {
    fn on_batch(&mut self, _batch: u64, _rows: usize, _total_rows: u64) {}

    fn on_finish(&mut self, _aggregation: &Aggregation) {}
}

/// Observer that ignores every notification.
pub struct Silent;

impl BatchObserver for Silent {}

pub fn aggregate_file(
    path: &Path,
    config: &AnalysisConfig,
    observer: &mut dyn BatchObserver,
) -> Result<Aggregation, AggregateError> {
    info!(
        path = %path.display(),
        batch_size = config.batch_size,
        exclude = config.exclude_info,
        "aggregating detections"
    );

    let reader = BatchReader::open(path, &config.columns, config.batch_size)?;
    drive(reader, config, observer)
}

pub fn aggregate_reader<R: Read>(
    reader: R,
    config: &AnalysisConfig,
    observer: &mut dyn BatchObserver,
) -> Result<Aggregation, AggregateError> {
    let reader = BatchReader::from_reader(reader, &config.columns, config.batch_size)?;
    drive(reader, config, observer)
}

fn drive<R: Read>(
    mut reader: BatchReader<R>,
    config: &AnalysisConfig,
    observer: &mut dyn BatchObserver,
) -> Result<Aggregation, AggregateError> {
    let mut aggregator = Aggregator::new(
        exclusion_policy(config),
        NullMarkers::new(config.null_markers.iter().cloned()),
    );

    while let Some(batch) = reader.next_batch()? {
        aggregator.push_batch(&batch, reader.columns());

        let total_rows = aggregator.state().total_rows;
        debug!(batch = batch.number, rows = batch.records.len(), total_rows, "batch processed");
        observer.on_batch(batch.number, batch.records.len(), total_rows);
    }

    let aggregation = aggregator.finish();

    for (strategy, count) in aggregation.parse_stats.iter() {
        debug!(strategy = %strategy, count, "category cells parsed");
    }
    info!(
        total_rows = aggregation.total_rows,
        usable_rows = aggregation.usable_rows,
        excluded_rows = aggregation.excluded_rows,
        flows = aggregation.flows.len(),
        "aggregation finished"
    );

    observer.on_finish(&aggregation);
    Ok(aggregation)
}

pub fn exclusion_policy(config: &AnalysisConfig) -> ExclusionPolicy {
    if config.exclude_info {
        ExclusionPolicy::severity(&config.exclude_severity)
    } else {
        ExclusionPolicy::Disabled
    }
}
