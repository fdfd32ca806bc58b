use crate::aggregate::AggregateError;
use crate::conf::ColumnConfig;
use crate::normalize::NullMarkers;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Upper bound on the capacity reserved up front for a batch.
const MAX_BATCH_PREALLOC: usize = 8192;

/// Raw cells of the three analysed columns, after null-marker filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub categories: Option<&'a str>,
    pub severity: Option<&'a str>,
    pub status: Option<&'a str>,
}

/// Positions of the analysed columns in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub categories: usize,
    pub severity: Option<usize>,
    pub status: Option<usize>,
    pub width: usize,
}

impl ColumnIndex {
    /// Only the category column is required. Missing scalar columns make
    /// every record drop, which surfaces later as an empty result.
    pub fn resolve(headers: &StringRecord, columns: &ColumnConfig) -> Result<Self, AggregateError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let categories =
            position(&columns.categories).ok_or_else(|| AggregateError::MissingColumn {
                column: columns.categories.clone(),
                available: headers.iter().map(str::to_string).collect(),
            })?;

        let severity = position(&columns.severity);
        if severity.is_none() {
            warn!(column = %columns.severity, "severity column not found; every row will be dropped");
        }

        let status = position(&columns.status);
        if status.is_none() {
            warn!(column = %columns.status, "status column not found; every row will be dropped");
        }

        Ok(Self {
            categories,
            severity,
            status,
            width: headers.len(),
        })
    }

    pub fn extract<'a>(&self, record: &'a StringRecord, nulls: &NullMarkers) -> RawRecord<'a> {
        let cell = |idx: Option<usize>| nulls.filter(idx.and_then(|i| record.get(i)));

        RawRecord {
            categories: cell(Some(self.categories)),
            severity: cell(self.severity),
            status: cell(self.status),
        }
    }
}

#[derive(Debug)]
pub struct Batch {
    /// 1-based sequence number.
    pub number: u64,
    pub records: Vec<StringRecord>,
}

/// Reads a headed CSV source in batches of at most `batch_size` records.
pub struct BatchReader<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnIndex,
    batch_size: usize,
    batches: u64,
}

impl BatchReader<File> {
    pub fn open(
        path: &Path,
        columns: &ColumnConfig,
        batch_size: usize,
    ) -> Result<Self, AggregateError> {
        let file = File::open(path).map_err(|e| AggregateError::open(path, e))?;
        Self::from_reader(file, columns, batch_size)
    }
}

impl<R: Read> BatchReader<R> {
    pub fn from_reader(
        reader: R,
        columns: &ColumnConfig,
        batch_size: usize,
    ) -> Result<Self, AggregateError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|source| AggregateError::Header { source })?;
        let columns = ColumnIndex::resolve(headers, columns)?;

        Ok(Self {
            reader,
            columns,
            batch_size: batch_size.max(1),
            batches: 0,
        })
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    /// Returns `Ok(None)` once the source is exhausted.
    pub fn next_batch(&mut self) -> Result<Option<Batch>, AggregateError> {
        let number = self.batches + 1;
        let mut records = Vec::with_capacity(self.batch_size.min(MAX_BATCH_PREALLOC));
        let mut record = StringRecord::new();

        while records.len() < self.batch_size {
            let more = self
                .reader
                .read_record(&mut record)
                .map_err(|source| AggregateError::Csv {
                    batch: number,
                    source,
                })?;
            if !more {
                break;
            }

            // Short rows are tolerated (missing cells read as absent), long
            // rows mean the file is malformed.
            if record.len() > self.columns.width {
                return Err(AggregateError::RaggedRow {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: self.columns.width,
                    found: record.len(),
                });
            }

            records.push(record.clone());
        }

        if records.is_empty() {
            return Ok(None);
        }

        self.batches = number;
        Ok(Some(Batch { number, records }))
    }
}
