use crate::aggregate::{AggregateError, BatchReader, ColumnIndex};
use crate::conf::ColumnConfig;
use crate::normalize::NullMarkers;
use pretty_assertions::assert_eq;
use std::path::Path;

fn reader(csv: &str, batch_size: usize) -> BatchReader<&[u8]> {
    BatchReader::from_reader(csv.as_bytes(), &ColumnConfig::default(), batch_size).unwrap()
}

#[test]
fn resolves_columns_in_any_order() {
    // Arrange
    let r = reader("status,id,sensor_types,severity\n", 10);

    // Assert
    assert_eq!(
        r.columns(),
        &ColumnIndex {
            categories: 2,
            severity: Some(3),
            status: Some(0),
            width: 4,
        }
    );
}

#[test]
fn missing_category_column_reports_available_columns() {
    // Act
    let err = BatchReader::from_reader(
        "id,severity,status\n1,HIGH,OPEN\n".as_bytes(),
        &ColumnConfig::default(),
        10,
    )
    .err()
    .unwrap();

    // Assert
    assert_eq!(
        err.to_string(),
        "'sensor_types' column not found in CSV\nAvailable columns: ['id', 'severity', 'status']"
    );
    match err {
        AggregateError::MissingColumn { column, available } => {
            assert_eq!(column, "sensor_types");
            assert_eq!(available, vec!["id", "severity", "status"]);
        }
        other => panic!("Expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn missing_scalar_columns_are_tolerated() {
    // Arrange
    let r = reader("sensor_types\n[edr]\n", 10);

    // Assert
    assert_eq!(r.columns().severity, None);
    assert_eq!(r.columns().status, None);
}

#[test]
fn splits_rows_into_bounded_batches() {
    // Arrange
    let mut csv = String::from("sensor_types,severity,status\n");
    for i in 0..25 {
        csv.push_str(&format!("[s{i}],HIGH,OPEN\n"));
    }
    let mut r = reader(&csv, 10);

    // Act
    let mut sizes = Vec::new();
    while let Some(batch) = r.next_batch().unwrap() {
        sizes.push((batch.number, batch.records.len()));
    }

    // Assert
    assert_eq!(sizes, vec![(1, 10), (2, 10), (3, 5)]);
}

#[test]
fn header_only_input_has_no_batches() {
    // Arrange
    let mut r = reader("sensor_types,severity,status\n", 10);

    // Act / Assert
    assert!(r.next_batch().unwrap().is_none());
}

#[test]
fn long_rows_are_rejected() {
    // Arrange
    let mut r = reader("sensor_types,severity,status\n[edr],HIGH,OPEN,extra\n", 10);

    // Act
    let err = r.next_batch().unwrap_err();

    // Assert
    assert!(matches!(
        err,
        AggregateError::RaggedRow {
            line: 2,
            expected: 3,
            found: 4,
        }
    ));
}

#[test]
fn short_rows_read_missing_cells_as_absent() {
    // Arrange
    let mut r = reader("sensor_types,severity,status\n[edr],HIGH\n", 10);
    let batch = r.next_batch().unwrap().unwrap();

    // Act
    let raw = r.columns().extract(&batch.records[0], &NullMarkers::default());

    // Assert
    assert_eq!(raw.categories, Some("[edr]"));
    assert_eq!(raw.severity, Some("HIGH"));
    assert_eq!(raw.status, None);
}

#[test]
fn null_markers_are_filtered_on_extract() {
    // Arrange
    let mut r = reader("sensor_types,severity,status\nNaN,,N/A\n", 10);
    let batch = r.next_batch().unwrap().unwrap();

    // Act
    let raw = r.columns().extract(&batch.records[0], &NullMarkers::default());

    // Assert
    assert_eq!(raw.categories, None);
    assert_eq!(raw.severity, None);
    assert_eq!(raw.status, None);
}

#[test]
fn missing_file_is_not_found() {
    // Act
    let err = BatchReader::open(
        Path::new("/definitely/not/here.csv"),
        &ColumnConfig::default(),
        10,
    )
    .err()
    .unwrap();

    // Assert
    assert!(matches!(err, AggregateError::NotFound { .. }));
}
