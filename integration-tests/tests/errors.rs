use detflow_core::aggregate::AggregateError;
use detflow_core::cli::analyze::analyze;
use detflow_core::conf::AnalysisConfig;
use detflow_core::render::OutputFormat;
use detflow_core::report::ReportError;
use integration_tests::harness::{CsvFixture, HEADER, TouchSink, capture_events};
use pretty_assertions::assert_eq;
use tracing::Level;

fn run(fixture: &CsvFixture) -> anyhow::Result<()> {
    let cfg = AnalysisConfig {
        output: fixture.output("sankey_diagram.png"),
        ..AnalysisConfig::default()
    };
    analyze(
        fixture.path(),
        &cfg,
        OutputFormat::Png,
        &TouchSink,
        &mut Vec::new(),
    )
    .map(|_| ())
}

#[test]
fn missing_input_is_reported_before_processing() {
    // Arrange
    let fixture = CsvFixture::detections(&[]);
    let missing = fixture.output("nope.csv");
    let mut console = Vec::new();

    // Act
    let err = analyze(
        &missing,
        &AnalysisConfig::default(),
        OutputFormat::Png,
        &TouchSink,
        &mut console,
    )
    .unwrap_err();

    // Assert
    assert_eq!(
        err.to_string(),
        format!("CSV file not found: {}", missing.display())
    );
    assert!(console.is_empty());
}

#[test]
fn missing_category_column_lists_available_columns() {
    // Arrange
    let fixture = CsvFixture::new(&["id", "severity", "status"], &[vec!["1", "HIGH", "OPEN"]]);

    // Act
    let err = run(&fixture).unwrap_err();

    // Assert
    match err.downcast_ref::<AggregateError>() {
        Some(AggregateError::MissingColumn { column, available }) => {
            assert_eq!(column, "sensor_types");
            assert_eq!(available, &vec!["id", "severity", "status"]);
        }
        other => panic!("expected a missing column error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "'sensor_types' column not found in CSV\nAvailable columns: ['id', 'severity', 'status']"
    );
    assert!(!fixture.output("sankey_diagram.png").exists());
}

#[test]
fn input_without_usable_rows_is_an_empty_result() {
    // Arrange
    let fixture = CsvFixture::detections(&[
        ("", "HIGH", "OPEN"),
        ("[edr]", "NaN", "OPEN"),
        ("[]", "LOW", "CLOSED"),
    ]);

    // Act
    let err = run(&fixture).unwrap_err();

    // Assert
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::EmptyResult)
    ));
    assert_eq!(err.to_string(), "No valid data found in CSV file");
    assert!(!fixture.output("sankey_diagram.png").exists());
}

#[test]
fn missing_status_column_warns_then_empties_the_result() {
    // Arrange
    let fixture = CsvFixture::new(
        &["id", "sensor_types", "severity"],
        &[vec!["1", "[edr]", "HIGH"]],
    );

    // Act
    let (result, events) = capture_events(|| run(&fixture));

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::EmptyResult)
    ));

    let warning = events
        .iter()
        .find(|e| e.level == Level::WARN && e.field("column") == Some("status"))
        .expect("missing column warning");
    assert!(
        warning
            .message()
            .is_some_and(|m| m.contains("status column not found"))
    );
}

#[test]
fn row_longer_than_header_is_fatal() {
    // Arrange
    let fixture = CsvFixture::new(
        &HEADER,
        &[
            vec!["1", "[edr]", "HIGH", "OPEN"],
            vec!["2", "[edr]", "HIGH", "OPEN", "surplus"],
        ],
    );

    // Act
    let err = run(&fixture).unwrap_err();

    // Assert
    match err.downcast_ref::<AggregateError>() {
        Some(AggregateError::RaggedRow {
            line,
            expected,
            found,
        }) => {
            assert_eq!(*line, 3);
            assert_eq!(*expected, 4);
            assert_eq!(*found, 5);
        }
        other => panic!("expected a ragged row error, got {other:?}"),
    }
}

#[test]
fn short_rows_read_missing_cells_as_absent() {
    // Arrange
    let fixture = CsvFixture::raw(
        "id,sensor_types,severity,status\n\
         1,[edr],HIGH,OPEN\n\
         2,[edr],HIGH\n",
    );
    let cfg = AnalysisConfig {
        output: fixture.output("sankey_diagram.png"),
        ..AnalysisConfig::default()
    };

    // Act
    let report = analyze(
        fixture.path(),
        &cfg,
        OutputFormat::Png,
        &TouchSink,
        &mut Vec::new(),
    )
    .unwrap();

    // Assert
    assert_eq!(report.aggregation.total_rows, 2);
    assert_eq!(report.aggregation.usable_rows, 1);
}
