use super::diagram;
use crate::project::FlowDiagram;
use crate::render::{
    FlowSink, OutputFormat, RenderError, Rendered, html_path, write_diagram,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

struct FailingSink;

impl FlowSink for FailingSink {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn render(&self, _diagram: &FlowDiagram, _path: &Path) -> Result<(), RenderError> {
        Err(RenderError::BackendUnavailable {
            backend: "png",
            reason: "no fonts".to_string(),
        })
    }
}

struct TouchSink;

impl FlowSink for TouchSink {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn render(&self, _diagram: &FlowDiagram, path: &Path) -> Result<(), RenderError> {
        fs::write(path, b"png").map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[test]
fn html_path_swaps_the_extension() {
    assert_eq!(
        html_path(Path::new("out/sankey_diagram.png")),
        PathBuf::from("out/sankey_diagram.html")
    );
    assert_eq!(html_path(Path::new("diagram")), PathBuf::from("diagram.html"));
}

#[test]
fn primary_sink_success_is_reported() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("flows.png");
    let mut console = Vec::new();

    // Act
    let rendered = write_diagram(
        &diagram(&[("[edr]", "HIGH", "OPEN")]),
        &output,
        OutputFormat::Png,
        &TouchSink,
        &mut console,
    )
    .unwrap();

    // Assert
    assert_eq!(rendered, Rendered::Png(output.clone()));
    assert!(output.exists());
    let text = String::from_utf8(console).unwrap();
    assert!(text.contains("Successfully saved Sankey diagram to"));
}

#[test]
fn failing_primary_sink_falls_back_to_html() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("flows.png");
    let mut console = Vec::new();

    // Act
    let rendered = write_diagram(
        &diagram(&[("[edr]", "HIGH", "OPEN")]),
        &output,
        OutputFormat::Png,
        &FailingSink,
        &mut console,
    )
    .unwrap();

    // Assert
    let html = dir.path().join("flows.html");
    assert_eq!(
        rendered,
        Rendered::HtmlFallback {
            path: html.clone(),
            reason: "png backend unavailable: no fonts".to_string(),
        }
    );
    assert!(html.exists());
    assert!(!output.exists());

    let text = String::from_utf8(console).unwrap();
    assert!(text.contains("Warning: Could not save as PNG (png backend unavailable: no fonts)"));
    assert!(text.contains("Saving as HTML instead..."));
    assert!(text.contains(&format!("Saved as HTML: {}", html.display())));
}

#[test]
fn html_format_skips_the_primary_sink() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("flows.png");

    // Act
    let rendered = write_diagram(
        &diagram(&[("[edr]", "HIGH", "OPEN")]),
        &output,
        OutputFormat::Html,
        &FailingSink,
        &mut Vec::new(),
    )
    .unwrap();

    // Assert
    assert_eq!(rendered, Rendered::Html(dir.path().join("flows.html")));
    assert_eq!(rendered.path(), dir.path().join("flows.html").as_path());
}

#[test]
fn unwritable_html_fallback_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let output = dir.path().join("missing").join("flows.png");

    // Act
    let result = write_diagram(
        &diagram(&[("[edr]", "HIGH", "OPEN")]),
        &output,
        OutputFormat::Png,
        &FailingSink,
        &mut Vec::new(),
    );

    // Assert
    assert!(matches!(result, Err(RenderError::Write { .. })));
}
