use detflow_core::project::FlowDiagram;
use detflow_core::render::{FlowSink, RenderError};
use std::fs;
use std::path::Path;

/// Image sink that always fails, as a build without a raster backend does.
pub struct FailingSink;

impl FlowSink for FailingSink {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn render(&self, _diagram: &FlowDiagram, _path: &Path) -> Result<(), RenderError> {
        Err(RenderError::BackendUnavailable {
            backend: "png",
            reason: "disabled in tests".to_string(),
        })
    }
}

/// Image sink that writes a placeholder file, keeping tests independent of
/// fonts on the host.
pub struct TouchSink;

impl FlowSink for TouchSink {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn render(&self, diagram: &FlowDiagram, path: &Path) -> Result<(), RenderError> {
        let body = format!("{} nodes\n", diagram.nodes.len());
        fs::write(path, body).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
