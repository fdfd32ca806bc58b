//! Diagram rendering
//!
//! Sinks consume a finished [`FlowDiagram`]. The PNG sink is preferred; when
//! it cannot produce an image (backend compiled out, no usable fonts, write
//! failure) the diagram is written as a standalone HTML document instead and
//! the substitution is reported. Neither case fails the run.

mod error;
mod html;
mod layout;
#[cfg(feature = "png")]
mod png;
#[cfg(test)]
mod tests;

pub use error::RenderError;
pub use html::HtmlSink;
pub use layout::*;

use crate::project::FlowDiagram;
use clap::ValueEnum;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const TITLE: &str = "Taegis XDR Detection Flow: Sensor Types → Severity → Status";
pub const WIDTH: u32 = 1600;
pub const HEIGHT: u32 = 900;
/// Pixel density multiplier for raster output.
pub const SCALE: u32 = 2;

pub trait FlowSink {
    fn name(&self) -> &'static str;

    fn render(&self, diagram: &FlowDiagram, path: &Path) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Png,
    Html,
}

/// Where the diagram ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Png(PathBuf),
    Html(PathBuf),
    /// PNG failed and HTML was written instead.
    HtmlFallback { path: PathBuf, reason: String },
}

impl Rendered {
    pub fn path(&self) -> &Path {
        match self {
            Rendered::Png(p) | Rendered::Html(p) => p,
            Rendered::HtmlFallback { path, .. } => path,
        }
    }
}

/// Path of the HTML document that stands in for `output`.
pub fn html_path(output: &Path) -> PathBuf {
    output.with_extension("html")
}

pub fn png_sink() -> Box<dyn FlowSink> {
    #[cfg(feature = "png")]
    {
        Box::new(png::PngSink::default())
    }
    #[cfg(not(feature = "png"))]
    {
        Box::new(UnavailableSink)
    }
}

#[cfg(not(feature = "png"))]
struct UnavailableSink;

#[cfg(not(feature = "png"))]
impl FlowSink for UnavailableSink {
    fn name(&self) -> &'static str {
        "png"
    }

    fn render(&self, _diagram: &FlowDiagram, _path: &Path) -> Result<(), RenderError> {
        Err(RenderError::BackendUnavailable {
            backend: "png",
            reason: "built without the `png` feature".to_string(),
        })
    }
}

/// Writes the diagram in the requested format, falling back from PNG to HTML.
///
/// Only a failure of the HTML sink itself is returned as an error.
pub fn write_diagram(
    diagram: &FlowDiagram,
    output: &Path,
    format: OutputFormat,
    primary: &dyn FlowSink,
    out: &mut dyn Write,
) -> Result<Rendered, RenderError> {
    let html = HtmlSink;

    if format == OutputFormat::Html {
        let path = html_path(output);
        let _ = writeln!(out, "\nSaving Sankey diagram to {}...", path.display());
        html.render(diagram, &path)?;
        let _ = writeln!(out, "Successfully saved Sankey diagram to {}", path.display());
        return Ok(Rendered::Html(path));
    }

    let _ = writeln!(out, "\nSaving Sankey diagram to {}...", output.display());
    match primary.render(diagram, output) {
        Ok(()) => {
            let _ = writeln!(out, "Successfully saved Sankey diagram to {}", output.display());
            Ok(Rendered::Png(output.to_path_buf()))
        }
        Err(err) => {
            warn!(sink = primary.name(), error = %err, "image rendering failed; falling back to HTML");

            let _ = writeln!(out, "Warning: Could not save as PNG ({err})");
            let _ = writeln!(out, "Saving as HTML instead...");

            let path = html_path(output);
            html.render(diagram, &path)?;

            let _ = writeln!(out, "Saved as HTML: {}", path.display());
            Ok(Rendered::HtmlFallback {
                path,
                reason: err.to_string(),
            })
        }
    }
}
