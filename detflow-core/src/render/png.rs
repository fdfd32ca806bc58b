use crate::project::{FlowDiagram, Stage};
use crate::render::{
    FlowSink, HEIGHT, LayoutParams, RenderError, SCALE, TITLE, WIDTH, layout,
};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::{Path, PathBuf};

const NODE_FILL: RGBColor = RGBColor(173, 216, 230);
const LINK_ALPHA: f64 = 0.3;
const BAND_SAMPLES: usize = 48;

/// Raster sink backed by the plotters bitmap backend.
pub struct PngSink {
    params: LayoutParams,
    pixels: (u32, u32),
    font_size: f64,
}

impl Default for PngSink {
    fn default() -> Self {
        Self {
            params: LayoutParams::scaled(WIDTH, HEIGHT, SCALE),
            pixels: (WIDTH * SCALE, HEIGHT * SCALE),
            font_size: 12.0 * SCALE as f64,
        }
    }
}

impl FlowSink for PngSink {
    fn name(&self) -> &'static str {
        "png"
    }

    /// Draws into a staging file next to `path` and moves it into place only
    /// once the image is complete. A failed draw leaves no file behind.
    fn render(&self, diagram: &FlowDiagram, path: &Path) -> Result<(), RenderError> {
        let staging = staging_path(path);

        match self.draw(diagram, &staging) {
            Ok(()) => fs::rename(&staging, path).map_err(|source| {
                let _ = fs::remove_file(&staging);
                RenderError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            }),
            Err(err) => {
                // The bitmap backend flushes whatever it holds when dropped.
                let _ = fs::remove_file(&staging);
                Err(err)
            }
        }
    }
}

impl PngSink {
    fn draw(&self, diagram: &FlowDiagram, path: &Path) -> Result<(), RenderError> {
        let geometry = layout(diagram, &self.params);

        let root = BitMapBackend::new(path, self.pixels).into_drawing_area();
        root.fill(&WHITE).map_err(RenderError::draw)?;

        let title_style = TextStyle::from(("sans-serif", self.font_size * 2.0).into_font())
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(
            TITLE,
            ((self.pixels.0 / 2) as i32, (self.params.margin_top / 2.0) as i32),
            title_style,
        ))
        .map_err(RenderError::draw)?;

        for band in &geometry.bands {
            let points: Vec<(i32, i32)> = band
                .outline(BAND_SAMPLES)
                .into_iter()
                .map(|(x, y)| (x.round() as i32, y.round() as i32))
                .collect();
            root.draw(&Polygon::new(points, BLUE.mix(LINK_ALPHA).filled()))
                .map_err(RenderError::draw)?;
        }

        let label_font = ("sans-serif", self.font_size).into_font();
        for node in &geometry.nodes {
            let corners = [
                (node.x0.round() as i32, node.y0.round() as i32),
                (node.x1.round() as i32, node.y1.round() as i32),
            ];
            root.draw(&Rectangle::new(corners, NODE_FILL.filled()))
                .map_err(RenderError::draw)?;
            root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))
                .map_err(RenderError::draw)?;

            let Some(label) = diagram.nodes.get(node.position) else {
                continue;
            };

            // Left column labels sit left of the node, the rest to the right.
            let gap = 6.0 * SCALE as f64;
            let (x, anchor) = match node.stage {
                Stage::Category => (node.x0 - gap, HPos::Right),
                Stage::Severity | Stage::Status => (node.x1 + gap, HPos::Left),
            };
            let style = TextStyle::from(label_font.clone()).pos(Pos::new(anchor, VPos::Center));
            let y = (node.y0 + node.y1) / 2.0;

            root.draw(&Text::new(
                label.label.clone(),
                (x.round() as i32, y.round() as i32),
                style,
            ))
            .map_err(RenderError::draw)?;
        }

        root.present().map_err(RenderError::draw)?;
        Ok(())
    }
}

/// Hidden sibling of `path` that keeps its extension, which selects the
/// image encoder.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staged = match path.extension() {
        Some(ext) => format!(".{name}.partial.{}", ext.to_string_lossy()),
        None => format!(".{name}.partial"),
    };
    path.with_file_name(staged)
}
