use crate::project::FlowDiagram;
use crate::render::{FlowSink, HEIGHT, RenderError, TITLE, WIDTH};
use serde_json::json;
use std::fs;
use std::path::Path;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<script src="{{PLOTLY}}"></script>
</head>
<body>
<div id="sankey"></div>
<script>
const figure = {{FIGURE}};
Plotly.newPlot("sankey", figure.data, figure.layout);
</script>
</body>
</html>
"#;

/// Interactive document rendered client-side by plotly.js.
pub struct HtmlSink;

impl HtmlSink {
    /// Plotly figure description: one sankey trace plus layout.
    pub fn figure(diagram: &FlowDiagram) -> serde_json::Value {
        let labels: Vec<&str> = diagram.nodes.labels().collect();
        let links: Vec<_> = diagram.edges.links().collect();

        json!({
            "data": [{
                "type": "sankey",
                "node": {
                    "pad": 15,
                    "thickness": 20,
                    "line": { "color": "black", "width": 0.5 },
                    "label": labels,
                    "color": "lightblue"
                },
                "link": {
                    "source": links.iter().map(|l| l.source).collect::<Vec<_>>(),
                    "target": links.iter().map(|l| l.target).collect::<Vec<_>>(),
                    "value": links.iter().map(|l| l.value).collect::<Vec<_>>(),
                    "color": "rgba(0, 0, 255, 0.3)"
                }
            }],
            "layout": {
                "title": { "text": TITLE },
                "font": { "size": 12 },
                "width": WIDTH,
                "height": HEIGHT
            }
        })
    }

    pub fn document(diagram: &FlowDiagram) -> Result<String, RenderError> {
        // Keep label text from closing the script element early.
        let figure = serde_json::to_string(&Self::figure(diagram))?.replace("</", "<\\/");

        Ok(TEMPLATE
            .replace("{{TITLE}}", TITLE)
            .replace("{{PLOTLY}}", PLOTLY_CDN)
            .replace("{{FIGURE}}", &figure))
    }
}

impl FlowSink for HtmlSink {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, diagram: &FlowDiagram, path: &Path) -> Result<(), RenderError> {
        let document = Self::document(diagram)?;
        fs::write(path, document).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
