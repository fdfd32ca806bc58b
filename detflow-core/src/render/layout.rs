use crate::project::{FlowDiagram, Link, Stage};

/// Canvas geometry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub width: f64,
    pub height: f64,
    /// Space around the plot; the top margin also leaves room for the title.
    pub margin_x: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub node_width: f64,
    /// Preferred vertical gap between nodes of one column.
    pub node_pad: f64,
}

impl LayoutParams {
    pub fn scaled(width: u32, height: u32, scale: u32) -> Self {
        let s = scale as f64;
        Self {
            width: width as f64 * s,
            height: height as f64 * s,
            margin_x: 180.0 * s,
            margin_top: 80.0 * s,
            margin_bottom: 30.0 * s,
            node_width: 20.0 * s,
            node_pad: 15.0 * s,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    /// Index into the diagram's node list.
    pub position: usize,
    pub stage: Stage,
    pub value: u64,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

/// A link drawn as a band of constant thickness between two node edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub link: Link,
    pub source_x: f64,
    pub source_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub thickness: f64,
}

impl Band {
    /// Closed outline: the top edge left to right, then the bottom edge back.
    /// Edges are cubic curves with horizontal tangents at both ends.
    pub fn outline(&self, samples: usize) -> Vec<(f64, f64)> {
        let samples = samples.max(2);
        let mid = (self.source_x + self.target_x) / 2.0;

        let edge = |offset: f64| -> Vec<(f64, f64)> {
            (0..samples)
                .map(|i| {
                    let t = i as f64 / (samples - 1) as f64;
                    let x = cubic(self.source_x, mid, mid, self.target_x, t);
                    let y = cubic(
                        self.source_y + offset,
                        self.source_y + offset,
                        self.target_y + offset,
                        self.target_y + offset,
                        t,
                    );
                    (x, y)
                })
                .collect()
        };

        let mut points = edge(0.0);
        points.extend(edge(self.thickness).into_iter().rev());
        points
    }
}

fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub nodes: Vec<NodeBox>,
    pub bands: Vec<Band>,
}

/// Places every node in its stage column and stacks link bands on node edges.
///
/// Node height is proportional to throughput. All columns share one
/// pixels-per-count factor, so band thickness matches at both ends.
pub fn layout(diagram: &FlowDiagram, params: &LayoutParams) -> Layout {
    let node_count = diagram.nodes.len();
    if node_count == 0 {
        return Layout::default();
    }

    let mut inflow = vec![0u64; node_count];
    let mut outflow = vec![0u64; node_count];
    for link in diagram.edges.links() {
        outflow[link.source] += link.value;
        inflow[link.target] += link.value;
    }
    let value_of = |i: usize| inflow[i].max(outflow[i]);

    let inner_height = (params.height - params.margin_top - params.margin_bottom).max(1.0);
    let inner_width = (params.width - 2.0 * params.margin_x - params.node_width).max(1.0);

    let columns: Vec<Vec<usize>> = Stage::ALL
        .iter()
        .map(|stage| diagram.nodes.stage_nodes(*stage).map(|(i, _)| i).collect())
        .collect();

    // Shrink the gap when a column is too crowded for the preferred padding.
    let busiest = columns.iter().map(Vec::len).max().unwrap_or(1);
    let pad = if busiest > 1 {
        params
            .node_pad
            .min(inner_height * 0.3 / (busiest - 1) as f64)
    } else {
        params.node_pad
    };

    let scale = columns
        .iter()
        .filter_map(|col| {
            let total: u64 = col.iter().map(|i| value_of(*i)).sum();
            (total > 0).then(|| {
                let gaps = pad * col.len().saturating_sub(1) as f64;
                (inner_height - gaps).max(1.0) / total as f64
            })
        })
        .fold(f64::INFINITY, f64::min);
    let scale = if scale.is_finite() { scale } else { 0.0 };

    let mut boxes: Vec<Option<NodeBox>> = vec![None; node_count];
    for (c, col) in columns.iter().enumerate() {
        let stack: f64 = col
            .iter()
            .map(|i| node_height(value_of(*i), scale))
            .sum::<f64>()
            + pad * col.len().saturating_sub(1) as f64;

        let x0 = params.margin_x + inner_width * c as f64 / 2.0;
        let mut y = params.margin_top + ((inner_height - stack) / 2.0).max(0.0);

        for &i in col {
            let h = node_height(value_of(i), scale);
            boxes[i] = Some(NodeBox {
                position: i,
                stage: Stage::ALL[c],
                value: value_of(i),
                x0,
                x1: x0 + params.node_width,
                y0: y,
                y1: y + h,
            });
            y += h + pad;
        }
    }
    let nodes: Vec<NodeBox> = boxes.into_iter().flatten().collect();

    let mut out_offset = vec![0.0; node_count];
    let mut in_offset = vec![0.0; node_count];
    // Every node sits in exactly one column, so `nodes[i].position == i`.
    let find = |i: usize| nodes.get(i);

    let mut bands = Vec::new();
    for link in diagram.edges.links() {
        let (Some(src), Some(dst)) = (find(link.source), find(link.target)) else {
            continue;
        };
        let thickness = link.value as f64 * scale;

        bands.push(Band {
            link: *link,
            source_x: src.x1,
            source_y: src.y0 + out_offset[link.source],
            target_x: dst.x0,
            target_y: dst.y0 + in_offset[link.target],
            thickness,
        });

        out_offset[link.source] += thickness;
        in_offset[link.target] += thickness;
    }

    Layout { nodes, bands }
}

/// Nodes stay visible even when their share rounds to nothing.
fn node_height(value: u64, scale: f64) -> f64 {
    (value as f64 * scale).max(1.0)
}
