//! Flow projection
//!
//! Collapses the three-key frequency table into what a layered flow diagram
//! needs: one node per (stage, label), and two layers of weighted links.
//! Summary statistics for the console report are derived from the same table.

mod edges;
mod nodes;
mod summary;

pub use edges::*;
pub use nodes::*;
pub use summary::*;

use crate::aggregate::Aggregation;

/// Everything a rendering sink needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDiagram {
    pub nodes: NodeIndex,
    pub edges: EdgeList,
}

pub fn project(aggregation: &Aggregation) -> FlowDiagram {
    let nodes = NodeIndex::from_labels(&aggregation.labels);
    let pairs = PairCounts::from_flows(&aggregation.flows);
    let edges = EdgeList::build(&nodes, &pairs);

    FlowDiagram { nodes, edges }
}
