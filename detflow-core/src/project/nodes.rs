use crate::aggregate::LabelUniverse;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Category,
    Severity,
    Status,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Category, Stage::Severity, Stage::Status];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Category => "category",
            Stage::Severity => "severity",
            Stage::Status => "status",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub stage: Stage,
    pub label: String,
}

/// Stable node positions: categories, then severities, then statuses, each
/// group sorted by label. The same text at two stages is two nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIndex {
    nodes: Vec<Node>,
    positions: HashMap<(Stage, String), usize>,
}

impl NodeIndex {
    pub fn from_labels(labels: &LabelUniverse) -> Self {
        let mut index = Self::default();

        // BTreeSet iteration is already lexicographic.
        let groups = [
            (Stage::Category, &labels.categories),
            (Stage::Severity, &labels.severities),
            (Stage::Status, &labels.statuses),
        ];
        for (stage, group) in groups {
            for label in group {
                index.insert(stage, label);
            }
        }

        index
    }

    fn insert(&mut self, stage: Stage, label: &str) {
        let position = self.nodes.len();
        self.nodes.push(Node {
            stage,
            label: label.to_string(),
        });
        self.positions.insert((stage, label.to_string()), position);
    }

    pub fn position(&self, stage: Stage, label: &str) -> Option<usize> {
        self.positions.get(&(stage, label.to_string())).copied()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, position: usize) -> Option<&Node> {
        self.nodes.get(position)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    pub fn stage_nodes(&self, stage: Stage) -> impl Iterator<Item = (usize, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.stage == stage)
    }
}
