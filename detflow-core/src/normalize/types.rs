use serde::Serialize;
use std::fmt;

/// Result of running a single category strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    Parsed(Vec<String>),
    Unparsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    Json,
    Literal,
    BracketSplit,
    Verbatim,
}

impl ParseStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseStrategy::Json => "json",
            ParseStrategy::Literal => "literal",
            ParseStrategy::BracketSplit => "bracket_split",
            ParseStrategy::Verbatim => "verbatim",
        }
    }

    /// Labels from these strategies get residual double quotes stripped.
    pub fn is_structured(self) -> bool {
        matches!(self, ParseStrategy::Json | ParseStrategy::Literal)
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clean category labels for one cell, plus the strategy that produced them.
///
/// `strategy` is `None` when the cell was absent or empty and no strategy ran.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryParse {
    pub labels: Vec<String>,
    pub strategy: Option<ParseStrategy>,
}

impl CategoryParse {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
