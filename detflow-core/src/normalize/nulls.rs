use std::collections::HashSet;

/// Cell texts that tabular readers conventionally treat as missing.
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Exact-match set of raw cell texts that count as absent.
///
/// Matching happens on the cell as decoded by the CSV reader, before any
/// trimming or unquoting.
#[derive(Debug, Clone)]
pub struct NullMarkers {
    markers: HashSet<String>,
}

impl NullMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_null(&self, cell: &str) -> bool {
        self.markers.contains(cell)
    }

    /// Returns `None` for null markers, the cell otherwise.
    pub fn filter<'a>(&self, cell: Option<&'a str>) -> Option<&'a str> {
        cell.filter(|c| !self.is_null(c))
    }
}

impl Default for NullMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_NULL_MARKERS.iter().copied())
    }
}
