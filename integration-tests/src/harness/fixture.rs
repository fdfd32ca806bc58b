use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header of a minimal detections export; `id` stands in for the columns
/// the analysis ignores.
pub const HEADER: [&str; 4] = ["id", "sensor_types", "severity", "status"];

/// A CSV file in its own temporary directory. The directory also receives
/// whatever the analysis writes.
pub struct CsvFixture {
    dir: TempDir,
    path: PathBuf,
}

impl CsvFixture {
    /// Writes `rows` under `header`, quoting cells as a spreadsheet export
    /// would.
    pub fn new(header: &[&str], rows: &[Vec<&str>]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create fixture dir");
        let path = dir.path().join("detections.csv");

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .expect("failed to create fixture csv");
        writer.write_record(header).expect("failed to write header");
        for row in rows {
            writer.write_record(row).expect("failed to write row");
        }
        writer.flush().expect("failed to flush fixture csv");

        Self { dir, path }
    }

    /// Rows of `(sensor_types, severity, status)` under [`HEADER`].
    pub fn detections(rows: &[(&str, &str, &str)]) -> Self {
        let ids: Vec<String> = (1..=rows.len()).map(|i| i.to_string()).collect();
        let rows: Vec<Vec<&str>> = rows
            .iter()
            .zip(&ids)
            .map(|((categories, severity, status), id)| {
                vec![id.as_str(), *categories, *severity, *status]
            })
            .collect();

        Self::new(&HEADER, &rows)
    }

    /// Writes the file verbatim, for inputs no well-behaved writer produces.
    pub fn raw(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create fixture dir");
        let path = dir.path().join("detections.csv");
        std::fs::write(&path, contents).expect("failed to write fixture csv");

        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A path next to the CSV.
    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
