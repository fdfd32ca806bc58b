use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// Default settings, spelled out so they can be edited in place.
pub const CONFIG_TEMPLATE: &str = r#"
# detflow analysis settings.
# Every attribute is optional; omitted ones keep the value shown here.
analysis = {
  # Rows read from the CSV per batch.
  batch_size = 100000

  # Where the diagram is written. HTML is written next to it when the
  # image cannot be rendered.
  output = "sankey_diagram.png"

  # Drop detections whose severity matches exclude_severity (case-insensitive).
  exclude_info     = false
  exclude_severity = "INFO"

  # Number of flows listed in the summary.
  top_k = 10

  columns = {
    categories = "sensor_types"
    severity   = "severity"
    status     = "status"
  }
}
"#;

pub fn init(path: PathBuf) -> Result<()> {
    if path.exists() {
        bail!("config file '{}' already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(&path, CONFIG_TEMPLATE.trim_start())
        .with_context(|| format!("failed to create {}", path.display()))?;

    println!("✔ Initialized detflow config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  detflow config check {}", path.display());
    println!("  detflow analyze <csv_file> --config {}", path.display());

    Ok(())
}
