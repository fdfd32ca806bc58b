use crate::conf::{ConfigOverrides, resolve_config};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    #[default]
    Json,
    Yaml,
}

pub fn dump(path: Option<PathBuf>, format: DumpFormat) -> anyhow::Result<()> {
    let cfg = resolve_config(path.as_deref(), ConfigOverrides::default())?;
    println!("{}", render_dump(&cfg, format)?);
    Ok(())
}

pub fn render_dump<T: Serialize>(value: &T, format: DumpFormat) -> anyhow::Result<String> {
    let s = match format {
        DumpFormat::Json => serde_json::to_string_pretty(value)?,
        DumpFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(s)
}
