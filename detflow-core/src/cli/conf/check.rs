use crate::conf::{AnalysisConfig, ConfigError, load_config};
use owo_colors::OwoColorize;
use std::fmt::Write;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            print!("{}", render_loaded(&cfg));
            Ok(())
        }
        Err(err) => {
            eprint!("{}", render_failure(&err, plain));
            std::process::exit(1);
        }
    }
}

pub fn render_loaded(cfg: &AnalysisConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✔ Config loaded successfully");
    let _ = writeln!(out, "✔ batch size {}", cfg.batch_size);
    let _ = writeln!(
        out,
        "✔ columns {} → {} → {}",
        cfg.columns.categories, cfg.columns.severity, cfg.columns.status
    );
    let _ = writeln!(out, "✔ output {}", cfg.output.display());
    if cfg.exclude_info {
        let _ = writeln!(out, "✔ excluding {} severity", cfg.exclude_severity);
    }
    let _ = writeln!(out, "✔ {} null markers", cfg.null_markers.len());
    out
}

pub fn render_failure(err: &ConfigError, plain: bool) -> String {
    let mut out = String::new();
    if plain {
        let _ = writeln!(out, "error: {err}");
    } else {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}: {err}", "error".red().bold());
    }

    if let Some(hint) = err.hint() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{hint}");
    }
    out
}
