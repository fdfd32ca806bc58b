use crate::aggregate::{Aggregation, aggregate_file};
use crate::conf::{AnalysisConfig, ConfigOverrides, resolve_config};
use crate::project::{FlowDiagram, FlowSummary, project, summarize};
use crate::render::{FlowSink, OutputFormat, Rendered, png_sink, write_diagram};
use crate::report::{ConsoleProgress, ReportError, render_preamble, render_summary};
use anyhow::{Context, Result, bail};
use clap::Args;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the detections CSV export
    pub csv_file: PathBuf,

    /// Rows read per batch
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Diagram output path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Drop detections with the sentinel severity (INFO by default)
    #[arg(long)]
    pub exclude_info: bool,

    /// Optional HCL config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Diagram format; PNG falls back to HTML when it cannot be rendered
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Everything one analysis run produced.
#[derive(Debug)]
pub struct AnalysisReport {
    pub aggregation: Aggregation,
    pub summary: FlowSummary,
    pub diagram: FlowDiagram,
    pub rendered: Rendered,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        batch_size: args.chunk_size,
        output: args.output,
        exclude_info: args.exclude_info,
    };
    let config = resolve_config(args.config.as_deref(), overrides)?;

    let sink = png_sink();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    analyze(&args.csv_file, &config, args.format, sink.as_ref(), &mut out)?;
    Ok(())
}

/// Runs the whole pipeline: aggregate, summarize, project, render.
///
/// Console output goes to `out`. The diagram is written with `sink` unless
/// `format` asks for HTML.
pub fn analyze(
    input: &Path,
    config: &AnalysisConfig,
    format: OutputFormat,
    sink: &dyn FlowSink,
    out: &mut dyn Write,
) -> Result<AnalysisReport> {
    if !input.exists() {
        bail!("CSV file not found: {}", input.display());
    }

    write!(out, "{}", render_preamble(input, config))?;

    let aggregation = {
        let excluded = config
            .exclude_info
            .then(|| config.exclude_severity.clone());
        let mut progress = ConsoleProgress::new(&mut *out, excluded);
        aggregate_file(input, config, &mut progress)?
    };

    if aggregation.is_empty() {
        return Err(ReportError::EmptyResult.into());
    }

    let summary = summarize(&aggregation.flows, config.top_k);
    write!(out, "{}", render_summary(&aggregation, &summary, config.top_k))?;

    let diagram = project(&aggregation);
    info!(
        nodes = diagram.nodes.len(),
        links = diagram.edges.links().count(),
        "diagram projected"
    );

    let rendered = write_diagram(&diagram, &config.output, format, sink, &mut *out)
        .with_context(|| format!("failed to write diagram for {}", input.display()))?;

    writeln!(out, "\nAnalysis complete!")?;
    out.flush()?;

    Ok(AnalysisReport {
        aggregation,
        summary,
        diagram,
        rendered,
    })
}
