use clap::{Parser, Subcommand};
use detflow_core::cli::analyze::{AnalyzeArgs, run_analyze};
use detflow_core::cli::conf::{self, ConfigCmd};
use detflow_core::logging::{LogFormat, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "detflow",
    version,
    about = "detflow: detection flow analysis for Taegis XDR CSV exports"
)]
struct Cli {
    /// Diagnostics format on stderr (filtered by RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate a detections CSV and render the Sankey diagram
    Analyze(AnalyzeArgs),

    /// Config file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let result = match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Config { cmd } => conf::run(cmd),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
