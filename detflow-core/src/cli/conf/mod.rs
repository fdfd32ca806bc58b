mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the HCL config file
        path: PathBuf,

        /// Print errors without color
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the resolved configuration
    Dump {
        /// Path to the HCL config file; defaults are printed when omitted
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a commented default config file
    Init {
        /// Path of the file to create
        #[arg(default_value = "detflow.hcl")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { path, json, yaml } => {
            let format = if yaml && !json {
                DumpFormat::Yaml
            } else {
                DumpFormat::Json
            };
            dump(path, format)
        }
        ConfigCmd::Init { path } => init(path),
    }
}
