use crate::index::formatter::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rindex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Index security framework controls against the Kubernetes resources they inspect")]
#[command(long_about = "Loads security frameworks (controls and rules) and computes the set of Kubernetes API resources that must be fetched to evaluate them, along with the controls that consume each host-data, cloud or vulnerability resource.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the resource set and control index for framework files
    Build {
        /// Framework files (.json, .yaml, .yml) or directories containing them
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Warn about dynamic match resources with no known API group
        #[arg(long)]
        warn_unmapped: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show how special resource names resolve to API groups
    Aliases {
        /// Resource names (e.g. KernelVersion, ClusterDescribe)
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
