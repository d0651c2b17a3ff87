use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "symscan")]
#[command(version)]
#[command(about = "Scan a project and map its top-level symbols", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project directory
    Scan {
        /// Project directory (defaults to current directory)
        path: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,

        /// Extract files one at a time on the current thread
        #[arg(long)]
        sequential: bool,

        /// Maximum directory depth to descend
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Show the symbols of a single file
    Ast {
        /// File to inspect
        file: PathBuf,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List supported languages and their extensions
    Languages,
    /// Initialize configuration
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON structured output
    Json,
}
