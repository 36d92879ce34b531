mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "corexia")]
#[command(about = "Browse and manage Corexia platform resources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $COREXIA_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Skip the platform API and serve the built-in sample data
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
