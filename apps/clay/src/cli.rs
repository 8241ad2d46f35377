//! Command line interface definition

use clap::{Parser, Subcommand};
use clay_config::OutputFormat;
use std::path::PathBuf;

/// clay - assemble and inspect distribution management blocks
#[derive(Parser)]
#[command(name = "clay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Assemble and inspect project distribution management blocks")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging to stderr
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub debug: bool,

    /// Disable logging entirely
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the assembled distribution management block
    Render {
        /// Path to the descriptor
        #[arg(default_value = clay_config::DESCRIPTOR_FILE)]
        descriptor: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Validate the assembled block and report every problem
    Check {
        /// Path to the descriptor
        #[arg(default_value = clay_config::DESCRIPTOR_FILE)]
        descriptor: PathBuf,

        /// Skip status and repository URL checks
        #[arg(long)]
        lenient: bool,
    },

    /// Show where each value of the descriptor was read from
    #[command(alias = "loc")]
    Locations {
        /// Path to the descriptor
        #[arg(default_value = clay_config::DESCRIPTOR_FILE)]
        descriptor: PathBuf,
    },
}

impl Commands {
    pub fn descriptor(&self) -> &std::path::Path {
        match self {
            Self::Render { descriptor, .. }
            | Self::Check { descriptor, .. }
            | Self::Locations { descriptor } => descriptor,
        }
    }
}
