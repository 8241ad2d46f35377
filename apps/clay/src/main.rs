//! clay - assemble and inspect project distribution management blocks
//!
//! Loads a distribution descriptor through the fluent builders, applies
//! environment overrides and renders, validates or traces the result.

mod cli;
mod display;
mod error;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use clay_config::{load_descriptor, merge_env, Config};
use clay_types::ValidationPolicy;
use std::process;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug, cli.global.quiet);

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        if !json_mode || matches!(e, CliError::Clay(_)) {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting clay v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(cli.global.config.as_deref()).await?;

    // 2. Merge environment variables
    config.merge_env()?;

    let descriptor = cli.command.descriptor().to_path_buf();
    let management = merge_env(load_descriptor(&descriptor).await?);
    debug!(
        descriptor = %descriptor.display(),
        empty = management.is_empty(),
        "assembled distribution management"
    );

    let renderer = OutputRenderer::new(cli.global.json);

    // 3. Apply CLI flags (highest precedence)
    match cli.command {
        Commands::Render { format, .. } => {
            renderer.render_record(&management, format.unwrap_or(config.general.default_output))
        }
        Commands::Check { lenient, .. } => {
            let policy = if lenient {
                ValidationPolicy {
                    forbid_status: config.validation.forbid_status,
                    ..ValidationPolicy::lenient()
                }
            } else {
                config.validation
            };
            let problems = management.validate(&policy);
            renderer.render_problems(&problems)?;
            if problems.is_empty() {
                Ok(())
            } else {
                Err(CliError::Invalid {
                    problems: problems.len(),
                })
            }
        }
        Commands::Locations { .. } => renderer.render_locations(&management),
    }
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled: bool, quiet: bool) {
    if quiet {
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
        return;
    }

    let default_filter = if debug_enabled {
        "debug,clay=debug,clay_config=debug"
    } else {
        "warn,clay=info,clay_config=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    if json_mode {
        // Keep stdout clean for JSON output
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
}
