//! tokenlint CLI tool.
//!
//! Usage:
//! ```bash
//! tokenlint check [OPTIONS] [PATH]
//! tokenlint suggest <CLASS> [--siblings "btn px-4"] [--element button]
//! tokenlint list-rules
//! tokenlint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for non-semantic utility classes in UI source files
#[derive(Parser)]
#[command(name = "tokenlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TOKENLINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files for raw utility classes
    Check(commands::check::CheckArgs),

    /// Resolve a single color class the way `check` would
    Suggest {
        /// Raw class name (e.g. `bg-primary-600`)
        class: String,

        /// Other classes of the same class list, space separated
        #[arg(short, long, default_value = "")]
        siblings: String,

        /// Element tag the class list is attached to (e.g. `button`)
        #[arg(short, long)]
        element: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON report.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Annotated source snippets.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check(args) => {
            let clean = commands::check::run(&args, cli.config.as_deref())?;
            if !clean {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Suggest {
            class,
            siblings,
            element,
            format,
        } => commands::suggest::run(
            &class,
            &siblings,
            element.as_deref(),
            format,
            cli.config.as_deref(),
        ),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
