//! rulegate CLI tool.
//!
//! Usage:
//! ```bash
//! rulegate resolve [OPTIONS] [PATH]...
//! rulegate validate
//! rulegate list-rules [--category PREFIX]
//! rulegate init [--preset NAME] [--force]
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use rulegate_core::ValidationErrors;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Exit code for a configuration that fails validation.
const EXIT_INVALID_CONFIG: u8 = 2;

/// Resolve which lint rules apply to which files
#[derive(Parser)]
#[command(name = "rulegate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RULEGATE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective rule set of each file
    Resolve {
        /// Files or directories to resolve (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Also list disabled rules
        #[arg(long)]
        show_disabled: bool,
    },

    /// Check the configuration file and report every problem
    Validate,

    /// List available rules
    ListRules {
        /// Only list rules of this category (e.g. ANN)
        #[arg(long)]
        category: Option<String>,
    },

    /// Initialize configuration file
    Init {
        /// Starter preset
        #[arg(long, default_value = "recommended")]
        preset: PresetArg,

        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for resolution results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One line per file with the enabled codes.
    Compact,
}

/// Preset selection for `init`.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PresetArg {
    Minimal,
    Recommended,
    Strict,
}

impl From<PresetArg> for rulegate_catalog::Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Minimal => Self::Minimal,
            PresetArg::Recommended => Self::Recommended,
            PresetArg::Strict => Self::Strict,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = config_resolver::resolve(&std::env::current_dir()?, cli.config.as_deref());

    match cli.command {
        Commands::Resolve {
            paths,
            format,
            show_disabled,
        } => commands::resolve::run(&paths, format, show_disabled, &source),
        Commands::Validate => commands::validate::run(&source),
        Commands::ListRules { category } => commands::list_rules::run(category.as_deref()),
        Commands::Init { preset, force } => commands::init::run(preset.into(), force),
    }
}

/// Prints an error; invalid configuration gets a full diagnostic and exit code 2.
fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(errors) = err.downcast_ref::<ValidationErrors>() {
        eprintln!("{err}");
        eprintln!("{:?}", miette::Report::new(errors.clone()));
        return ExitCode::from(EXIT_INVALID_CONFIG);
    }
    eprintln!("Error: {err:#}");
    ExitCode::FAILURE
}
