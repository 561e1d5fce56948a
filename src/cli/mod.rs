use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod rules;
mod validate;

#[derive(Parser)]
#[command(
    name = "publishable",
    version,
    about = "Check that package manifests are ready to publish"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output on stdout
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate package manifests for publishing
    #[command(alias = "check")]
    Validate {
        /// Paths to package.json / package.yaml files or package directories [default: .]
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the rules manifests are checked against
    Rules {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// Install a stderr subscriber whose level follows `-v` repetition.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) {
    match cli.command {
        Some(Commands::Validate { paths, format }) => validate::run(paths, format),
        Some(Commands::Rules { format }) => rules::run(format),
        None => {
            eprintln!("Usage: publishable <command> [args]");
            eprintln!("Run `publishable --help` for details.");
            std::process::exit(1);
        }
    }
}
