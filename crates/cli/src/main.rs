//! # Powkit CLI
//!
//! Accuracy and cache-consistency reports for the powkit exponentiation
//! strategies.
//!
//! # Commands
//!
//! - `accuracy`: grade the integer-exponent strategies and the reference on
//!   the fixed datasets and the error-analysis grid
//! - `fractional`: grade the three `x^(2/3)` approximations
//! - `cache`: run every cache strategy over the integer dataset and check it
//!   against the unmemoized result

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::OutputFormat;

/// Accuracy reporter for the powkit exponentiation strategies
#[derive(Parser)]
#[command(name = "powkit")]
#[command(about = "Accuracy and cache reports for the powkit exponentiation strategies")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade integer-exponent strategies against the reference power
    Accuracy(commands::accuracy::AccuracyArgs),

    /// Grade the x^(2/3) approximations against the reference power
    Fractional(commands::fractional::FractionalArgs),

    /// Check every cache strategy against unmemoized results
    Cache(commands::cache::CacheArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Accuracy(args) => commands::accuracy::execute(&args, cli.format),
        Commands::Fractional(args) => commands::fractional::execute(&args, cli.format),
        Commands::Cache(args) => commands::cache::execute(&args, cli.format),
    }
}
