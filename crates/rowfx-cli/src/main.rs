//! rowfx - Demo host application for rowfx scanline operators
//!
//! Owns everything a compositing host would own around an operator:
//! the registry, file I/O, thread pool, and the render driver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rowfx")]
#[command(author, version, about = "Scanline operator demo host")]
#[command(long_about = "
Drives registered scanline operators over image files.

Examples:
  rowfx list                                # Show registered operators
  rowfx apply photo.png -o grey.png         # Greyscale conversion
  rowfx apply photo.png -o r.png --channels r
  rowfx apply photo.png -o grey.png --op grey_average -j 8
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered operators
    List,
    /// Apply an operator to an image file
    Apply(commands::apply::ApplyArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::List => commands::list::run(),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
    }
}
