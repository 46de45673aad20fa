use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "snap-figures")]
#[command(author, version, about = "Render the snapping-shrimp poster figures as SVG")]
#[command(long_about = "Renders the snap rate, snap waveform, and snap amplitude figures \
    from pre-computed JSON datasets.\n\n\
    Without a subcommand, reads data/snap_*.json and writes assets/snap_*.svg.\n\n\
    Exit codes:\n  \
    0 - All figures written\n  \
    1 - Render, read, or write failure\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Directory containing the JSON datasets (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory the SVG figures are written to (overrides config)
    #[arg(long, global = true)]
    pub assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter used unless `RUST_LOG` says otherwise.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render the snap rate, waveform, and amplitude figures (default)
    Render,

    /// Render the frequency bands diagram
    Bands(BandsArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BandsArgs {
    /// Output file (default: <assets-dir>/frequency_bands.svg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
