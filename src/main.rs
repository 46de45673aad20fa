use std::path::{Path, PathBuf};

use clap::Parser;

use snap_figures::cli::{BandsArgs, Cli, Commands};
use snap_figures::config::{Config, ConfigLoader, FileConfigLoader};
use snap_figures::figures::bands;
use snap_figures::output::ensure_dir;
use snap_figures::output::svg::ChartStyle;
use snap_figures::pipeline::{self, FigurePaths};
use snap_figures::{exit_code_for, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log::debug!("{} error: {e:?}", e.error_type());
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> snap_figures::Result<()> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let paths = resolve_paths(&config, cli);

    match &cli.command {
        None | Some(Commands::Render) => pipeline::run(&paths, &config.style, |job| {
            report_saved(cli.quiet, job.kind.name(), &job.output);
        }),
        Some(Commands::Bands(args)) => run_bands(args, &paths, &config.style, cli.quiet),
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> snap_figures::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Config file paths with CLI overrides applied.
fn resolve_paths(config: &Config, cli: &Cli) -> FigurePaths {
    let mut paths = config.paths.figure_paths();
    if let Some(dir) = &cli.data_dir {
        paths.data_dir.clone_from(dir);
    }
    if let Some(dir) = &cli.assets_dir {
        paths.assets_dir.clone_from(dir);
    }
    log::debug!(
        "Data directory {}, assets directory {}",
        paths.data_dir.display(),
        paths.assets_dir.display()
    );
    paths
}

fn bands_output_path(args: &BandsArgs, paths: &FigurePaths) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| paths.assets_dir.join(bands::FILE_NAME))
}

fn run_bands(
    args: &BandsArgs,
    paths: &FigurePaths,
    style: &ChartStyle,
    quiet: bool,
) -> snap_figures::Result<()> {
    let output = bands_output_path(args, paths);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    bands::render_to_file(&output, style)?;
    report_saved(quiet, bands::NAME, &output);
    Ok(())
}

fn report_saved(quiet: bool, name: &str, path: &Path) {
    if !quiet {
        println!("Saved {name} figure to {}", path.display());
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
