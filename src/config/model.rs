use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::svg::ChartStyle;
use crate::pipeline::{FigurePaths, DEFAULT_ASSETS_DIR, DEFAULT_DATA_DIR};

/// Input and output directories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the JSON datasets (default: `data`).
    pub data_dir: PathBuf,

    /// Directory the SVG figures are written to (default: `assets`).
    pub assets_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl PathsConfig {
    #[must_use]
    pub fn figure_paths(&self) -> FigurePaths {
        FigurePaths::new(&self.data_dir, &self.assets_dir)
    }
}

/// Contents of `.snap-figures.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paths: PathsConfig,
    pub style: ChartStyle,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
