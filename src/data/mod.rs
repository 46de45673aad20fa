//! Loading the JSON datasets the figures are drawn from.

mod types;

pub use types::{
    AmplitudeDistribution, HistogramBin, PdfPoint, PlotLimits, RateSample, WaveformSample,
};

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{FigureError, Result};

/// Read and deserialize a JSON file.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read and `JsonParse` if it is not
/// valid JSON of the expected shape.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| FigureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&content, path)
}

/// Deserialize JSON text; `path` is only used for error context.
///
/// # Errors
/// Returns `JsonParse` if the text is not valid JSON of the expected shape.
pub fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|source| FigureError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
