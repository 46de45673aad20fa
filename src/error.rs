use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {axis}-axis limits: [{lo}, {hi}]")]
    InvalidLimits { axis: String, lo: f64, hi: f64 },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FigureError {
    /// Short variant name, used in debug logging.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::CreateDir { .. } => "CreateDir",
            Self::JsonParse { .. } => "JsonParse",
            Self::InvalidLimits { .. } => "InvalidLimits",
            Self::TomlParse(_) => "TomlParse",
        }
    }

    /// Whether the error comes from configuration rather than rendering.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::TomlParse(_))
    }
}

pub type Result<T> = std::result::Result<T, FigureError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
