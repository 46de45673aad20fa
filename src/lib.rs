pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod figures;
pub mod output;
pub mod pipeline;

pub use error::{FigureError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RENDER_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for a failed run.
#[must_use]
pub const fn exit_code_for(error: &FigureError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_RENDER_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
