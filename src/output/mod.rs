//! Rendering figures to SVG and writing them to disk.

pub mod svg;
mod write;

pub use write::{atomic_write, ensure_dir};
