#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the snap-figures binary.
#[macro_export]
macro_rules! snap_figures {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("snap-figures"))
    };
}

/// A temporary working directory with the poster datasets.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture with all three datasets under `data/`.
    pub fn with_datasets() -> Self {
        let fixture = Self::new();
        fixture.create_datasets("data");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes the three datasets into `relative_dir`.
    pub fn create_datasets(&self, relative_dir: &str) {
        self.create_file(&format!("{relative_dir}/snap_rate.json"), RATE_JSON);
        self.create_file(&format!("{relative_dir}/snap_waveform.json"), WAVEFORM_JSON);
        self.create_file(&format!("{relative_dir}/snap_amplitude.json"), AMPLITUDE_JSON);
    }

    /// Creates a `.snap-figures.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".snap-figures.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Whether a file exists in the temp directory.
    pub fn exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const RATE_JSON: &str = r#"[
    {"time": 0.0, "rate": 31.2},
    {"time": 6.0, "rate": 38.5},
    {"time": 12.0, "rate": 44.1},
    {"time": 24.0, "rate": 33.0},
    {"time": 48.0, "rate": 36.4}
]"#;

pub const WAVEFORM_JSON: &str = r#"[
    {"time": 0.0, "amplitude": 0.0},
    {"time": 0.25, "amplitude": 0.9},
    {"time": 0.5, "amplitude": -0.6},
    {"time": 1.0, "amplitude": 0.2},
    {"time": 2.0, "amplitude": 0.0},
    {"time": 2.5, "amplitude": 0.1},
    {"time": 4.0, "amplitude": 0.0}
]"#;

pub const AMPLITUDE_JSON: &str = r#"{
    "histogram": [
        {"x": -2000.0, "y": 0.00005, "width": 1000.0},
        {"x": -1000.0, "y": 0.0003, "width": 1000.0},
        {"x": 0.0, "y": 0.00032, "width": 1000.0},
        {"x": 1000.0, "y": 0.00004, "width": 1000.0}
    ],
    "pdf": [
        {"x": -3000.0, "levy_pdf": 0.00001, "gauss_pdf": 0.0},
        {"x": 0.0, "levy_pdf": 0.00035, "gauss_pdf": 0.0003},
        {"x": 3000.0, "levy_pdf": 0.00001, "gauss_pdf": 0.0}
    ],
    "plot_limits": {"xlim": [-3000.0, 3000.0], "ylim": [0.0, 0.0004]}
}"#;
