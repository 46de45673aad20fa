//! Integration tests for failing runs and exit codes.

mod common;

use common::{TestFixture, AMPLITUDE_JSON};
use predicates::prelude::*;

#[test]
fn missing_data_dir_fails_with_render_exit_code() {
    let fixture = TestFixture::new();

    snap_figures!()
        .current_dir(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to read file"))
        .stderr(predicate::str::contains("snap_rate.json"));

    assert!(!fixture.exists("assets/snap_rate.svg"));
}

#[test]
fn malformed_json_stops_before_later_figures() {
    let fixture = TestFixture::with_datasets();
    fixture.create_file("data/snap_waveform.json", "[{\"time\": 0.0}]");

    snap_figures!()
        .current_dir(fixture.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Saved snap rate figure"))
        .stderr(predicate::str::contains("Invalid JSON"))
        .stderr(predicate::str::contains("amplitude"));

    assert!(fixture.exists("assets/snap_rate.svg"));
    assert!(!fixture.exists("assets/snap_waveform.svg"));
    assert!(!fixture.exists("assets/snap_amplitude.svg"));
}

#[test]
fn invalid_plot_limits_fail() {
    let fixture = TestFixture::with_datasets();
    let reversed = AMPLITUDE_JSON.replace("[0.0, 0.0004]", "[0.0004, 0.0]");
    fixture.create_file("data/snap_amplitude.json", &reversed);

    snap_figures!()
        .current_dir(fixture.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid y-axis limits"));

    assert!(!fixture.exists("assets/snap_amplitude.svg"));
}

#[test]
fn failed_figure_keeps_previous_output() {
    let fixture = TestFixture::with_datasets();
    snap_figures!().current_dir(fixture.path()).assert().success();
    let before = fixture.read("assets/snap_amplitude.svg");

    fixture.create_file("data/snap_amplitude.json", "{");
    snap_figures!().current_dir(fixture.path()).assert().code(1);

    assert_eq!(fixture.read("assets/snap_amplitude.svg"), before);
}
