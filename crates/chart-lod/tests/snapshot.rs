// File: crates/chart-lod/tests/snapshot.rs
// Purpose: Golden snapshot of an optimized description with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the parsed JSON structurally.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_lod::{optimize_for_large_dataset, ChartDescription, SeriesOptions};
use pretty_assertions::assert_eq;

fn optimized() -> serde_json::Value {
    let mut desc = ChartDescription::new().with_title("Sensor").with_time_axes();
    desc.add_series(SeriesOptions::line(&[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)]).named("temperature"));
    serde_json::to_value(optimize_for_large_dataset(&desc, 5_000)).expect("serialize")
}

#[test]
fn golden_optimized_line() {
    let got = optimized();
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/optimized_line.json");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(snap_path.parent().unwrap()).expect("create snapshots dir");
        let text = serde_json::to_string_pretty(&got).expect("pretty json");
        std::fs::write(&snap_path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {}", snap_path.display());
        return;
    }

    if snap_path.exists() {
        let text = std::fs::read_to_string(&snap_path).expect("read snapshot");
        let want: serde_json::Value = serde_json::from_str(&text).expect("parse snapshot");
        assert_eq!(got, want, "optimized description differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
