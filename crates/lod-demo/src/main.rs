// File: crates/lod-demo/src/main.rs
// Summary: Demo compares a raw chart description against an LTTB-sampled, optimized one and prints a performance report.

mod input;

use anyhow::{Context, Result};
use chart_lod::{
    compare_performance, lttb, optimize_with, ChartDescription, OptimizerConfig, PerfComparison, PerfRecorder,
    PerfReport, Point, RenderMetrics, SeriesOptions,
};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lod-demo", about = "Compare raw vs LTTB-sampled chart descriptions for a large series")]
struct Args {
    /// CSV with time and value columns; a synthetic waveform is used when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Size of the synthetic waveform
    #[arg(long, default_value_t = 100_000)]
    points: usize,

    /// LTTB target point count
    #[arg(long, default_value_t = 2_000)]
    threshold: usize,

    /// JSON optimizer config overriding the default thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write the raw and optimized chart descriptions to
    #[arg(long)]
    emit: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoReport {
    points: usize,
    sampled_points: usize,
    report: PerfReport,
    comparison: PerfComparison,
}

fn main() -> Result<()> {
    init_tracing("info");
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => OptimizerConfig::from_path(path)
            .with_context(|| format!("failed to load optimizer config '{}'", path.display()))?,
        None => OptimizerConfig::default(),
    };

    let points = match &args.input {
        Some(path) => input::load_xy_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => input::gen_wave(args.points),
    };
    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }
    info!(points = points.len(), threshold = args.threshold, "comparing raw and sampled renders");

    let mut rec = PerfRecorder::new();

    // Before: full data, description as built.
    let raw = build_description("Original", &points);
    let raw_json = handoff(&mut rec, "chartBefore", &raw)?;

    // After: sampled data, optimized for the original data size.
    let sampled = rec.time("lttb-sampling", || lttb(&points, args.threshold).into_owned());
    let optimized = optimize_with(&build_description("Optimized", &sampled), points.len(), &cfg);
    let optimized_json = handoff(&mut rec, "chartAfter", &optimized)?;

    if let Some(dir) = &args.emit {
        emit(dir, "raw.json", &raw_json)?;
        emit(dir, "optimized.json", &optimized_json)?;
    }

    let report = rec.generate_report();
    let comparison = compare_performance(
        &metrics(&report, "chartBefore", raw_json.len()),
        &metrics(&report, "chartAfter", optimized_json.len()),
    );
    info!(
        render_time_improvement = comparison.render_time.improvement,
        payload_improvement = comparison.memory.improvement,
        "comparison done"
    );

    let out = DemoReport { points: points.len(), sampled_points: sampled.len(), report, comparison };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn build_description(label: &str, points: &[Point]) -> ChartDescription {
    let mut desc = ChartDescription::new().with_time_axes();
    desc.title = Some(serde_json::json!({ "text": format!("{label} ({})", count_text(points.len())), "left": "center" }));
    desc.tooltip = Some(serde_json::json!({ "trigger": "axis" }));
    let mut series = SeriesOptions::line(points).named("Data");
    series.symbol = Some("none".into());
    series.extra.insert("smooth".into(), true.into());
    desc.add_series(series);
    desc
}

fn count_text(n: usize) -> String {
    if n >= 1000 {
        format!("{:.1}K points", n as f64 / 1000.0)
    } else {
        format!("{n} points")
    }
}

/// Serialize `desc` the way it would be handed to a renderer, timed and bracketed by memory snapshots.
fn handoff(rec: &mut PerfRecorder, chart_id: &str, desc: &ChartDescription) -> Result<String> {
    let timer = format!("{chart_id}-render");
    rec.take_memory_snapshot(format!("{chart_id}-before"));
    rec.start_timing(timer.as_str());
    let json = serde_json::to_string(desc).context("serializing chart description")?;
    let ms = rec.end_timing(&timer);
    rec.take_memory_snapshot(format!("{chart_id}-after"));
    info!(chart_id, ms, bytes = json.len(), "chart description handed off");
    Ok(json)
}

/// Render time from the recorder; the memory figure is the handed-off payload size in bytes.
fn metrics(report: &PerfReport, chart_id: &str, payload_bytes: usize) -> RenderMetrics {
    let render_time_ms = report
        .timings
        .get(&format!("{chart_id}-render"))
        .map_or(0.0, |t| t.average);
    RenderMetrics { render_time_ms, memory_bytes: payload_bytes as f64, fps: 0.0 }
}

fn emit(dir: &Path, name: &str, json: &str) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(name);
    std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote chart description");
    Ok(())
}

/// Stderr logging; RUST_LOG overrides `default_filter`.
fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
