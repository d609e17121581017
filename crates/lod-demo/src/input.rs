// File: crates/lod-demo/src/input.rs
// Summary: Series sources for the demo: XY CSV loader and a synthetic waveform.

use anyhow::{Context, Result};
use chart_lod::Point;
use chrono::{DateTime, NaiveDate};
use std::path::Path;
use tracing::{info, warn};

/// Load a time/value CSV into points. X falls back to the row index when no
/// time column is found or a cell does not parse; rows without a value are dropped.
pub fn load_xy_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_x = idx(&["time", "timestamp", "ts", "date", "datetime", "orderdate", "x"]);
    let i_y = idx(&["value", "y", "close", "price", "freight", "amount"]);

    let Some(i_y) = i_y else {
        anyhow::bail!("no value column in {} (looked for value/y/close/price/freight/amount)", path.display());
    };
    if i_x.is_none() {
        warn!("no time column; using row index for x");
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let x = i_x
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time_to_ms)
            .unwrap_or(row as f64);
        match rec.get(i_y).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(y) => out.push((x, y)),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a numeric value were dropped");
    }
    Ok(out)
}

/// Parse epoch seconds/milliseconds, RFC 3339 timestamps or plain dates into epoch ms.
fn parse_time_to_ms(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return Some(n as f64);
        } // epoch ms
        if n > 10_i64.pow(9) {
            return Some(n as f64 * 1000.0);
        } // epoch sec -> ms
        return Some(n as f64);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
}

/// Daily samples from 2020-01-01 of a drifting waveform; deterministic so runs compare.
pub fn gen_wave(n: usize) -> Vec<Point> {
    const DAY_MS: f64 = 86_400_000.0;
    const START_MS: f64 = 1_577_836_800_000.0; // 2020-01-01T00:00:00Z
    (0..n)
        .map(|i| {
            let t = i as f64;
            let y = 100.0 + (t * 0.01).sin() * 20.0 + (t * 0.37).sin() * 3.0 + t * 0.001;
            (START_MS + t * DAY_MS, y)
        })
        .collect()
}
