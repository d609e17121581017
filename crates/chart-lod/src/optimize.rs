// File: crates/chart-lod/src/optimize.rs
// Summary: Render-hint optimizer; switches a chart description into large-dataset mode.
// Notes:
// - Both entry points return a new description and leave the input untouched.
//   Series data arrays are shared with the input, never copied or modified.

use tracing::debug;

use crate::config::OptimizerConfig;
use crate::description::ChartDescription;
use crate::types::SYMBOL_NONE;

/// Optimize `desc` for `data_size` points using the default thresholds.
pub fn optimize_for_large_dataset(desc: &ChartDescription, data_size: usize) -> ChartDescription {
    optimize_with(desc, data_size, &OptimizerConfig::default())
}

/// Optimize `desc` for `data_size` points.
///
/// - `data_size <= large_dataset_threshold`: unchanged copy.
/// - above it: animation off, large mode on (globally and per series), series
///   markers removed.
/// - above `progressive_threshold` as well: progressive rendering in chunks.
pub fn optimize_with(desc: &ChartDescription, data_size: usize, cfg: &OptimizerConfig) -> ChartDescription {
    let mut out = desc.clone();
    if data_size <= cfg.large_dataset_threshold {
        return out;
    }

    out.animation = Some(false);

    let progressive = data_size > cfg.progressive_threshold;
    if progressive {
        out.progressive = Some(cfg.progressive_chunk);
        out.progressive_threshold = Some(cfg.progressive_threshold);
    }

    out.large = Some(true);
    out.large_threshold = Some(cfg.large_threshold);

    for s in out.series.iter_mut().flatten() {
        s.large = Some(true);
        s.large_threshold = Some(cfg.large_threshold);
        s.animation = Some(false);
        s.symbol = Some(SYMBOL_NONE.to_string());
    }

    debug!(
        data_size,
        progressive,
        series = out.series.as_ref().map_or(0, Vec::len),
        "applied large-dataset render hints"
    );
    out
}

/// Turn on progressive rendering regardless of data size.
/// Unlike [`optimize_with`] this keeps series markers as they are.
pub fn enable_progressive_rendering(desc: &ChartDescription, cfg: &OptimizerConfig) -> ChartDescription {
    let mut out = desc.clone();
    out.animation = Some(false);
    out.progressive = Some(cfg.progressive_chunk);
    out.progressive_threshold = Some(cfg.progressive_threshold);

    for s in out.series.iter_mut().flatten() {
        s.large = Some(true);
        s.large_threshold = Some(cfg.large_threshold);
        s.animation = Some(false);
    }
    out
}
