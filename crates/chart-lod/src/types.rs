// File: crates/chart-lod/src/types.rs
// Summary: Shared point type and the symbol name used for marker-less series.

/// One sample: `x` is usually epoch milliseconds, `y` the measurement.
pub type Point = (f64, f64);

/// Marker symbol that tells the renderer to draw no per-point marker.
pub const SYMBOL_NONE: &str = "none";
