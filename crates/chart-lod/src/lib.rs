// File: crates/chart-lod/src/lib.rs
// Summary: Library entry point; exports LTTB downsampling, the render-hint optimizer and the performance recorder.

pub mod config;
pub mod description;
pub mod downsample;
pub mod error;
pub mod memory;
pub mod optimize;
pub mod perf;
pub mod series;
pub mod types;

pub use config::OptimizerConfig;
pub use description::ChartDescription;
pub use downsample::{lttb, lttb_indices};
pub use error::{Error, Result};
pub use memory::{MemoryProbe, MemoryUsage, ProcessMemory};
pub use optimize::{enable_progressive_rendering, optimize_for_large_dataset, optimize_with};
pub use perf::{compare_performance, PerfComparison, PerfRecorder, PerfReport, RenderMetrics};
pub use series::{SeriesOptions, SeriesType};
pub use types::Point;
