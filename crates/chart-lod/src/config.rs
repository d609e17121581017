// File: crates/chart-lod/src/config.rs
// Summary: Tunable thresholds for the render-hint optimizer.
// Notes:
// - The defaults are tuned policy values, not derived ones. Keep them as-is
//   unless a renderer benchmark says otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Data sizes at or below this render with the description untouched.
pub const DEFAULT_LARGE_DATASET_THRESHOLD: usize = 2000;
/// Data sizes above this also get progressive (chunked) rendering.
pub const DEFAULT_PROGRESSIVE_THRESHOLD: usize = 3000;
/// Points per progressive rendering chunk.
pub const DEFAULT_PROGRESSIVE_CHUNK: usize = 1000;
/// Point count past which the renderer decimates a series in large mode.
pub const DEFAULT_LARGE_THRESHOLD: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OptimizerConfig {
    pub large_dataset_threshold: usize,
    pub progressive_threshold: usize,
    pub progressive_chunk: usize,
    pub large_threshold: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            large_dataset_threshold: DEFAULT_LARGE_DATASET_THRESHOLD,
            progressive_threshold: DEFAULT_PROGRESSIVE_THRESHOLD,
            progressive_chunk: DEFAULT_PROGRESSIVE_CHUNK,
            large_threshold: DEFAULT_LARGE_THRESHOLD,
        }
    }
}

impl OptimizerConfig {
    /// Parse a JSON config; missing keys take their defaults. The result is validated.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Contract: chunk and decimation sizes are non-zero, and progressive mode
    /// never starts below large-dataset mode.
    pub fn validate(&self) -> Result<()> {
        if self.progressive_chunk == 0 {
            return Err(Error::InvalidConfig("progressiveChunk must be greater than zero"));
        }
        if self.large_threshold == 0 {
            return Err(Error::InvalidConfig("largeThreshold must be greater than zero"));
        }
        if self.progressive_threshold < self.large_dataset_threshold {
            return Err(Error::InvalidConfig(
                "progressiveThreshold must not be below largeDatasetThreshold",
            ));
        }
        Ok(())
    }
}
