// File: crates/chart-lod/src/memory.rs
// Summary: Best-effort process memory probe used by the performance recorder.

use serde::Serialize;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub limit_bytes: u64,
}

/// Source of memory figures. `None` means "not available here", never an error.
pub trait MemoryProbe: Send {
    fn usage(&self) -> Option<MemoryUsage>;
}

impl<F> MemoryProbe for F
where
    F: Fn() -> Option<MemoryUsage> + Send,
{
    fn usage(&self) -> Option<MemoryUsage> {
        self()
    }
}

/// Reads the current process from procfs: used = resident set, total = virtual
/// size, limit = physical memory. Unavailable off Linux.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessMemory;

impl MemoryProbe for ProcessMemory {
    #[cfg(target_os = "linux")]
    fn usage(&self) -> Option<MemoryUsage> {
        let read = |path: &str| match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(path, %err, "memory probe unavailable");
                None
            }
        };
        let status = read("/proc/self/status")?;
        let meminfo = read("/proc/meminfo")?;
        Some(MemoryUsage {
            used_bytes: kib_field(&status, "VmRSS:")?,
            total_bytes: kib_field(&status, "VmSize:")?,
            limit_bytes: kib_field(&meminfo, "MemTotal:")?,
        })
    }

    #[cfg(not(target_os = "linux"))]
    fn usage(&self) -> Option<MemoryUsage> {
        debug!("memory probe unavailable on this platform");
        None
    }
}

/// Value of a `Key:   1234 kB` procfs line, in bytes.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn kib_field(text: &str, key: &str) -> Option<u64> {
    let line = text.lines().find(|l| l.starts_with(key))?;
    let kib: u64 = line[key.len()..].split_whitespace().next()?.parse().ok()?;
    Some(kib * 1024)
}
