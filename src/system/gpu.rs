//! GPU class recommendation
//!
//! Maps a required-memory figure onto the smallest GPU configuration that
//! holds it. Intervals are half-open: low bound inclusive, high bound exclusive.

use serde::Serialize;

/// A GPU configuration tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpuClass {
    Single8Gb,
    Single12Gb,
    Single24Gb,
    Single48Gb,
    Single80Gb,
    Dual80Gb,
    MultipleGpus,
}

/// Exclusive upper bound of each tier, in ascending order.
const TIERS: [(f64, GpuClass); 6] = [
    (8.0, GpuClass::Single8Gb),
    (12.0, GpuClass::Single12Gb),
    (24.0, GpuClass::Single24Gb),
    (48.0, GpuClass::Single48Gb),
    (80.0, GpuClass::Single80Gb),
    (170.0, GpuClass::Dual80Gb),
];

impl GpuClass {
    pub fn label(&self) -> &'static str {
        match self {
            GpuClass::Single8Gb => "at least 1×8GB GPU",
            GpuClass::Single12Gb => "at least 1×12GB GPU",
            GpuClass::Single24Gb => "at least 1×24GB GPU",
            GpuClass::Single48Gb => "at least 1×48GB GPU",
            GpuClass::Single80Gb => "at least 1×80GB GPU",
            GpuClass::Dual80Gb => "at least 2×80GB GPU",
            GpuClass::MultipleGpus => "multiple GPUs needed",
        }
    }

    /// Inclusive lower bound of the tier.
    pub fn lower_bound(&self) -> f64 {
        match self {
            GpuClass::Single8Gb => 0.0,
            GpuClass::Single12Gb => 8.0,
            GpuClass::Single24Gb => 12.0,
            GpuClass::Single48Gb => 24.0,
            GpuClass::Single80Gb => 48.0,
            GpuClass::Dual80Gb => 80.0,
            GpuClass::MultipleGpus => 170.0,
        }
    }
}

impl std::fmt::Display for GpuClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the GPU tier for `memory`, in the same units the caller supplies.
///
/// Values below zero land in the smallest tier. NaN has no tier and is
/// reported as needing multiple GPUs.
pub fn recommend_gpu(memory: f64) -> GpuClass {
    TIERS
        .iter()
        .find(|(upper, _)| memory < *upper)
        .map(|(_, class)| *class)
        .unwrap_or(GpuClass::MultipleGpus)
}
