//! Precomputed normal-distribution samples for the discretized sigma range.
//!
//! Every selectable sigma maps to an integer key (sigma * 10). The cache
//! computes pdf and cdf sample arrays for all keys once at startup and is
//! never mutated afterwards, so any number of concurrent readers can share
//! it without coordination.

use error_stack::{Report, ResultExt};
use serde::Serialize;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::GaussError;
use crate::grid::SampleGrid;

/// Smallest selectable key (sigma = 0.5).
pub const SIGMA_MIN: i64 = 5;

/// Largest selectable key (sigma = 3.0).
pub const SIGMA_MAX: i64 = 30;

/// Integer-encoded standard deviation: the key value is sigma * 10.
///
/// A `SigmaKey` can only exist for the range the cache covers, so `get`
/// lookups are total by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SigmaKey(i64);

impl SigmaKey {
    /// sigma = 1.0: the standard-normal reference overlay.
    pub const STANDARD: SigmaKey = SigmaKey(10);

    /// Strict constructor; rejects values outside [SIGMA_MIN, SIGMA_MAX].
    pub fn new(raw: i64) -> crate::Result<Self> {
        if (SIGMA_MIN..=SIGMA_MAX).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(Report::new(GaussError).attach_printable(format!(
                "sigma key {raw} outside [{SIGMA_MIN}, {SIGMA_MAX}]"
            )))
        }
    }

    /// Clamp to the nearest bound. The boundary uses this on raw slider
    /// input so the view always stays renderable.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(SIGMA_MIN, SIGMA_MAX))
    }

    pub fn sigma(self) -> f64 {
        self.0 as f64 / 10.0
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

/// One sampled function: N values index-aligned with the shared grid.
/// Owned by the cache, immutable after build.
#[derive(Clone, Debug)]
pub struct CurveSample {
    values: Vec<f64>,
}

impl CurveSample {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Precomputed samples for one sigma, plus the distribution itself for
/// exact evaluation between grid points.
#[derive(Clone, Debug)]
pub struct SigmaEntry {
    normal: Normal,
    pub pdf: CurveSample,
    pub cdf: CurveSample,
}

impl SigmaEntry {
    /// Cumulative mass from -inf to `x`, evaluated exactly at `x` rather
    /// than looked up from the discretized grid. Click positions land
    /// between grid points, so the area annotation needs this.
    pub fn cdf_at(&self, x: f64) -> f64 {
        self.normal.cdf(x)
    }
}

/// Mapping from every in-range [`SigmaKey`] to its pdf and cdf samples.
/// Built once at process start; lives for the process lifetime.
#[derive(Clone, Debug)]
pub struct DistributionCache {
    grid: SampleGrid,
    entries: Vec<SigmaEntry>,
}

impl DistributionCache {
    /// Compute pdf and cdf arrays for every key over the default grid.
    pub fn build() -> crate::Result<Self> {
        let grid = SampleGrid::default();
        let mut entries = Vec::with_capacity((SIGMA_MAX - SIGMA_MIN + 1) as usize);
        for raw in SIGMA_MIN..=SIGMA_MAX {
            let key = SigmaKey(raw);
            let normal = Normal::new(0.0, key.sigma())
                .change_context(GaussError)
                .attach_printable_lazy(|| format!("invalid sigma {}", key.sigma()))?;
            let pdf = grid.points().iter().map(|&x| normal.pdf(x)).collect();
            let cdf = grid.points().iter().map(|&x| normal.cdf(x)).collect();
            entries.push(SigmaEntry {
                normal,
                pdf: CurveSample { values: pdf },
                cdf: CurveSample { values: cdf },
            });
        }
        Ok(Self { grid, entries })
    }

    /// The shared x-axis grid.
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// Samples for `key`. Total: every representable key has an entry.
    pub fn get(&self, key: SigmaKey) -> &SigmaEntry {
        &self.entries[(key.raw() - SIGMA_MIN) as usize]
    }

    /// The fixed standard-normal entry (sigma = 1.0).
    pub fn reference(&self) -> &SigmaEntry {
        self.get(SigmaKey::STANDARD)
    }
}
