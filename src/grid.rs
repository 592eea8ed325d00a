//! The fixed x-axis sample grid shared by every curve.

/// Number of sample points per curve.
pub const GRID_POINTS: usize = 150;

/// Half-width of the sampled domain: curves span [-X_MAX, X_MAX].
pub const X_MAX: f64 = 5.0;

/// An ordered sequence of evenly spaced x-values, symmetric about 0 and
/// fixed for the process lifetime. All curves share one grid so that
/// index-aligned comparisons between them are valid.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    points: Vec<f64>,
}

impl SampleGrid {
    /// Evenly spaced grid over [-half_width, half_width] with exact endpoints.
    pub fn symmetric(half_width: f64, n: usize) -> Self {
        debug_assert!(n >= 2 && half_width > 0.0);
        let step = 2.0 * half_width / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n).map(|i| -half_width + i as f64 * step).collect();
        // Pin the right endpoint so the grid mirrors exactly.
        points[n - 1] = half_width;
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self::symmetric(X_MAX, GRID_POINTS)
    }
}
