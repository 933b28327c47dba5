//! MD ↔ TVD depth conversion
//!
//! Piecewise-linear interpolation between the measured-depth and
//! true-vertical-depth columns of a position log. Queries beyond the
//! surveyed range extrapolate linearly along the end segments — wells are
//! routinely queried slightly past the last survey point, so out-of-range
//! is never an error. A well with no deviation survey converts through the
//! identity: MD and TVD coincide for a (presumed) vertical hole.

use crate::position::PositionLog;

/// 1-D piecewise-linear interpolator over an ascending x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Build from aligned (x, y) columns. `xs` must be sorted ascending
    /// and non-empty; callers in this crate get that from the survey
    /// invariant (strictly increasing measured depth).
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert!(!xs.is_empty());
        Self { xs, ys }
    }

    /// Evaluate at `x`, extrapolating linearly beyond either end.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if n == 1 {
            return self.ys[0];
        }

        // Segment index: clamp to the end segments for extrapolation.
        let seg = match self.xs.partition_point(|&v| v < x) {
            0 => 0,
            p if p >= n => n - 2,
            p => p - 1,
        };

        let (x0, x1) = (self.xs[seg], self.xs[seg + 1]);
        let (y0, y1) = (self.ys[seg], self.ys[seg + 1]);
        if x1 == x0 {
            return y0;
        }
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

/// Bidirectional MD ↔ TVD conversion for one well.
///
/// Forward and inverse are independent interpolators over swapped axis
/// pairs, built from the same position log.
#[derive(Debug, Clone, PartialEq)]
pub enum DepthConverter {
    /// No deviation survey: MD and TVD are taken to coincide.
    Identity,
    Interpolated {
        forward: LinearInterpolator,
        inverse: LinearInterpolator,
    },
}

impl Default for DepthConverter {
    fn default() -> Self {
        Self::Identity
    }
}

impl DepthConverter {
    pub const fn identity() -> Self {
        Self::Identity
    }

    /// Build both directions from a position log's (md, tvd) columns.
    pub fn from_position_log(log: &PositionLog) -> Self {
        let mds = log.mds().to_vec();
        let tvds = log.tvds();
        Self::Interpolated {
            forward: LinearInterpolator::new(mds.clone(), tvds.clone()),
            inverse: LinearInterpolator::new(tvds, mds),
        }
    }

    /// Measured depth → true vertical depth.
    pub fn md_to_tvd(&self, md: f64) -> f64 {
        match self {
            Self::Identity => md,
            Self::Interpolated { forward, .. } => forward.eval(md),
        }
    }

    /// True vertical depth → measured depth.
    pub fn tvd_to_md(&self, tvd: f64) -> f64 {
        match self {
            Self::Identity => tvd,
            Self::Interpolated { inverse, .. } => inverse.eval(tvd),
        }
    }

    pub fn md_to_tvd_many(&self, mds: &[f64]) -> Vec<f64> {
        mds.iter().map(|&md| self.md_to_tvd(md)).collect()
    }

    pub fn tvd_to_md_many(&self, tvds: &[f64]) -> Vec<f64> {
        tvds.iter().map(|&tvd| self.tvd_to_md(tvd)).collect()
    }
}
