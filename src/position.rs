//! Wellbore position integration
//!
//! Converts a normalized deviation survey into a 3-D position log by
//! integrating station to station with one of the standard closed-form
//! directional-drilling methods:
//! - Average angle
//! - Balanced tangential
//! - Minimum curvature (industry default)
//!
//! All three share the same per-segment structure — course length times a
//! tangent-vector term — and differ only in how the two stations' attitudes
//! are averaged and whether a curvature correction is applied. The
//! numerically delicate dogleg / ratio-factor logic lives in one place,
//! `segment_displacement`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::survey::DeviationSurvey;
use crate::types::{PositionPoint, SurveyStation};

/// Dogleg substitute when two consecutive attitudes are identical.
///
/// `RF = (2/DL)·tan(DL/2)` is singular at DL = 0; at DL = 1e-9 rad the
/// ratio factor evaluates to exactly 1.0 in f64, so straight segments get
/// straight-line tangential behavior.
const DOGLEG_EPS: f64 = 1e-9;

/// Path computation method selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMethod {
    /// Arithmetic mean of the two stations' inclination and azimuth
    AverageAngle,
    /// Mean of the two stations' unit tangent vectors
    BalancedTangential,
    /// Balanced tangential with dogleg ratio-factor correction
    #[default]
    MinimumCurvature,
}

/// Requested path computation method is not recognized.
#[derive(Debug, Error)]
#[error("unknown path computation method \"{name}\" (expected average_angle, balanced_tangential, or minimum_curvature)")]
pub struct UnknownMethodError {
    pub name: String,
}

impl FromStr for PathMethod {
    type Err = UnknownMethodError;

    /// Accepts the full names and the usual industry short forms
    /// (`aa`, `bt`, `mc`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average_angle" | "aa" => Ok(Self::AverageAngle),
            "balanced_tangential" | "bt" => Ok(Self::BalancedTangential),
            "minimum_curvature" | "mc" => Ok(Self::MinimumCurvature),
            _ => Err(UnknownMethodError { name: s.to_string() }),
        }
    }
}

impl fmt::Display for PathMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AverageAngle => "average_angle",
            Self::BalancedTangential => "balanced_tangential",
            Self::MinimumCurvature => "minimum_curvature",
        };
        f.write_str(name)
    }
}

/// The computed 3-D wellbore path.
///
/// One point per survey station, aligned index-for-index; the first point
/// is always the origin. Read-only — recompute from the survey to change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionLog {
    mds: Vec<f64>,
    points: Vec<PositionPoint>,
}

impl PositionLog {
    pub fn points(&self) -> &[PositionPoint] {
        &self.points
    }

    pub fn mds(&self) -> &[f64] {
        &self.mds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True vertical depths of all points, in station order.
    pub fn tvds(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.tvd).collect()
    }

    /// Last computed point (bottom of the surveyed path).
    pub fn last_point(&self) -> Option<&PositionPoint> {
        self.points.last()
    }
}

/// Station attitude in radians.
#[derive(Clone, Copy)]
struct Attitude {
    inc: f64,
    azi: f64,
}

impl Attitude {
    fn from_station(s: &SurveyStation) -> Self {
        Self {
            inc: s.inc.to_radians(),
            azi: s.azi.to_radians(),
        }
    }

    /// Unit tangent vector as (north, east, vertical) components.
    fn tangent(self) -> [f64; 3] {
        [
            self.inc.sin() * self.azi.cos(),
            self.inc.sin() * self.azi.sin(),
            self.inc.cos(),
        ]
    }
}

/// Integrate a normalized survey into a position log.
///
/// Deterministic: identical survey and method yield bit-identical output.
pub fn compute_position(survey: &DeviationSurvey, method: PathMethod) -> PositionLog {
    let stations = survey.stations();

    let mut mds = Vec::with_capacity(stations.len());
    let mut points = Vec::with_capacity(stations.len());

    // Integration is anchored at the surface origin.
    mds.push(stations[0].md);
    points.push(PositionPoint::ORIGIN);

    let mut northing = 0.0;
    let mut easting = 0.0;
    let mut tvd = 0.0;

    for pair in stations.windows(2) {
        let delta_md = pair[1].md - pair[0].md;
        let a = Attitude::from_station(&pair[0]);
        let b = Attitude::from_station(&pair[1]);

        let [dn, de, dv] = segment_displacement(a, b, delta_md, method);
        northing += dn;
        easting += de;
        tvd += dv;

        mds.push(pair[1].md);
        points.push(PositionPoint { northing, easting, tvd });
    }

    PositionLog { mds, points }
}

/// Incremental (north, east, vertical) displacement over one segment.
fn segment_displacement(a: Attitude, b: Attitude, delta_md: f64, method: PathMethod) -> [f64; 3] {
    match method {
        PathMethod::AverageAngle => {
            let mean = Attitude {
                inc: 0.5 * (a.inc + b.inc),
                azi: 0.5 * (a.azi + b.azi),
            };
            let t = mean.tangent();
            [delta_md * t[0], delta_md * t[1], delta_md * t[2]]
        }
        PathMethod::BalancedTangential => balanced_tangential(a, b, delta_md),
        PathMethod::MinimumCurvature => {
            let rf = ratio_factor(a, b);
            let [dn, de, dv] = balanced_tangential(a, b, delta_md);
            [dn * rf, de * rf, dv * rf]
        }
    }
}

/// Balanced tangential increment: each station's tangent contributes half.
fn balanced_tangential(a: Attitude, b: Attitude, delta_md: f64) -> [f64; 3] {
    let ta = a.tangent();
    let tb = b.tangent();
    let half = 0.5 * delta_md;
    [
        half * (ta[0] + tb[0]),
        half * (ta[1] + tb[1]),
        half * (ta[2] + tb[2]),
    ]
}

/// Dogleg angle between two station attitudes (radians).
///
/// `DL = arccos(cos(Ib − Ia) − sin(Ia)·sin(Ib)·(1 − cos(Ab − Aa)))`
///
/// Rounding can push the arccos argument a few ulps below -1 for
/// near-opposite attitudes, in which case this returns NaN;
/// [`ratio_factor`] absorbs that.
fn dogleg(a: Attitude, b: Attitude) -> f64 {
    let cos_dl =
        (b.inc - a.inc).cos() - a.inc.sin() * b.inc.sin() * (1.0 - (b.azi - a.azi).cos());
    cos_dl.acos()
}

/// Minimum-curvature ratio factor `RF = (2/DL)·tan(DL/2)`.
///
/// Zero dogleg (straight segment) substitutes [`DOGLEG_EPS`] before
/// dividing; a non-finite result (NaN dogleg from degenerate geometry)
/// falls back to 1.0, plain tangential behavior.
fn ratio_factor(a: Attitude, b: Attitude) -> f64 {
    let mut dl = dogleg(a, b);
    if dl == 0.0 {
        dl = DOGLEG_EPS;
    }
    let rf = (2.0 / dl) * (dl / 2.0).tan();
    if rf.is_finite() {
        rf
    } else {
        1.0
    }
}
