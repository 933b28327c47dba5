//! Shared data structures for the well-log core
//!
//! These are the plain-data types exchanged with the external collaborators
//! (file parsers, CRS handlers, plotting): survey stations going in,
//! position points coming out, and the well header that identifies whose
//! data this is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One directional-survey sample.
///
/// Angles are in degrees; measured depth is in whatever linear unit the
/// caller's dataset uses (metres or feet) — units must be consistent
/// across a survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyStation {
    /// Measured depth along the wellbore from the reference point
    pub md: f64,
    /// Inclination from vertical (degrees, 0-180)
    pub inc: f64,
    /// Azimuth from north (degrees, 0 inclusive to 360 exclusive)
    pub azi: f64,
}

impl SurveyStation {
    pub const fn new(md: f64, inc: f64, azi: f64) -> Self {
        Self { md, inc, azi }
    }
}

/// One cumulative 3-D wellbore offset, aligned index-for-index with the
/// stations of the survey it was computed from.
///
/// Offsets are relative to the surface reference point, in the same linear
/// unit as the survey's measured depths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionPoint {
    /// North offset (positive = north)
    pub northing: f64,
    /// East offset (positive = east)
    pub easting: f64,
    /// True vertical depth (positive = down)
    pub tvd: f64,
}

impl PositionPoint {
    pub const ORIGIN: Self = Self {
        northing: 0.0,
        easting: 0.0,
        tvd: 0.0,
    };
}

/// Well identification header.
///
/// Carried alongside the curve table and location so downstream consumers
/// (reports, project aggregation) can attribute the data. All fields are
/// optional free text except the name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellHeader {
    /// Well name, e.g. "15/9-F-9 A"
    #[serde(default)]
    pub name: String,
    /// Unique well identifier (UWI / API number)
    #[serde(default)]
    pub uwi: String,
    /// Field name
    #[serde(default)]
    pub field: String,
    /// Operating company
    #[serde(default)]
    pub operator: String,
    /// Spud date, if known
    #[serde(default)]
    pub spud_date: Option<NaiveDate>,
    /// Kelly bushing elevation above datum (metres)
    #[serde(default)]
    pub kb_elevation_m: Option<f64>,
}
