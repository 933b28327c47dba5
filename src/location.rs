//! Well spatial location and wellbore path ownership
//!
//! `Location` owns the survey / position-log pair for one well: the caller
//! supplies raw deviation samples, the location normalizes them, integrates
//! the 3-D path, and answers MD ↔ TVD queries. Recomputation is explicit —
//! re-adding a deviation replaces the stored survey and its derived log
//! wholesale, so data flow stays traceable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::DepthConverter;
use crate::position::{compute_position, PathMethod, PositionLog};
use crate::survey::{DeviationSurvey, SurveyError};
use crate::types::{PositionPoint, SurveyStation};

/// Options for [`Location::add_deviation`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeviationOptions {
    /// Path integration method (industry default: minimum curvature)
    #[serde(default)]
    pub method: PathMethod,
    /// Target total depth; extends or clips the last station when it
    /// differs from the last surveyed depth
    #[serde(default)]
    pub target_td: Option<f64>,
    /// Store the normalized survey (true, default) or keep the caller's
    /// raw samples and normalize only a working copy (false)
    #[serde(default = "default_update_survey")]
    pub update_survey: bool,
}

const fn default_update_survey() -> bool {
    true
}

impl Default for DeviationOptions {
    fn default() -> Self {
        Self {
            method: PathMethod::default(),
            target_td: None,
            update_survey: true,
        }
    }
}

/// Spatial context of one well: surface coordinates plus the deviation
/// survey and derived position log, when a directional survey exists.
///
/// The CRS is carried as an opaque string; parsing it is an external
/// collaborator's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// Surface latitude (decimal degrees), if known
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Surface longitude (decimal degrees), if known
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Coordinate reference system identifier, uninterpreted
    #[serde(default)]
    pub crs: String,

    /// Stored survey samples: normalized or raw per
    /// [`DeviationOptions::update_survey`]
    #[serde(default)]
    deviation: Option<Vec<SurveyStation>>,
    /// Path computed from the (normalized) survey
    #[serde(default)]
    position_log: Option<PositionLog>,
    /// Method the current position log was computed with
    #[serde(default)]
    method: PathMethod,
}

impl Location {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>, crs: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            crs: crs.into(),
            ..Self::default()
        }
    }

    /// Attach a deviation survey and (re)compute the position log.
    ///
    /// Replaces any previously stored survey and log. The raw samples are
    /// normalized (surface padding, optional target-TD adjustment), the
    /// path is integrated with the requested method, and the depth
    /// converter is derived from the new log.
    pub fn add_deviation(
        &mut self,
        raw: &[SurveyStation],
        options: DeviationOptions,
    ) -> Result<(), SurveyError> {
        let survey = DeviationSurvey::normalize(raw, options.target_td)?;
        let log = compute_position(&survey, options.method);
        debug!(
            stations = survey.len(),
            method = %options.method,
            last_md = survey.last_md(),
            "deviation attached, position log recomputed"
        );

        self.deviation = Some(if options.update_survey {
            survey.stations().to_vec()
        } else {
            raw.to_vec()
        });
        self.position_log = Some(log);
        self.method = options.method;
        Ok(())
    }

    /// Stored survey samples, if a deviation has been added.
    pub fn deviation(&self) -> Option<&[SurveyStation]> {
        self.deviation.as_deref()
    }

    /// Computed position log, if a deviation has been added.
    pub fn position_log(&self) -> Option<&PositionLog> {
        self.position_log.as_ref()
    }

    /// Method the current position log was computed with.
    pub fn method(&self) -> PathMethod {
        self.method
    }

    /// The 3-D path points, or an empty slice without a survey.
    pub fn trajectory(&self) -> &[PositionPoint] {
        self.position_log.as_ref().map_or(&[], PositionLog::points)
    }

    /// Depth converter for this well, built from the current position
    /// log's (md, tvd) columns; the identity when no survey exists.
    pub fn depth_converter(&self) -> DepthConverter {
        self.position_log
            .as_ref()
            .map_or_else(DepthConverter::identity, DepthConverter::from_position_log)
    }

    /// Measured depth → true vertical depth. Identity without a survey.
    pub fn md_to_tvd(&self, md: f64) -> f64 {
        self.depth_converter().md_to_tvd(md)
    }

    /// True vertical depth → measured depth. Identity without a survey.
    pub fn tvd_to_md(&self, tvd: f64) -> f64 {
        self.depth_converter().tvd_to_md(tvd)
    }
}
