//! Deviation survey validation and normalization
//!
//! Raw directional surveys arrive as (MD, inclination, azimuth) triples and
//! are rarely ready for integration as-is: they usually start below surface
//! (the first survey tool reading is taken some distance into the hole) and
//! often stop short of the well's total depth. Normalization anchors the
//! survey at a synthetic vertical surface station and, when a target TD is
//! supplied, extends or clips the last station to it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::SurveyStation;

/// A geometrically invalid survey that cannot be safely integrated.
///
/// Every variant carries the offending station index (into the raw input)
/// and value so the caller can locate the bad row.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("survey has {count} stations, need at least 2")]
    TooFewStations { count: usize },

    #[error("non-finite value at station {index}")]
    NonFinite { index: usize },

    #[error("negative measured depth {md} at station {index}")]
    NegativeDepth { index: usize, md: f64 },

    #[error("measured depth {md} at station {index} decreases from {prev_md}")]
    DepthDecreases { index: usize, md: f64, prev_md: f64 },

    #[error("inclination {inc}° at station {index} outside [0, 180]")]
    InclinationOutOfRange { index: usize, inc: f64 },

    #[error("azimuth {azi}° at station {index} outside [0, 360)")]
    AzimuthOutOfRange { index: usize, azi: f64 },
}

/// A validated, normalized deviation survey.
///
/// Invariants held by construction:
/// - at least 2 stations
/// - measured depth strictly increasing
/// - inclination in [0, 180], azimuth in [0, 360)
///
/// Immutable once built; re-normalize from raw samples to change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationSurvey {
    stations: Vec<SurveyStation>,
}

impl DeviationSurvey {
    /// Validate and normalize raw survey samples.
    ///
    /// Normalization steps, in order:
    /// 1. validate every sample (finite, md ≥ 0, angle ranges, depths
    ///    monotonically non-decreasing);
    /// 2. collapse consecutive equal-depth stations to the later one
    ///    (a zero-length segment carries no displacement);
    /// 3. if `target_td` is given and differs from the last md, overwrite
    ///    the last station's md with it, keeping that station's angles —
    ///    the last surveyed attitude is assumed to persist to TD;
    /// 4. if the first station is below surface (md > 0), prepend a
    ///    synthetic vertical surface station (0, 0, 0).
    pub fn normalize(
        raw: &[SurveyStation],
        target_td: Option<f64>,
    ) -> Result<Self, SurveyError> {
        validate(raw)?;

        let mut stations: Vec<SurveyStation> = Vec::with_capacity(raw.len() + 1);
        for (index, s) in raw.iter().enumerate() {
            if let Some(prev) = stations.last_mut() {
                if s.md == prev.md {
                    // Repeat reading at the same depth: the later station wins.
                    debug!(index, md = s.md, "collapsing duplicate-depth station");
                    *prev = *s;
                    continue;
                }
            }
            stations.push(*s);
        }

        if let Some(td) = target_td {
            let last_index = stations.len() - 1;
            if !td.is_finite() {
                return Err(SurveyError::NonFinite { index: last_index });
            }
            if td < 0.0 {
                return Err(SurveyError::NegativeDepth {
                    index: last_index,
                    md: td,
                });
            }
            let last = stations[last_index];
            if td != last.md {
                if last_index > 0 && td <= stations[last_index - 1].md {
                    return Err(SurveyError::DepthDecreases {
                        index: last_index,
                        md: td,
                        prev_md: stations[last_index - 1].md,
                    });
                }
                debug!(from = last.md, to = td, "adjusting last station md to target TD");
                stations[last_index].md = td;
            }
        }

        if stations[0].md > 0.0 {
            debug!(first_md = stations[0].md, "prepending synthetic surface station");
            stations.insert(0, SurveyStation::new(0.0, 0.0, 0.0));
        }

        if stations.len() < 2 {
            return Err(SurveyError::TooFewStations {
                count: stations.len(),
            });
        }

        Ok(Self { stations })
    }

    pub fn stations(&self) -> &[SurveyStation] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Measured depth of the last station (total surveyed depth).
    pub fn last_md(&self) -> f64 {
        // Non-empty by construction.
        self.stations[self.stations.len() - 1].md
    }

    /// Measured depths of all stations, in order.
    pub fn mds(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.md).collect()
    }
}

/// Check every raw sample before any normalization step runs.
fn validate(raw: &[SurveyStation]) -> Result<(), SurveyError> {
    if raw.len() < 2 {
        return Err(SurveyError::TooFewStations { count: raw.len() });
    }

    let mut prev_md: Option<f64> = None;
    for (index, s) in raw.iter().enumerate() {
        if !(s.md.is_finite() && s.inc.is_finite() && s.azi.is_finite()) {
            return Err(SurveyError::NonFinite { index });
        }
        if s.md < 0.0 {
            return Err(SurveyError::NegativeDepth { index, md: s.md });
        }
        if !(0.0..=180.0).contains(&s.inc) {
            return Err(SurveyError::InclinationOutOfRange { index, inc: s.inc });
        }
        if !(0.0..360.0).contains(&s.azi) {
            return Err(SurveyError::AzimuthOutOfRange { index, azi: s.azi });
        }
        if let Some(prev) = prev_md {
            if s.md < prev {
                return Err(SurveyError::DepthDecreases {
                    index,
                    md: s.md,
                    prev_md: prev,
                });
            }
        }
        prev_md = Some(s.md);
    }

    Ok(())
}
