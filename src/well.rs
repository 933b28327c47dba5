//! Well aggregate: header + location + curve table
//!
//! The association root handed to downstream consumers. Holds the
//! identification header, the spatial location (with its survey and
//! position log), and the rectangular curve table, and forwards the
//! common depth queries so callers rarely need to reach inside.

use serde::{Deserialize, Serialize};

use crate::curve::{Curve, CurveError, CurveTable};
use crate::location::{DeviationOptions, Location};
use crate::survey::SurveyError;
use crate::types::{SurveyStation, WellHeader};

/// One well's log data: who it is, where it is, and what was measured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Well {
    pub header: WellHeader,
    pub location: Location,
    pub table: CurveTable,
}

impl Well {
    pub fn new(header: WellHeader, location: Location, table: CurveTable) -> Self {
        Self {
            header,
            location,
            table,
        }
    }

    /// Attach a deviation survey; see [`Location::add_deviation`].
    pub fn add_deviation(
        &mut self,
        raw: &[SurveyStation],
        options: DeviationOptions,
    ) -> Result<(), SurveyError> {
        self.location.add_deviation(raw, options)
    }

    pub fn add_curve(&mut self, curve: Curve) -> Result<(), CurveError> {
        self.table.add_curve(curve)
    }

    pub fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.table.curve(mnemonic)
    }

    /// MD → TVD through this well's depth converter (identity when the
    /// well has no directional survey).
    pub fn md_to_tvd(&self, md: f64) -> f64 {
        self.location.md_to_tvd(md)
    }

    /// TVD → MD through this well's depth converter.
    pub fn tvd_to_md(&self, tvd: f64) -> f64 {
        self.location.tvd_to_md(tvd)
    }

    /// The curve table's depth basis in true vertical depth.
    pub fn tvd_basis(&self) -> Vec<f64> {
        self.table.tvd_basis(&self.location.depth_converter())
    }
}
