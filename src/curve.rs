//! Rectangular well-log curve table
//!
//! The parsing collaborators hand the core a depth-indexed table: one
//! ascending measured-depth basis shared by every column, with numeric
//! (gamma ray, resistivity, ...) or categorical (lithology, formation
//! tops) values. The table stays rectangular by construction — every
//! column must match the basis row count.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::DepthConverter;

/// Curve table errors.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("curve \"{mnemonic}\" has {values} values, table basis has {rows} rows")]
    LengthMismatch {
        mnemonic: String,
        values: usize,
        rows: usize,
    },

    #[error("duplicate curve mnemonic \"{mnemonic}\"")]
    DuplicateMnemonic { mnemonic: String },
}

/// Column payload: continuous measurements or per-depth categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveValues {
    /// Numeric samples; NaN marks a null reading
    Numeric(Vec<f64>),
    /// Categorical labels; `None` marks a missing interval
    Categorical(Vec<Option<String>>),
}

impl CurveValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One log curve: a mnemonic plus a column of values on the table basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Curve mnemonic, e.g. "GR"
    pub mnemonic: String,
    /// Unit string, uninterpreted, e.g. "gAPI"
    #[serde(default)]
    pub unit: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    pub values: CurveValues,
}

/// Depth-indexed rectangular table of curves for one well.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurveTable {
    depths: Vec<f64>,
    curves: Vec<Curve>,
}

impl CurveTable {
    /// Start a table on an ascending measured-depth basis.
    pub fn new(depths: Vec<f64>) -> Self {
        Self {
            depths,
            curves: Vec::new(),
        }
    }

    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    pub fn rows(&self) -> usize {
        self.depths.len()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Add a column; rejects row-count mismatches and duplicate mnemonics.
    pub fn add_curve(&mut self, curve: Curve) -> Result<(), CurveError> {
        if curve.values.len() != self.depths.len() {
            return Err(CurveError::LengthMismatch {
                mnemonic: curve.mnemonic,
                values: curve.values.len(),
                rows: self.depths.len(),
            });
        }
        if self.curve(&curve.mnemonic).is_some() {
            return Err(CurveError::DuplicateMnemonic {
                mnemonic: curve.mnemonic,
            });
        }
        self.curves.push(curve);
        Ok(())
    }

    /// Look up a curve by mnemonic (case-insensitive, as log mnemonics
    /// arrive in mixed case from different vendors).
    pub fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|c| c.mnemonic.eq_ignore_ascii_case(mnemonic))
    }

    /// Rows with `top <= depth <= base`, as a new table.
    pub fn slice(&self, top: f64, base: f64) -> Self {
        let start = self.depths.partition_point(|&d| d < top);
        let end = self.depths.partition_point(|&d| d <= base);

        let depths = self.depths[start..end].to_vec();
        let curves = self
            .curves
            .iter()
            .map(|c| Curve {
                mnemonic: c.mnemonic.clone(),
                unit: c.unit.clone(),
                description: c.description.clone(),
                values: match &c.values {
                    CurveValues::Numeric(v) => CurveValues::Numeric(v[start..end].to_vec()),
                    CurveValues::Categorical(v) => {
                        CurveValues::Categorical(v[start..end].to_vec())
                    }
                },
            })
            .collect();

        Self { depths, curves }
    }

    /// The table's depth basis mapped to true vertical depth.
    pub fn tvd_basis(&self, converter: &DepthConverter) -> Vec<f64> {
        converter.md_to_tvd_many(&self.depths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CurveTable {
        let mut t = CurveTable::new(vec![1000.0, 1000.5, 1001.0, 1001.5]);
        t.add_curve(Curve {
            mnemonic: "GR".to_string(),
            unit: "gAPI".to_string(),
            description: String::new(),
            values: CurveValues::Numeric(vec![45.0, 52.0, 61.0, 58.0]),
        })
        .unwrap();
        t.add_curve(Curve {
            mnemonic: "LITH".to_string(),
            unit: String::new(),
            description: "lithology".to_string(),
            values: CurveValues::Categorical(vec![
                Some("shale".to_string()),
                Some("shale".to_string()),
                None,
                Some("sand".to_string()),
            ]),
        })
        .unwrap();
        t
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let t = table();
        assert!(t.curve("gr").is_some());
        assert!(t.curve("GR").is_some());
        assert!(t.curve("RHOB").is_none());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut t = table();
        let err = t
            .add_curve(Curve {
                mnemonic: "RHOB".to_string(),
                unit: "g/cm3".to_string(),
                description: String::new(),
                values: CurveValues::Numeric(vec![2.3, 2.4]),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            CurveError::LengthMismatch { values: 2, rows: 4, .. }
        ));
    }

    #[test]
    fn test_duplicate_mnemonic_rejected() {
        let mut t = table();
        let err = t
            .add_curve(Curve {
                mnemonic: "gr".to_string(),
                unit: String::new(),
                description: String::new(),
                values: CurveValues::Numeric(vec![0.0; 4]),
            })
            .unwrap_err();
        assert!(matches!(err, CurveError::DuplicateMnemonic { .. }));
    }

    #[test]
    fn test_slice_keeps_table_rectangular() {
        let t = table().slice(1000.5, 1001.0);
        assert_eq!(t.depths(), &[1000.5, 1001.0]);
        for c in t.curves() {
            assert_eq!(c.values.len(), 2, "curve {} lost alignment", c.mnemonic);
        }
        match &t.curve("LITH").unwrap().values {
            CurveValues::Categorical(v) => assert_eq!(v[1], None),
            CurveValues::Numeric(_) => panic!("LITH should stay categorical"),
        }
    }

    #[test]
    fn test_tvd_basis_identity_without_survey() {
        let t = table();
        let tvds = t.tvd_basis(&DepthConverter::identity());
        assert_eq!(tvds, t.depths());
    }
}
