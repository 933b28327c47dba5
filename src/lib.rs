//! wellpath: well-log core with deviation-survey position solving
//!
//! Manages well-log data for one well: a rectangular curve table, the
//! well's header and spatial location, and a 3-D wellbore path derived
//! from a directional survey.
//!
//! ## Architecture
//!
//! - **Deviation Survey**: validation and normalization of raw
//!   (MD, inclination, azimuth) samples — surface padding, target-TD
//!   extension
//! - **Position Solver**: station-to-station closed-form integration
//!   (average angle, balanced tangential, minimum curvature) producing a
//!   position log
//! - **Depth Conversion**: piecewise-linear MD ↔ TVD interpolators built
//!   from the position log
//! - **Well / Location / Curve Table**: the owning entities that tie the
//!   pieces to one well
//!
//! File-format parsing, CRS interpretation, plotting, and reporting are
//! external collaborators; this crate exchanges plain numeric arrays with
//! them.

pub mod config;
pub mod convert;
pub mod curve;
pub mod loader;
pub mod location;
pub mod position;
pub mod survey;
pub mod types;
pub mod well;

// Re-export well configuration
pub use config::WellConfig;

// Re-export commonly used types
pub use types::{PositionPoint, SurveyStation, WellHeader};

// Re-export the survey / solver core
pub use position::{compute_position, PathMethod, PositionLog, UnknownMethodError};
pub use survey::{DeviationSurvey, SurveyError};

// Re-export depth conversion
pub use convert::{DepthConverter, LinearInterpolator};

// Re-export the owning entities
pub use curve::{Curve, CurveError, CurveTable, CurveValues};
pub use location::{DeviationOptions, Location};
pub use well::Well;

// Re-export the survey file loader
pub use loader::{load_survey, LoaderError};
