//! Well configuration
//!
//! TOML configuration for the command-line tools: well identity plus solver
//! defaults. Every field has a default, so a missing or partial file never
//! blocks a run.
//!
//! ## Loading order
//!
//! 1. `WELLPATH_CONFIG` environment variable (path to a TOML file)
//! 2. `wellpath.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The library API takes explicit options; this config only feeds the CLI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::position::PathMethod;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration: `[well]` identity and `[solver]` defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellConfig {
    #[serde(default)]
    pub well: WellInfo,

    #[serde(default)]
    pub solver: SolverConfig,
}

/// Well / dataset identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellInfo {
    /// Well name used in output headers
    #[serde(default)]
    pub name: String,
    /// Unique well identifier
    #[serde(default)]
    pub uwi: String,
    /// Field name
    #[serde(default)]
    pub field: String,
    /// Operating company
    #[serde(default)]
    pub operator: String,
}

/// Position solver defaults, overridable per run on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Default path computation method
    #[serde(default)]
    pub method: PathMethod,
    /// Target total depth applied when the survey stops short
    #[serde(default)]
    pub target_td: Option<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: PathMethod::MinimumCurvature,
            target_td: None,
        }
    }
}

impl WellConfig {
    /// Load configuration using the standard search order:
    /// 1. `WELLPATH_CONFIG` environment variable
    /// 2. `./wellpath.toml`
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("WELLPATH_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "loaded config from WELLPATH_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "bad config from WELLPATH_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WELLPATH_CONFIG points to non-existent file, falling back");
            }
        }

        let local = Path::new("wellpath.toml");
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(config) => {
                    info!(path = %local.display(), "loaded local config");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "bad wellpath.toml, using defaults");
                }
            }
        }

        Self::default()
    }

    /// Load and parse one TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
