//! Delimited-text deviation survey loader
//!
//! Survey listings arrive as plain text exported from directional-drilling
//! software: three numeric columns (MD, inclination, azimuth), delimited by
//! commas, semicolons, tabs, or whitespace, usually with a descriptive
//! header row and sometimes `#` comment lines. The loader skips header and
//! comment lines and reports malformed data rows with their line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::SurveyStation;

/// Survey file reading errors.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected three numeric columns (md inc azi), got \"{content}\"")]
    BadRow { line: usize, content: String },

    #[error("no survey rows found in {path}")]
    Empty { path: String },
}

/// Read raw survey stations from a delimited text file.
///
/// Lines that are blank or start with `#` are skipped anywhere. Lines that
/// fail numeric parsing *before* the first data row are treated as header
/// rows and skipped; after data has started, a malformed row is an error
/// carrying its 1-based line number.
pub fn load_survey(path: impl AsRef<Path>) -> Result<Vec<SurveyStation>, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut stations = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| LoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_row(trimmed) {
            Some(station) => stations.push(station),
            None if stations.is_empty() => {
                debug!(line = line_no, content = trimmed, "skipping header line");
            }
            None => {
                return Err(LoaderError::BadRow {
                    line: line_no,
                    content: trimmed.to_string(),
                });
            }
        }
    }

    if stations.is_empty() {
        return Err(LoaderError::Empty {
            path: path.display().to_string(),
        });
    }

    debug!(path = %path.display(), stations = stations.len(), "survey loaded");
    Ok(stations)
}

/// Parse one data row into a station; `None` if the first three columns
/// are not all numeric.
fn parse_row(line: &str) -> Option<SurveyStation> {
    let mut cols = line
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|tok| !tok.is_empty());

    let md = cols.next()?.parse::<f64>().ok()?;
    let inc = cols.next()?.parse::<f64>().ok()?;
    let azi = cols.next()?.parse::<f64>().ok()?;

    // Extra columns (dogleg severity, tool face, comments) are common in
    // exported listings; take the first three, ignore the rest.
    if cols.next().is_some() {
        warn!("survey row has more than three columns, extras ignored");
    }

    Some(SurveyStation::new(md, inc, azi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_loads_comma_delimited_with_header() {
        let f = write_file("MD,INC,AZI\n0,0,0\n500,30,45\n1000,45,90\n");
        let stations = load_survey(f.path()).unwrap();
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[1], SurveyStation::new(500.0, 30.0, 45.0));
    }

    #[test]
    fn test_loads_whitespace_delimited_with_comments() {
        let f = write_file("# exported 2024-03-01\nMD   INC   AZI\n0 0 0\n250.5  12.5  180\n");
        let stations = load_survey(f.path()).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[1].md, 250.5);
        assert_eq!(stations[1].azi, 180.0);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let f = write_file("0,0,0,0.0\n500,30,45,1.2\n");
        let stations = load_survey(f.path()).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[1].inc, 30.0);
    }

    #[test]
    fn test_malformed_row_after_data_reports_line() {
        let f = write_file("MD,INC,AZI\n0,0,0\n500,thirty,45\n");
        match load_survey(f.path()).unwrap_err() {
            LoaderError::BadRow { line, content } => {
                assert_eq!(line, 3);
                assert!(content.contains("thirty"));
            }
            other => panic!("expected BadRow, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let f = write_file("# only comments here\n");
        assert!(matches!(load_survey(f.path()).unwrap_err(), LoaderError::Empty { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_survey("/nonexistent/survey.csv").unwrap_err(),
            LoaderError::Io { .. }
        ));
    }
}
