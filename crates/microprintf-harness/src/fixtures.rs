//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

fn default_mode() -> String {
    String::from("both")
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Format string. Only the bytes up to the first NUL are used.
    pub format: String,
    /// Arguments as `KIND:VALUE` specs.
    #[serde(default)]
    pub args: Vec<String>,
    /// Render into a bounded buffer of this many bytes (terminator
    /// included) instead of an unbounded sink.
    #[serde(default)]
    pub bounded: Option<usize>,
    /// `permissive`, `strict` or `both`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Expected output, escaped as by [`crate::diff::escape_bytes`].
    pub expected_output: String,
    /// Expected return count (checked when the call succeeds).
    #[serde(default)]
    pub expected_count: Option<usize>,
    /// Expected overflow flag for bounded cases.
    #[serde(default)]
    pub expected_overflow: Option<bool>,
    /// Expected error kind (`missing_argument`, `argument_mismatch`,
    /// `unknown_conversion`, `dangling_percent`, `unused_arguments`).
    #[serde(default)]
    pub expected_error: Option<String>,
}

/// A collection of fixture cases for one directive family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name, e.g. `printf/core`.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// Sorted `*.json` paths in `dir`.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let entries = std::fs::read_dir(dir).map_err(|source| HarnessError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}
