//! Observation comparison and verification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diff::render_diff;

/// The observable facts of one formatting call, as far as a case pins them
/// down. `count` and `overflow` are only compared when the case sets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observation {
    /// Escaped content bytes.
    pub output: String,
    /// Error kind, or `none`.
    pub error: String,
    /// Returned count; -1 stands for an error return.
    pub count: Option<i64>,
    pub overflow: Option<bool>,
}

impl Observation {
    /// One `key=value` line per compared field.
    #[must_use]
    pub fn to_lines(&self) -> String {
        let mut lines = vec![
            format!("output={}", self.output),
            format!("error={}", self.error),
        ];
        if let Some(count) = self.count {
            lines.push(format!("count={count}"));
        }
        if let Some(overflow) = self.overflow {
            lines.push(format!("overflow={overflow}"));
        }
        lines.join("\n")
    }
}

/// Result of verifying a single fixture case in one mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub case_name: String,
    pub family: String,
    /// `permissive` or `strict`.
    pub mode: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    /// Line diff, present only on failure.
    pub diff: Option<String>,
}

impl VerificationResult {
    /// Compare two observations of the same case.
    #[must_use]
    pub fn compare(
        case_name: &str,
        family: &str,
        mode: &str,
        expected: &Observation,
        actual: &Observation,
    ) -> Self {
        let expected = expected.to_lines();
        let actual = actual.to_lines();
        let passed = expected == actual;
        Self {
            case_name: case_name.to_string(),
            family: family.to_string(),
            mode: mode.to_string(),
            passed,
            diff: (!passed).then(|| render_diff(&expected, &actual)),
            expected,
            actual,
        }
    }

    /// A case that could not be run because the fixture itself is invalid.
    #[must_use]
    pub fn broken_fixture(case_name: &str, family: &str, mode: &str, reason: &str) -> Self {
        let actual = format!("fixture error: {reason}");
        Self {
            case_name: case_name.to_string(),
            family: family.to_string(),
            mode: mode.to_string(),
            passed: false,
            diff: Some(actual.clone()),
            expected: String::from("valid fixture"),
            actual,
        }
    }
}

/// Pass/fail counts for one mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTally {
    pub passed: usize,
    pub failed: usize,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &VerificationResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Counts split by the mode each result ran in.
    #[must_use]
    pub fn by_mode(&self) -> BTreeMap<&str, ModeTally> {
        let mut tallies: BTreeMap<&str, ModeTally> = BTreeMap::new();
        for r in &self.results {
            let tally = tallies.entry(r.mode.as_str()).or_default();
            if r.passed {
                tally.passed += 1;
            } else {
                tally.failed += 1;
            }
        }
        tallies
    }
}
