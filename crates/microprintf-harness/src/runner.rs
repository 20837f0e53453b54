//! Test execution engine.

use log::debug;
use microprintf_core::{
    Arg, BoundedSink, CallbackSink, Config, FormatError, FormatMode, Formatter, SliceArgs,
};

use crate::args::ArgSpec;
use crate::diff::escape_bytes;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::{Observation, VerificationResult};

/// Everything observable about one formatting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Content bytes delivered, terminator excluded.
    pub output: Vec<u8>,
    /// Return value of the call.
    pub result: Result<usize, FormatError>,
    /// Whether a bounded buffer truncated.
    pub overflowed: bool,
}

/// Render `format` once, into a bounded buffer of `bounded` bytes when given,
/// otherwise into a callback sink.
#[must_use]
pub fn render(
    format: &[u8],
    args: &[Arg<'_>],
    bounded: Option<usize>,
    mode: FormatMode,
) -> Rendered {
    let formatter = Formatter::new(Config::new(mode));
    let mut source = SliceArgs::new(args);

    match bounded {
        Some(limit) => {
            let mut buf = vec![0u8; limit];
            let mut sink = BoundedSink::new(&mut buf, limit);
            let result = formatter.format(&mut sink, format, &mut source);
            let written = sink.position();
            let overflowed = sink.overflowed();
            buf.truncate(written);
            Rendered {
                output: buf,
                result: result.map(|outcome| outcome.written),
                overflowed,
            }
        }
        None => {
            let mut output = Vec::new();
            let mut sink = CallbackSink::new(|b| output.push(b));
            let result = formatter.format(&mut sink, format, &mut source);
            // The callback sink also receives the terminator.
            if output.last() == Some(&0) {
                output.pop();
            }
            Rendered {
                output,
                result: result.map(|outcome| outcome.written),
                overflowed: false,
            }
        }
    }
}

/// Stable name of an error kind, as used in fixtures.
#[must_use]
pub fn error_kind(err: &FormatError) -> &'static str {
    match err {
        FormatError::MissingArgument { .. } => "missing_argument",
        FormatError::ArgumentMismatch { .. } => "argument_mismatch",
        FormatError::UnknownConversion { .. } => "unknown_conversion",
        FormatError::DanglingPercent { .. } => "dangling_percent",
        FormatError::UnusedArguments { .. } => "unused_arguments",
    }
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Mode being tested.
    pub mode: FormatMode,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: FormatMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all fixtures in a set that apply to this runner's mode.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        let mode = self.mode.as_str();
        fixture_set
            .cases
            .iter()
            .filter(|case| mode_matches(self.mode, &case.mode))
            .map(|case| {
                debug!("{}: running {} ({mode})", self.campaign, case.name);
                match ArgSpec::parse_all(&case.args) {
                    Ok(specs) => {
                        let (expected, actual) = observe(case, &specs, self.mode);
                        VerificationResult::compare(
                            &case.name,
                            &fixture_set.family,
                            mode,
                            &expected,
                            &actual,
                        )
                    }
                    Err(err) => VerificationResult::broken_fixture(
                        &case.name,
                        &fixture_set.family,
                        mode,
                        &err.to_string(),
                    ),
                }
            })
            .collect()
    }
}

fn mode_matches(active: FormatMode, case_mode: &str) -> bool {
    case_mode.eq_ignore_ascii_case("both") || case_mode.eq_ignore_ascii_case(active.as_str())
}

/// Expected and actual observations of a case. Count and overflow are only
/// observed when the case pins them down.
fn observe(
    case: &FixtureCase,
    specs: &[ArgSpec],
    mode: FormatMode,
) -> (Observation, Observation) {
    let args: Vec<Arg<'_>> = specs.iter().map(ArgSpec::as_arg).collect();
    let rendered = render(case.format.as_bytes(), &args, case.bounded, mode);

    let expected = Observation {
        output: case.expected_output.clone(),
        error: case.expected_error.clone().unwrap_or_else(|| String::from("none")),
        count: case.expected_count.map(|n| n as i64),
        overflow: case.expected_overflow,
    };
    let actual = Observation {
        output: escape_bytes(&rendered.output),
        error: rendered.result.as_ref().err().map_or("none", error_kind).to_string(),
        count: case.expected_count.map(|_| match &rendered.result {
            Ok(n) => *n as i64,
            Err(_) => -1,
        }),
        overflow: case.expected_overflow.map(|_| rendered.overflowed),
    };
    (expected, actual)
}
