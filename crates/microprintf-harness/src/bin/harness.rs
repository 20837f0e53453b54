//! CLI entrypoint for the microprintf conformance harness.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use clap::{Parser, Subcommand};
use microprintf_core::{FormatMode, format_mode};
use microprintf_harness::diff::escape_bytes;
use microprintf_harness::fixtures::fixture_paths;
use microprintf_harness::runner::error_kind;
use microprintf_harness::{
    ArgSpec, ConformanceReport, FixtureSet, HarnessError, TestRunner, VerificationSummary, render,
};

/// Conformance tooling for microprintf.
#[derive(Debug, Parser)]
#[command(name = "microprintf-harness")]
#[command(about = "Conformance testing harness for microprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one format string and print the escaped output and count.
    Render {
        /// Format string.
        #[arg(long)]
        format: String,
        /// Argument as KIND:VALUE (kinds: c d u s b x X p). Repeatable.
        #[arg(long = "arg")]
        args: Vec<String>,
        /// Render into a bounded buffer of N bytes, terminator included.
        #[arg(long)]
        bounded: Option<usize>,
        /// `permissive` or `strict` (defaults to MICROPRINTF_MODE).
        #[arg(long)]
        mode: Option<String>,
    },
    /// Verify the engine against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    match Cli::parse().command {
        Command::Render {
            format,
            args,
            bounded,
            mode,
        } => render_command(&format, &args, bounded, mode.as_deref())?,
        Command::Verify { fixture, report } => {
            if !verify_command(&fixture, report.as_deref())? {
                return Err("fixture verification failed".into());
            }
        }
    }
    Ok(())
}

fn render_command(
    format: &str,
    args: &[String],
    bounded: Option<usize>,
    mode: Option<&str>,
) -> Result<(), HarnessError> {
    let mode = mode.map_or_else(format_mode, FormatMode::from_str_loose);
    let specs = ArgSpec::parse_all(args)?;
    let args: Vec<_> = specs.iter().map(ArgSpec::as_arg).collect();
    let rendered = render(format.as_bytes(), &args, bounded, mode);

    println!("{}", escape_bytes(&rendered.output));
    match rendered.result {
        Ok(n) => println!("count={n}"),
        Err(err) => {
            println!("error={}", error_kind(&err));
            eprintln!("{err}");
        }
    }
    if rendered.overflowed {
        println!("overflow=true");
    }
    Ok(())
}

/// Runs every fixture set under `dir` in both modes. Returns whether all
/// cases passed.
fn verify_command(dir: &Path, report: Option<&Path>) -> Result<bool, HarnessError> {
    let mut sets = Vec::new();
    for path in fixture_paths(dir)? {
        match FixtureSet::from_file(&path) {
            Ok(set) => {
                eprintln!("loaded {} ({} cases)", set.family, set.cases.len());
                sets.push(set);
            }
            Err(err) => eprintln!("skipping {}: {err}", path.display()),
        }
    }
    if sets.is_empty() {
        return Err(HarnessError::NoFixtures(dir.to_path_buf()));
    }

    let mut results = Vec::new();
    for mode in [FormatMode::Permissive, FormatMode::Strict] {
        let runner = TestRunner::new("fixture-verify", mode);
        results.extend(sets.iter().flat_map(|set| runner.run(set)));
    }
    let summary = VerificationSummary::from_results(results);

    for (mode, tally) in summary.by_mode() {
        eprintln!("{mode}: {} passed, {} failed", tally.passed, tally.failed);
    }
    for failure in summary.failures() {
        eprintln!(
            "FAIL {}/{} [{}]\n{}",
            failure.family,
            failure.case_name,
            failure.mode,
            failure.diff.as_deref().unwrap_or("")
        );
    }

    let all_passed = summary.all_passed();
    if let Some(path) = report {
        let doc = ConformanceReport {
            title: String::from("microprintf Conformance Report"),
            mode: String::from("permissive+strict"),
            timestamp: format!("{:?}", SystemTime::now()),
            summary,
        };
        write_file(path, doc.to_markdown())?;
        write_file(&path.with_extension("json"), doc.to_json())?;
        eprintln!("report written to {}", path.display());
    }
    Ok(all_passed)
}

fn write_file(path: &Path, contents: String) -> Result<(), HarnessError> {
    std::fs::write(path, contents).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })
}
