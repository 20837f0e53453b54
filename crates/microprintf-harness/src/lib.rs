//! Conformance harness for microprintf.
//!
//! This crate provides:
//! - Fixture sets: JSON cases pairing a format string and typed arguments
//!   with the expected bytes, count and error
//! - A runner that renders each case through the core engine in permissive
//!   and strict mode
//! - Markdown and JSON reports

#![forbid(unsafe_code)]

pub mod args;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod verify;

pub use args::ArgSpec;
pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::{Rendered, TestRunner, render};
pub use verify::{ModeTally, Observation, VerificationResult, VerificationSummary};
