//! `KIND:VALUE` argument specs used by fixtures and the CLI.
//!
//! | Kind | Argument | Value |
//! |---|---|---|
//! | `c` | `Char` | one byte, or a number 0-255 |
//! | `d` | `Int` | signed 32-bit |
//! | `u` | `Ulong` | unsigned 64-bit |
//! | `s` | `Str` | rest of the spec, verbatim |
//! | `b` `x` `X` | `Uint` | unsigned 32-bit |
//! | `p` | `Ptr` | address |
//!
//! Numbers accept a `0x` prefix.

use std::str::FromStr;

use microprintf_core::Arg;

use crate::error::HarnessError;

/// Owned argument, parsed from a spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgSpec {
    Char(u8),
    Int(i32),
    Uint(u32),
    Ulong(u64),
    Str(Vec<u8>),
    Ptr(usize),
}

impl ArgSpec {
    /// Borrow as a core argument.
    #[must_use]
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            Self::Char(b) => Arg::Char(*b),
            Self::Int(v) => Arg::Int(*v),
            Self::Uint(v) => Arg::Uint(*v),
            Self::Ulong(v) => Arg::Ulong(*v),
            Self::Str(s) => Arg::Str(s),
            Self::Ptr(p) => Arg::Ptr(*p),
        }
    }

    /// Parse a list of specs.
    pub fn parse_all<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Self>, HarnessError> {
        specs.iter().map(|s| s.as_ref().parse()).collect()
    }
}

impl FromStr for ArgSpec {
    type Err = HarnessError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let bad = |reason| HarnessError::BadArgSpec {
            spec: spec.to_string(),
            reason,
        };
        let (kind, value) = spec.split_once(':').ok_or_else(|| bad("expected KIND:VALUE"))?;

        match kind {
            "s" => Ok(Self::Str(value.as_bytes().to_vec())),
            "c" => match value.as_bytes() {
                [b] => Ok(Self::Char(*b)),
                _ => parse_unsigned(value)
                    .and_then(|v| u8::try_from(v).ok())
                    .map(Self::Char)
                    .ok_or_else(|| bad("char must be one byte or 0-255")),
            },
            "d" => parse_signed(value)
                .and_then(|v| i32::try_from(v).ok())
                .map(Self::Int)
                .ok_or_else(|| bad("not a 32-bit signed integer")),
            "u" => parse_unsigned(value)
                .map(Self::Ulong)
                .ok_or_else(|| bad("not a 64-bit unsigned integer")),
            "b" | "x" | "X" => parse_unsigned(value)
                .and_then(|v| u32::try_from(v).ok())
                .map(Self::Uint)
                .ok_or_else(|| bad("not a 32-bit unsigned integer")),
            "p" => parse_unsigned(value)
                .and_then(|v| usize::try_from(v).ok())
                .map(Self::Ptr)
                .ok_or_else(|| bad("not an address")),
            _ => Err(bad("unknown kind")),
        }
    }
}

fn parse_unsigned(text: &str) -> Option<u64> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16).ok(),
        None => text.replace('_', "").parse().ok(),
    }
}

fn parse_signed(text: &str) -> Option<i64> {
    let text = text.trim();
    match text.strip_prefix('-') {
        Some(magnitude) => {
            let m = parse_unsigned(magnitude)?;
            0i64.checked_sub_unsigned(m)
        }
        None => parse_unsigned(text).and_then(|v| i64::try_from(v).ok()),
    }
}
