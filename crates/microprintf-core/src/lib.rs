//! # microprintf-core
//!
//! Minimal printf-style formatting for firmware that has no runtime library.
//!
//! A format string and an argument list are turned into a byte stream that is
//! delivered one byte at a time to a [`Sink`]: a caller-supplied handler (for
//! example a UART transmit routine), an unbounded buffer, or a bounded buffer
//! that truncates and reports overflow. No allocation is performed; numeric
//! conversions are materialized in a 256-byte stack scratch buffer.
//!
//! ```
//! use microprintf_core::sprintf;
//!
//! let mut buf = [0u8; 64];
//! let n = sprintf!(&mut buf, "Hello %s, you are %d", "Bob", 30).unwrap();
//! assert_eq!(&buf[..=n], b"Hello Bob, you are 30\0");
//! ```
//!
//! Directive grammar: `%[flag][width]conv` with `flag` one of `0`, `-`, `+`,
//! `width` a decimal literal, and `conv` one of `c d u s b x X p`.
//!
//! All formatting state lives in a per-call context, so concurrent and nested
//! calls never observe each other.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
mod macros;
pub mod printf;

pub use config::{Config, FormatMode, format_mode, set_format_mode};
pub use error::FormatError;
pub use printf::{
    Arg, ArgSource, BoundedSink, BufferSink, CallbackSink, Conversion, Formatter, Outcome,
    Sink, SliceArgs, format_to_bounded_buffer, format_to_buffer, format_to_sink,
};
