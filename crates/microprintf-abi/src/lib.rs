// Every export takes raw pointers from C callers; the contract is stated once
// per function in its doc comment.
#![allow(clippy::missing_safety_doc)]
//! # microprintf-abi
//!
//! `extern "C"` boundary for microprintf.
//!
//! C has no portable way to hand a `va_list` to stable Rust, so arguments are
//! passed as an array of 64-bit words, one per directive, decoded according to
//! the directive's conversion byte:
//!
//! | Conversion | Word interpretation |
//! |---|---|
//! | `c` | low 8 bits |
//! | `d` | low 32 bits, signed |
//! | `u` | all 64 bits |
//! | `s` | `const char *`, NULL renders `(null)` |
//! | `b` `x` `X` | low 32 bits |
//! | `p` | address |
//!
//! ```text
//! C caller -> micro_*printf (this crate) -> microprintf_core::Formatter -> sink
//! ```

pub mod stdio_abi;

pub use stdio_abi::{OutputHandler, RawBufferSink, WordArgs};
