//! Formatting errors.
//!
//! Bounded-buffer overflow is not an error: it stops formatting early and is
//! reported through [`Outcome::overflowed`](crate::Outcome). Everything here
//! is a mismatch between the format string and its arguments.

use crate::printf::Conversion;

/// Why a formatting call was abandoned.
///
/// Bytes emitted before the failure stay delivered, and buffer sinks are still
/// NUL-terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A directive needed an argument but the list was exhausted.
    #[error("missing argument #{index}")]
    MissingArgument { index: usize },
    /// The argument at `index` cannot be rendered by `conversion`.
    #[error("argument #{index} cannot be rendered by %{conversion}")]
    ArgumentMismatch { index: usize, conversion: Conversion },
    /// `%` followed by a byte that is not a conversion (strict mode only).
    #[error("unknown conversion byte 0x{byte:02x} at offset {offset}")]
    UnknownConversion { offset: usize, byte: u8 },
    /// The format string ended inside a directive (strict mode only).
    #[error("format string ends inside the directive at offset {offset}")]
    DanglingPercent { offset: usize },
    /// Arguments were left over once the format string was exhausted
    /// (strict mode only).
    #[error("{count} argument(s) left unused")]
    UnusedArguments { count: usize },
}
