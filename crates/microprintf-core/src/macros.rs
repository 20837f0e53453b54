//! Variadic-style front ends. Each trailing expression is converted with
//! [`Arg::from`](crate::Arg), so `printf!(tx, "%d", 5)` needs no wrapping.

/// Format to a byte handler; see [`format_to_sink`](crate::format_to_sink).
#[macro_export]
macro_rules! printf {
    ($handler:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_to_sink($handler, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}

/// Format into a buffer; see [`format_to_buffer`](crate::format_to_buffer).
#[macro_export]
macro_rules! sprintf {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_to_buffer($buf, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}

/// Format into at most `n` bytes of a buffer; see
/// [`format_to_bounded_buffer`](crate::format_to_bounded_buffer).
#[macro_export]
macro_rules! snprintf {
    ($buf:expr, $n:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_to_bounded_buffer($buf, $n, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}
