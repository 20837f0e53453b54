//! Typed arguments and argument sources.

use core::ffi::CStr;

use super::directive::Conversion;
use crate::config::FormatMode;

/// One formatting argument.
///
/// Each conversion expects one variant: `%c` → `Char`, `%d` → `Int`,
/// `%u` → `Ulong`, `%s` → `Str`, `%b`/`%x`/`%X` → `Uint`, `%p` → `Ptr`.
/// Permissive mode additionally accepts the integer promotions listed on
/// [`Operand::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Char(u8),
    Int(i32),
    Uint(u32),
    Ulong(u64),
    /// Rendered up to its first NUL byte.
    Str(&'a [u8]),
    Ptr(usize),
}

impl From<u8> for Arg<'_> {
    fn from(v: u8) -> Self {
        Self::Char(v)
    }
}

/// Single-byte engine: code points above U+00FF become `?`.
impl From<char> for Arg<'_> {
    fn from(v: char) -> Self {
        Self::Char(u8::try_from(v).unwrap_or(b'?'))
    }
}

impl From<i8> for Arg<'_> {
    fn from(v: i8) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<i16> for Arg<'_> {
    fn from(v: i16) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<u16> for Arg<'_> {
    fn from(v: u16) -> Self {
        Self::Uint(u32::from(v))
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Self::Uint(v)
    }
}

impl From<u64> for Arg<'_> {
    fn from(v: u64) -> Self {
        Self::Ulong(v)
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Self::Ulong(v as u64)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Self::Str(v.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(v: &'a [u8]) -> Self {
        Self::Str(v)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(v: &'a [u8; N]) -> Self {
        Self::Str(v)
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(v: &'a CStr) -> Self {
        Self::Str(v.to_bytes())
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(v: *const T) -> Self {
        Self::Ptr(v as usize)
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(v: *mut T) -> Self {
        Self::Ptr(v as usize)
    }
}

/// Supplies arguments to the formatter in directive order.
pub trait ArgSource<'a> {
    /// Argument for the next directive, or `None` when exhausted.
    ///
    /// `conversion` is what the directive will render; sources that carry
    /// untyped words (such as a C argument array) use it to decode.
    fn next_arg(&mut self, conversion: Conversion) -> Option<Arg<'a>>;

    /// Arguments not yet consumed.
    fn remaining(&self) -> usize;
}

/// Arguments from a slice, consumed front to back.
#[derive(Debug, Clone)]
pub struct SliceArgs<'s, 'a> {
    args: &'s [Arg<'a>],
    pos: usize,
}

impl<'s, 'a> SliceArgs<'s, 'a> {
    pub fn new(args: &'s [Arg<'a>]) -> Self {
        Self { args, pos: 0 }
    }
}

impl<'a> ArgSource<'a> for SliceArgs<'_, 'a> {
    fn next_arg(&mut self, _conversion: Conversion) -> Option<Arg<'a>> {
        let arg = *self.args.get(self.pos)?;
        self.pos += 1;
        Some(arg)
    }

    fn remaining(&self) -> usize {
        self.args.len() - self.pos
    }
}

/// An argument resolved against its conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand<'a> {
    Byte(u8),
    Signed(i32),
    Unsigned(u64),
    Text(&'a [u8]),
    Address(u64),
}

/// How an argument was matched to its conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Match {
    Exact,
    Promoted,
}

impl<'a> Operand<'a> {
    /// Match `arg` to `conversion`.
    ///
    /// Exact matches are always accepted. Permissive mode also accepts:
    /// - `%c` from `Int`/`Uint` (low byte)
    /// - `%d` from `Char`
    /// - `%u` from `Uint`/`Char`
    /// - `%b`/`%x`/`%X` from `Int` (two's-complement bits) or `Char`
    /// - `%p` from `Ulong`
    ///
    /// Strings and numbers never stand in for each other.
    pub(crate) fn resolve(
        arg: Arg<'a>,
        conversion: Conversion,
        mode: FormatMode,
    ) -> Option<(Self, Match)> {
        use Conversion as C;

        let exact = match (conversion, arg) {
            (C::Char, Arg::Char(b)) => Some(Self::Byte(b)),
            (C::SignedDecimal, Arg::Int(v)) => Some(Self::Signed(v)),
            (C::UnsignedDecimal, Arg::Ulong(v)) => Some(Self::Unsigned(v)),
            (C::Str, Arg::Str(s)) => Some(Self::Text(s)),
            (C::Binary | C::Hex | C::HexUpper, Arg::Uint(v)) => Some(Self::Unsigned(u64::from(v))),
            (C::Pointer, Arg::Ptr(p)) => Some(Self::Address(p as u64)),
            _ => None,
        };
        if let Some(operand) = exact {
            return Some((operand, Match::Exact));
        }
        if mode.is_strict() {
            return None;
        }

        let promoted = match (conversion, arg) {
            (C::Char, Arg::Int(v)) => Self::Byte(v as u8),
            (C::Char, Arg::Uint(v)) => Self::Byte(v as u8),
            (C::SignedDecimal, Arg::Char(b)) => Self::Signed(i32::from(b)),
            (C::UnsignedDecimal, Arg::Uint(v)) => Self::Unsigned(u64::from(v)),
            (C::UnsignedDecimal, Arg::Char(b)) => Self::Unsigned(u64::from(b)),
            (C::Binary | C::Hex | C::HexUpper, Arg::Int(v)) => Self::Unsigned(u64::from(v as u32)),
            (C::Binary | C::Hex | C::HexUpper, Arg::Char(b)) => Self::Unsigned(u64::from(b)),
            (C::Pointer, Arg::Ulong(v)) => Self::Address(v),
            _ => return None,
        };
        Some((promoted, Match::Promoted))
    }
}
