//! Format directive parser.
//!
//! Grammar: `%[flag][width]conv`
//! - `flag`: at most one of `0` (zero-pad), `-` (left-justify), `+` (pad with
//!   trailing spaces). Only the byte directly after `%` can be a flag.
//! - `width`: unsigned decimal literal, saturating at `usize::MAX`.
//! - `conv`: one of `c d u s b x X p`.
//!
//! There is no `%%` escape. A format string ends at its first NUL byte.

use core::fmt;

/// Padding policy selected by a directive's flag byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Padding {
    /// No flag: right-justify with leading spaces when a width is given.
    #[default]
    Default,
    /// `0`: sign or prefix first, then zeros, then digits.
    Zero,
    /// `-`: text first, then spaces.
    Left,
    /// `+`: text first, then trailing spaces.
    Right,
}

impl Padding {
    fn from_flag(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(Self::Zero),
            b'-' => Some(Self::Left),
            b'+' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Conversion kind selected by a directive's final byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `c`: one byte.
    Char,
    /// `d`: 32-bit signed decimal.
    SignedDecimal,
    /// `u`: 64-bit unsigned decimal.
    UnsignedDecimal,
    /// `s`: byte string up to its first NUL.
    Str,
    /// `b`: 32-bit unsigned binary.
    Binary,
    /// `x`: 32-bit unsigned hex, lowercase digits.
    Hex,
    /// `X`: 32-bit unsigned hex, uppercase digits.
    HexUpper,
    /// `p`: `0x` followed by 64-bit lowercase hex.
    Pointer,
}

impl Conversion {
    /// Map a conversion byte to its kind.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'c' => Some(Self::Char),
            b'd' => Some(Self::SignedDecimal),
            b'u' => Some(Self::UnsignedDecimal),
            b's' => Some(Self::Str),
            b'b' => Some(Self::Binary),
            b'x' => Some(Self::Hex),
            b'X' => Some(Self::HexUpper),
            b'p' => Some(Self::Pointer),
            _ => None,
        }
    }

    /// The byte that selects this conversion.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Char => b'c',
            Self::SignedDecimal => b'd',
            Self::UnsignedDecimal => b'u',
            Self::Str => b's',
            Self::Binary => b'b',
            Self::Hex => b'x',
            Self::HexUpper => b'X',
            Self::Pointer => b'p',
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, char::from(self.as_byte()))
    }
}

/// A parsed `%...` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub padding: Padding,
    /// Minimum field width; 0 means unspecified.
    pub width: usize,
    pub conversion: Conversion,
}

/// Why the bytes after a `%` do not form a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malformed {
    /// Offending byte, relative to the byte after `%`.
    pub position: usize,
    /// The unrecognized byte, or `None` when the format string ended.
    pub byte: Option<u8>,
}

/// Parse a single directive.
///
/// `fmt` starts at the first byte AFTER `%`. Returns the directive and the
/// number of bytes it spans (counted from `fmt[0]`).
pub fn parse_directive(fmt: &[u8]) -> Result<(Directive, usize), Malformed> {
    let mut pos = 0;

    // --- flag ---
    let padding = match fmt.first().copied().and_then(Padding::from_flag) {
        Some(padding) => {
            pos += 1;
            padding
        }
        None => Padding::Default,
    };

    // --- width ---
    let start = pos;
    while pos < fmt.len() && fmt[pos].is_ascii_digit() {
        pos += 1;
    }
    let width = parse_decimal(&fmt[start..pos]);

    // --- conversion ---
    let Some(&byte) = fmt.get(pos) else {
        return Err(Malformed {
            position: pos,
            byte: None,
        });
    };
    let Some(conversion) = Conversion::from_byte(byte) else {
        return Err(Malformed {
            position: pos,
            byte: Some(byte),
        });
    };

    Ok((
        Directive {
            padding,
            width,
            conversion,
        },
        pos + 1,
    ))
}

fn parse_decimal(digits: &[u8]) -> usize {
    digits.iter().fold(0_usize, |acc, &d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    })
}

/// A piece of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Bytes to forward verbatim.
    Literal(&'a [u8]),
    /// A well-formed directive.
    Directive(Directive),
    /// A `%` that does not start a directive. Scanning resumes at the byte
    /// after the `%`.
    Malformed(Malformed),
}

/// Iterator over the segments of a format string, yielding each segment with
/// the byte offset where it starts.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    fmt: &'a [u8],
    pos: usize,
}

impl<'a> Segments<'a> {
    /// Segments of `fmt` up to its first NUL byte.
    #[must_use]
    pub fn new(fmt: &'a [u8]) -> Self {
        let end = fmt.iter().position(|&b| b == 0).unwrap_or(fmt.len());
        Self {
            fmt: &fmt[..end],
            pos: 0,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, Segment<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = self.fmt.get(start..).filter(|rest| !rest.is_empty())?;

        if rest[0] != b'%' {
            let len = rest.iter().position(|&b| b == b'%').unwrap_or(rest.len());
            self.pos += len;
            return Some((start, Segment::Literal(&rest[..len])));
        }

        match parse_directive(&rest[1..]) {
            Ok((directive, consumed)) => {
                self.pos += 1 + consumed;
                Some((start, Segment::Directive(directive)))
            }
            Err(malformed) => {
                self.pos += 1;
                Some((start, Segment::Malformed(malformed)))
            }
        }
    }
}
