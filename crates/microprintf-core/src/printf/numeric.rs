//! Integer to text conversion into a fixed scratch buffer.
//!
//! Digits are written back-to-front: a NUL terminator goes in the last slot,
//! then the least significant digit, and so on. The widest token is a `u64`
//! in base 2 (64 digits) plus a two-byte prefix and the terminator, so the
//! 256-byte scratch buffer always has room.

/// Capacity of the conversion scratch buffer.
pub const SCRATCH_LEN: usize = 256;

/// Stack storage for one numeric conversion.
pub type Scratch = [u8; SCRATCH_LEN];

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Supported radixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary = 2,
    Decimal = 10,
    Hex = 16,
}

/// Letter case for hex digits above 9.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigitCase {
    #[default]
    Lower,
    Upper,
}

impl DigitCase {
    const fn alphabet(self) -> &'static [u8; 16] {
        match self {
            Self::Lower => DIGITS_LOWER,
            Self::Upper => DIGITS_UPPER,
        }
    }
}

/// A rendered token inside the scratch buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'b> {
    /// Full token text, prefix included, NUL excluded.
    pub text: &'b [u8],
    /// Leading bytes (`-` or `0x`) that zero padding must follow.
    pub prefix_len: usize,
}

impl<'b> Token<'b> {
    /// A token with no sign or prefix.
    #[must_use]
    pub const fn plain(text: &'b [u8]) -> Self {
        Self {
            text,
            prefix_len: 0,
        }
    }
}

/// Write the digits of `value` ending just before the terminator. Returns the
/// index of the most significant digit.
fn write_digits(scratch: &mut Scratch, mut value: u64, base: Base, case: DigitCase) -> usize {
    let alphabet = case.alphabet();
    let radix = base as u64;
    let mut pos = SCRATCH_LEN - 1;
    scratch[pos] = 0;
    loop {
        pos -= 1;
        scratch[pos] = alphabet[(value % radix) as usize];
        value /= radix;
        if value == 0 {
            break;
        }
    }
    pos
}

/// Render an unsigned value. Zero renders as `"0"`.
pub fn convert_unsigned(
    scratch: &mut Scratch,
    value: u64,
    base: Base,
    case: DigitCase,
) -> Token<'_> {
    let start = write_digits(scratch, value, base, case);
    Token::plain(&scratch[start..SCRATCH_LEN - 1])
}

/// Render a signed value in decimal. Negative values get a `-` prefix.
///
/// The magnitude is taken with `unsigned_abs`, so `i32::MIN` is exact.
pub fn convert_signed(scratch: &mut Scratch, value: i32) -> Token<'_> {
    let mut start = write_digits(
        scratch,
        u64::from(value.unsigned_abs()),
        Base::Decimal,
        DigitCase::Lower,
    );
    let mut prefix_len = 0;
    if value < 0 {
        start -= 1;
        scratch[start] = b'-';
        prefix_len = 1;
    }
    Token {
        text: &scratch[start..SCRATCH_LEN - 1],
        prefix_len,
    }
}

/// Render an address as `0x` followed by lowercase hex digits.
pub fn convert_pointer(scratch: &mut Scratch, address: u64) -> Token<'_> {
    let start = write_digits(scratch, address, Base::Hex, DigitCase::Lower) - 2;
    scratch[start..start + 2].copy_from_slice(b"0x");
    Token {
        text: &scratch[start..SCRATCH_LEN - 1],
        prefix_len: 2,
    }
}
