//! printf-family exports.

use std::ffi::{CStr, c_char, c_int};
use std::slice;

use log::warn;
use microprintf_core::{
    Arg, ArgSource, BoundedSink, CallbackSink, Config, Conversion, FormatError, Formatter,
    Outcome, Sink,
};

/// Byte handler supplied by the caller, e.g. a UART transmit routine.
pub type OutputHandler = unsafe extern "C" fn(c_char);

const NULL_STR: &[u8] = b"(null)";

// ---------------------------------------------------------------------------
// Raw buffer sink
// ---------------------------------------------------------------------------

/// Unbounded sink writing through a raw cursor.
pub struct RawBufferSink {
    cursor: *mut u8,
}

impl RawBufferSink {
    /// # Safety
    ///
    /// `buf` must be valid for writes of the whole output plus the NUL.
    pub unsafe fn new(buf: *mut u8) -> Self {
        Self { cursor: buf }
    }
}

impl Sink for RawBufferSink {
    #[inline]
    fn put(&mut self, byte: u8) -> bool {
        // SAFETY: capacity is guaranteed by the caller of `new`.
        unsafe {
            self.cursor.write(byte);
            self.cursor = self.cursor.add(1);
        }
        true
    }

    fn terminate(&mut self) {
        // SAFETY: as above; the terminator slot is part of the guarantee.
        unsafe { self.cursor.write(0) };
    }
}

// ---------------------------------------------------------------------------
// Argument words
// ---------------------------------------------------------------------------

/// Argument source over an array of 64-bit words.
pub struct WordArgs<'a> {
    words: &'a [u64],
    pos: usize,
}

impl<'a> WordArgs<'a> {
    /// Decode from a word slice.
    ///
    /// # Safety
    ///
    /// Any word consumed by a `%s` directive must be zero or the address of a
    /// NUL-terminated string that outlives `'a`.
    pub unsafe fn new(words: &'a [u64]) -> Self {
        Self { words, pos: 0 }
    }

    /// # Safety
    ///
    /// `args` must be valid for reads of `nargs` words (it may be null when
    /// `nargs` is 0), and the contract of [`WordArgs::new`] applies.
    pub unsafe fn from_raw(args: *const u64, nargs: usize) -> Self {
        let words: &'a [u64] = if args.is_null() || nargs == 0 {
            &[]
        } else {
            // SAFETY: guaranteed by the caller.
            unsafe { slice::from_raw_parts(args, nargs) }
        };
        // SAFETY: forwarded to the caller.
        unsafe { Self::new(words) }
    }
}

impl<'a> ArgSource<'a> for WordArgs<'a> {
    fn next_arg(&mut self, conversion: Conversion) -> Option<Arg<'a>> {
        let word = *self.words.get(self.pos)?;
        self.pos += 1;
        Some(match conversion {
            Conversion::Char => Arg::Char(word as u8),
            Conversion::SignedDecimal => Arg::Int(word as u32 as i32),
            Conversion::UnsignedDecimal => Arg::Ulong(word),
            Conversion::Binary | Conversion::Hex | Conversion::HexUpper => Arg::Uint(word as u32),
            Conversion::Pointer => Arg::Ptr(word as usize),
            Conversion::Str => {
                let p = word as usize as *const c_char;
                if p.is_null() {
                    Arg::Str(NULL_STR)
                } else {
                    // SAFETY: string contract of `WordArgs::new`.
                    Arg::Str(unsafe { CStr::from_ptr(p) }.to_bytes())
                }
            }
        })
    }

    fn remaining(&self) -> usize {
        self.words.len() - self.pos
    }
}

// ---------------------------------------------------------------------------
// Exports
// ---------------------------------------------------------------------------

fn to_c_int(result: Result<Outcome, FormatError>, func: &str) -> c_int {
    match result {
        Ok(outcome) => c_int::try_from(outcome.written).unwrap_or(c_int::MAX),
        Err(err) => {
            warn!("{func}: {err}");
            -1
        }
    }
}

/// Format to `handler`, one byte per call, NUL included.
///
/// Returns the number of content bytes emitted, or -1 if `handler` or
/// `format` is null or formatting fails.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn micro_printf(
    handler: Option<OutputHandler>,
    format: *const c_char,
    args: *const u64,
    nargs: usize,
) -> c_int {
    let Some(handler) = handler else {
        return -1;
    };
    if format.is_null() {
        return -1;
    }

    let fmt_bytes = unsafe { CStr::from_ptr(format) }.to_bytes();
    let mut source = unsafe { WordArgs::from_raw(args, nargs) };
    // SAFETY: the caller supplies a handler callable with any byte.
    let mut sink = CallbackSink::new(|b| unsafe { handler(b as c_char) });
    let result = Formatter::new(Config::default()).format(&mut sink, fmt_bytes, &mut source);
    to_c_int(result, "micro_printf")
}

/// Format into `buf`, which must hold the whole output plus the NUL.
///
/// Returns the number of content bytes written, or -1 on a null pointer or
/// formatting failure (in which case `buf` holds the partial output, still
/// terminated).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn micro_sprintf(
    buf: *mut c_char,
    format: *const c_char,
    args: *const u64,
    nargs: usize,
) -> c_int {
    if buf.is_null() || format.is_null() {
        return -1;
    }

    let fmt_bytes = unsafe { CStr::from_ptr(format) }.to_bytes();
    let mut source = unsafe { WordArgs::from_raw(args, nargs) };
    let mut sink = unsafe { RawBufferSink::new(buf.cast::<u8>()) };
    let result = Formatter::new(Config::default()).format(&mut sink, fmt_bytes, &mut source);
    to_c_int(result, "micro_sprintf")
}

/// Format into at most `count` bytes of `buf`, NUL included.
///
/// Returns the number of content bytes written, which is less than the full
/// output length when truncation occurred. `buf` may be null only when
/// `count` is 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn micro_snprintf(
    buf: *mut c_char,
    count: usize,
    format: *const c_char,
    args: *const u64,
    nargs: usize,
) -> c_int {
    if format.is_null() || (buf.is_null() && count > 0) {
        return -1;
    }

    let region: &mut [u8] = if count == 0 {
        &mut []
    } else {
        // SAFETY: the caller guarantees `count` writable bytes at `buf`.
        unsafe { slice::from_raw_parts_mut(buf.cast::<u8>(), count) }
    };
    let fmt_bytes = unsafe { CStr::from_ptr(format) }.to_bytes();
    let mut source = unsafe { WordArgs::from_raw(args, nargs) };
    let mut sink = BoundedSink::new(region, count);
    let result = Formatter::new(Config::default()).format(&mut sink, fmt_bytes, &mut source);
    to_c_int(result, "micro_snprintf")
}

/// Pack a string pointer into an argument word.
#[must_use]
pub fn str_word(s: *const c_char) -> u64 {
    s as usize as u64
}

/// Argument word for a null `%s` pointer.
pub const NULL_STR_WORD: u64 = 0;
