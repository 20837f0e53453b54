//! printf-style formatting engine.
//!
//! Implements the directive grammar `%[flag][width]conv` over byte strings:
//! - Flags: `0` (zero-pad), `-` (left-justify), `+` (trailing spaces).
//! - Conversions: `c d u s b x X p`.
//!
//! [`Formatter::format`] is the single engine behind the three entry points
//! and the macros. It drives one [`Sink`] to completion, to the first
//! dropped byte, or to the first error, and always terminates the sink.

mod arg;
mod context;
mod directive;
mod numeric;
mod pad;
mod sink;

pub use arg::{Arg, ArgSource, SliceArgs};
pub use directive::{
    Conversion, Directive, Malformed, Padding, Segment, Segments, parse_directive,
};
pub use numeric::{
    Base, DigitCase, SCRATCH_LEN, Scratch, Token, convert_pointer, convert_signed,
    convert_unsigned,
};
pub use sink::{BoundedSink, BufferSink, CallbackSink, Sink};

use log::{debug, trace, warn};

use self::arg::{Match, Operand};
use self::context::Context;
use crate::config::Config;
use crate::error::FormatError;

/// Result of a successful formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Content bytes delivered to the sink, terminator excluded.
    pub written: usize,
    /// True if the sink refused a byte and output was truncated.
    pub overflowed: bool,
}

/// Formatting engine bound to a [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    config: Config,
}

impl Formatter {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Render `format` with arguments from `args` into `sink`.
    ///
    /// `format` ends at its first NUL byte. The sink is terminated exactly
    /// once whether the call succeeds or fails.
    pub fn format<'a, S, A>(
        &self,
        sink: &mut S,
        format: &[u8],
        args: &mut A,
    ) -> Result<Outcome, FormatError>
    where
        S: Sink + ?Sized,
        A: ArgSource<'a> + ?Sized,
    {
        let mut ctx = Context::new(sink);
        let result = self.run(&mut ctx, format, args);
        ctx.finish();
        result.map(|()| Outcome {
            written: ctx.written(),
            overflowed: ctx.overflowed(),
        })
    }

    fn run<'a, S, A>(
        &self,
        ctx: &mut Context<'_, S>,
        format: &[u8],
        args: &mut A,
    ) -> Result<(), FormatError>
    where
        S: Sink + ?Sized,
        A: ArgSource<'a> + ?Sized,
    {
        let strict = self.config.mode.is_strict();
        let mut arg_index = 0;

        for (offset, segment) in Segments::new(format) {
            match segment {
                Segment::Literal(bytes) => ctx.emit_all(bytes),
                Segment::Directive(directive) => {
                    self.render_directive(ctx, directive, arg_index, args)?;
                    arg_index += 1;
                }
                Segment::Malformed(malformed) => {
                    let at = offset + 1 + malformed.position;
                    if strict {
                        return Err(match malformed.byte {
                            Some(byte) => FormatError::UnknownConversion { offset: at, byte },
                            None => FormatError::DanglingPercent { offset: at },
                        });
                    }
                    warn!("microprintf: malformed directive at offset {offset}, emitting '%'");
                    ctx.emit(b'%');
                }
            }
            if ctx.overflowed() {
                debug!(
                    "microprintf: output truncated after {} bytes",
                    ctx.written()
                );
                return Ok(());
            }
        }

        let leftover = args.remaining();
        if leftover > 0 {
            if strict {
                return Err(FormatError::UnusedArguments { count: leftover });
            }
            trace!("microprintf: {leftover} argument(s) left unused");
        }
        Ok(())
    }

    fn render_directive<'a, S, A>(
        &self,
        ctx: &mut Context<'_, S>,
        directive: Directive,
        index: usize,
        args: &mut A,
    ) -> Result<(), FormatError>
    where
        S: Sink + ?Sized,
        A: ArgSource<'a> + ?Sized,
    {
        let conversion = directive.conversion;
        let arg = args
            .next_arg(conversion)
            .ok_or(FormatError::MissingArgument { index })?;
        let (operand, matched) = Operand::resolve(arg, conversion, self.config.mode)
            .ok_or(FormatError::ArgumentMismatch { index, conversion })?;
        if matched == Match::Promoted {
            warn!("microprintf: argument #{index} ({arg:?}) coerced for %{conversion}");
        }

        let mut scratch: Scratch = [0; SCRATCH_LEN];
        let byte;
        let token = match operand {
            // A NUL byte would end the output early; it renders as nothing.
            Operand::Byte(0) => Token::plain(b""),
            Operand::Byte(b) => {
                byte = [b];
                Token::plain(&byte)
            }
            Operand::Text(text) => {
                let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
                Token::plain(&text[..end])
            }
            Operand::Signed(v) => convert_signed(&mut scratch, v),
            Operand::Unsigned(v) => {
                let (base, case) = match conversion {
                    Conversion::Binary => (Base::Binary, DigitCase::Lower),
                    Conversion::Hex => (Base::Hex, DigitCase::Lower),
                    Conversion::HexUpper => (Base::Hex, DigitCase::Upper),
                    _ => (Base::Decimal, DigitCase::Lower),
                };
                convert_unsigned(&mut scratch, v, base, case)
            }
            Operand::Address(address) => convert_pointer(&mut scratch, address),
        };

        pad::emit_padded(ctx, token, directive.padding, directive.width);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Format to a byte handler. The handler also receives the terminating NUL.
///
/// Returns the number of content bytes delivered.
pub fn format_to_sink<F>(
    handler: F,
    format: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<usize, FormatError>
where
    F: FnMut(u8),
{
    let mut sink = CallbackSink::new(handler);
    Formatter::default()
        .format(&mut sink, format.as_ref(), &mut SliceArgs::new(args))
        .map(|outcome| outcome.written)
}

/// Format into `buffer` and NUL-terminate it.
///
/// # Panics
///
/// Panics if `buffer` cannot hold the output plus the terminator. Use
/// [`format_to_bounded_buffer`] when the output length is not known.
pub fn format_to_buffer(
    buffer: &mut [u8],
    format: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<usize, FormatError> {
    let mut sink = BufferSink::new(buffer);
    Formatter::default()
        .format(&mut sink, format.as_ref(), &mut SliceArgs::new(args))
        .map(|outcome| outcome.written)
}

/// Format into at most `max_count` bytes of `buffer`, terminator included.
///
/// Output that does not fit is dropped; the return value counts only the
/// content bytes actually written. The terminator is written whenever
/// `max_count > 0`.
pub fn format_to_bounded_buffer(
    buffer: &mut [u8],
    max_count: usize,
    format: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<usize, FormatError> {
    let mut sink = BoundedSink::new(buffer, max_count);
    Formatter::default()
        .format(&mut sink, format.as_ref(), &mut SliceArgs::new(args))
        .map(|outcome| outcome.written)
}
