//! Field padding.

use super::context::Context;
use super::directive::Padding;
use super::numeric::Token;
use super::sink::Sink;

/// Emit `token` padded to `width` according to `padding`.
///
/// - `Zero`: prefix (`-` or `0x`), zeros, then the remaining digits.
/// - `Default`: leading spaces.
/// - `Left` / `Right`: trailing spaces.
pub(crate) fn emit_padded<S: Sink + ?Sized>(
    ctx: &mut Context<'_, S>,
    token: Token<'_>,
    padding: Padding,
    width: usize,
) {
    let fill = width.saturating_sub(token.text.len());
    match padding {
        Padding::Zero => {
            let (prefix, digits) = token.text.split_at(token.prefix_len);
            ctx.emit_all(prefix);
            ctx.emit_repeat(b'0', fill);
            ctx.emit_all(digits);
        }
        Padding::Default => {
            ctx.emit_repeat(b' ', fill);
            ctx.emit_all(token.text);
        }
        Padding::Left | Padding::Right => {
            ctx.emit_all(token.text);
            ctx.emit_repeat(b' ', fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printf::sink::CallbackSink;

    fn render(token: Token<'_>, padding: Padding, width: usize) -> Vec<u8> {
        let mut out = Vec::new();
        let mut sink = CallbackSink::new(|b| out.push(b));
        let mut ctx = Context::new(&mut sink);
        emit_padded(&mut ctx, token, padding, width);
        out
    }

    #[test]
    fn no_width_emits_token_only() {
        for padding in [Padding::Default, Padding::Zero, Padding::Left, Padding::Right] {
            assert_eq!(render(Token::plain(b"42"), padding, 0), b"42");
        }
    }

    #[test]
    fn width_shorter_than_token_never_truncates() {
        assert_eq!(render(Token::plain(b"12345"), Padding::Default, 3), b"12345");
    }

    #[test]
    fn default_pads_leading_spaces() {
        assert_eq!(render(Token::plain(b"ab"), Padding::Default, 5), b"   ab");
    }

    #[test]
    fn left_and_right_pad_trailing_spaces() {
        assert_eq!(render(Token::plain(b"3"), Padding::Left, 6), b"3     ");
        assert_eq!(render(Token::plain(b"3"), Padding::Right, 3), b"3  ");
    }

    #[test]
    fn zero_pad_puts_prefix_first() {
        let signed = Token {
            text: b"-42",
            prefix_len: 1,
        };
        assert_eq!(render(signed, Padding::Zero, 5), b"-0042");

        let pointer = Token {
            text: b"0x1a2b",
            prefix_len: 2,
        };
        assert_eq!(render(pointer, Padding::Zero, 10), b"0x00001a2b");

        assert_eq!(render(Token::plain(b"7"), Padding::Zero, 3), b"007");
    }
}
