use microprintf_core::{
    Arg, BoundedSink, Config, FormatError, Formatter, SliceArgs, format_to_bounded_buffer,
    format_to_buffer, format_to_sink, printf, snprintf, sprintf,
};

fn buffered(format: &str, args: &[Arg<'_>]) -> (Vec<u8>, usize) {
    let mut buf = [0xEEu8; 128];
    let n = format_to_buffer(&mut buf, format, args).expect("format_to_buffer");
    assert_eq!(buf[n], 0, "output must be NUL-terminated");
    (buf[..n].to_vec(), n)
}

fn strict(format: &[u8], args: &[Arg<'_>]) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::new();
    let mut sink = microprintf_core::CallbackSink::new(|b| out.push(b));
    let result =
        Formatter::new(Config::strict()).format(&mut sink, format, &mut SliceArgs::new(args));
    result.map(|outcome| {
        assert_eq!(out.pop(), Some(0));
        assert_eq!(out.len(), outcome.written);
        out
    })
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn greeting() {
    let (out, n) = buffered("Hello %s, you are %d", &[Arg::from("Bob"), Arg::from(30)]);
    assert_eq!(out, b"Hello Bob, you are 30");
    assert_eq!(n, 21);
}

#[test]
fn zero_padded_negative() {
    let (out, n) = buffered("%05d", &[Arg::Int(-42)]);
    assert_eq!(out, b"-0042");
    assert_eq!(n, 5);
}

#[test]
fn left_justified() {
    let (out, n) = buffered("%-6d|", &[Arg::Int(3)]);
    assert_eq!(out, b"3     |");
    assert_eq!(n, 7);
}

#[test]
fn hex_both_cases() {
    let (out, n) = buffered("%x %X", &[Arg::Uint(255), Arg::Uint(255)]);
    assert_eq!(out, b"ff FF");
    assert_eq!(n, 5);
}

#[test]
fn bounded_truncation() {
    let mut buf = [0xEEu8; 16];
    let mut sink = BoundedSink::new(&mut buf, 5);
    let outcome = Formatter::new(Config::permissive())
        .format(&mut sink, b"abcdef", &mut SliceArgs::new(&[]))
        .unwrap();
    assert_eq!(outcome.written, 4);
    assert!(outcome.overflowed);
    assert_eq!(&buf[..6], b"abcd\0\xEE");
}

#[test]
fn pointer() {
    let (out, _) = buffered("%p", &[Arg::Ptr(0x1A2B)]);
    assert_eq!(out, b"0x1a2b");
}

// ---------------------------------------------------------------------------
// Directive semantics
// ---------------------------------------------------------------------------

#[test]
fn zero_renders_as_single_digit() {
    let (out, _) = buffered("%d|%u|%x|%b|%X", &[
        Arg::Int(0),
        Arg::Ulong(0),
        Arg::Uint(0),
        Arg::Uint(0),
        Arg::Uint(0),
    ]);
    assert_eq!(out, b"0|0|0|0|0");
    assert_eq!(buffered("%p", &[Arg::Ptr(0)]).0, b"0x0");
}

#[test]
fn sign_precedes_zero_padding() {
    assert_eq!(buffered("%08d", &[Arg::Int(-1)]).0, b"-0000001");
    assert_eq!(buffered("%03d", &[Arg::Int(-12345)]).0, b"-12345");
    assert_eq!(buffered("%010p", &[Arg::Ptr(0x1A2B)]).0, b"0x00001a2b");
}

#[test]
fn width_without_flag_pads_leading_spaces() {
    assert_eq!(buffered("[%6d]", &[Arg::Int(-42)]).0, b"[   -42]");
    assert_eq!(buffered("[%4c]", &[Arg::Char(b'z')]).0, b"[   z]");
    assert_eq!(buffered("[%8b]", &[Arg::Uint(5)]).0, b"[     101]");
}

#[test]
fn plus_flag_pads_trailing_spaces() {
    assert_eq!(buffered("[%+5x]", &[Arg::Uint(0xAB)]).0, b"[ab   ]");
    assert_eq!(buffered("[%+4s]", &[Arg::Str(b"hi")]).0, b"[hi  ]");
}

#[test]
fn only_first_flag_is_honored() {
    // `%0-5d` is malformed: `-` is not a width digit or conversion.
    assert_eq!(buffered("%0-5d", &[]).0, b"%0-5d");
    assert!(matches!(
        strict(b"%0-5d", &[Arg::Int(1)]),
        Err(FormatError::UnknownConversion { offset: 2, byte: b'-' })
    ));
}

#[test]
fn numeric_extremes() {
    assert_eq!(buffered("%d", &[Arg::Int(i32::MIN)]).0, b"-2147483648");
    assert_eq!(buffered("%d", &[Arg::Int(i32::MAX)]).0, b"2147483647");
    assert_eq!(buffered("%u", &[Arg::Ulong(u64::MAX)]).0, b"18446744073709551615");
    assert_eq!(
        buffered("%b", &[Arg::Uint(u32::MAX)]).0,
        b"11111111111111111111111111111111"
    );
    assert_eq!(
        buffered("%p", &[Arg::Ptr(usize::MAX)]).0.len(),
        2 + 2 * core::mem::size_of::<usize>()
    );
}

#[test]
fn string_is_copied_up_to_nul() {
    assert_eq!(buffered("<%s>", &[Arg::Str(b"ab\0cd")]).0, b"<ab>");
    assert_eq!(buffered("<%s>", &[Arg::from(c"cstr")]).0, b"<cstr>");
    assert_eq!(buffered("<%s>", &[Arg::Str(b"")]).0, b"<>");
}

// ---------------------------------------------------------------------------
// Malformed input and argument errors
// ---------------------------------------------------------------------------

#[test]
fn permissive_mode_emits_malformed_directives_verbatim() {
    assert_eq!(buffered("%q", &[]).0, b"%q");
    assert_eq!(buffered("100%", &[]).0, b"100%");
    assert_eq!(buffered("%%d", &[Arg::Int(7)]).0, b"%7");
    assert_eq!(buffered("%5", &[]).0, b"%5");
}

#[test]
fn strict_mode_reports_malformed_directives() {
    assert_eq!(
        strict(b"100%", &[]),
        Err(FormatError::DanglingPercent { offset: 4 })
    );
    assert_eq!(
        strict(b"%%", &[]),
        Err(FormatError::UnknownConversion { offset: 1, byte: b'%' })
    );
    assert_eq!(
        strict(b"%f", &[]),
        Err(FormatError::UnknownConversion { offset: 1, byte: b'f' })
    );
}

#[test]
fn strict_mode_rejects_coercions() {
    assert_eq!(
        strict(b"%u", &[Arg::Uint(1)]),
        Err(FormatError::ArgumentMismatch {
            index: 0,
            conversion: microprintf_core::Conversion::UnsignedDecimal,
        })
    );
    assert_eq!(strict(b"%u", &[Arg::Ulong(1)]).unwrap(), b"1");
}

#[test]
fn errors_keep_earlier_output_and_terminate() {
    let mut buf = [0xEEu8; 16];
    let err = format_to_buffer(&mut buf, "ok %d %s", &[Arg::Int(1)]).unwrap_err();
    assert_eq!(err, FormatError::MissingArgument { index: 1 });
    assert_eq!(&buf[..6], b"ok 1 \0");

    let mut buf = [0xEEu8; 16];
    let err = format_to_bounded_buffer(&mut buf, 16, "%d", &[Arg::Str(b"x")]).unwrap_err();
    assert!(matches!(err, FormatError::ArgumentMismatch { index: 0, .. }));
    assert_eq!(buf[0], 0);
}

// ---------------------------------------------------------------------------
// Sinks and front ends
// ---------------------------------------------------------------------------

#[test]
fn callback_sink_receives_terminator() {
    let mut out = Vec::new();
    let n = format_to_sink(|b| out.push(b), "%c%c", &[Arg::Char(b'o'), Arg::Char(b'k')]).unwrap();
    assert_eq!(n, 2);
    assert_eq!(out, b"ok\0");
}

#[test]
fn macros_match_entry_points() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    let na = sprintf!(&mut a, "%s:%05d", "id", 42).unwrap();
    let nb = format_to_buffer(&mut b, "%s:%05d", &[Arg::from("id"), Arg::from(42)]).unwrap();
    assert_eq!(na, nb);
    assert_eq!(a, b);

    let mut small = [0u8; 3];
    assert_eq!(snprintf!(&mut small, 3, "%s", "xyz").unwrap(), 2);
    assert_eq!(&small, b"xy\0");

    let mut out = Vec::new();
    printf!(|byte| out.push(byte), "%X", 0xC0FFEEu32).unwrap();
    assert_eq!(out, b"C0FFEE\0");
}

#[test]
fn nested_calls_are_independent() {
    let mut inner = [0u8; 16];
    let n = sprintf!(&mut inner, "[%d]", 7).unwrap();
    let mut outer = [0u8; 32];
    let m = sprintf!(&mut outer, "%s %s", &inner[..n], &inner[..n]).unwrap();
    assert_eq!(&outer[..m], b"[7] [7]");
}
