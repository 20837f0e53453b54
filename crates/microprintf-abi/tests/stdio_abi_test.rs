//! Integration tests for the printf-family exports.

use std::cell::RefCell;
use std::ffi::{CStr, c_char};
use std::ptr;

use microprintf_abi::stdio_abi::{
    NULL_STR_WORD, micro_printf, micro_snprintf, micro_sprintf, str_word,
};
use microprintf_abi::OutputHandler;

thread_local! {
    static CAPTURED: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

extern "C" fn capture(byte: c_char) {
    CAPTURED.with(|c| c.borrow_mut().push(byte as u8));
}

fn take_captured() -> Vec<u8> {
    CAPTURED.with(|c| std::mem::take(&mut *c.borrow_mut()))
}

fn sprintf(format: &CStr, words: &[u64]) -> (i32, Vec<u8>) {
    let mut buf = [0xEEu8; 128];
    let n = unsafe {
        micro_sprintf(
            buf.as_mut_ptr().cast::<c_char>(),
            format.as_ptr(),
            words.as_ptr(),
            words.len(),
        )
    };
    let end = buf.iter().position(|&b| b == 0).expect("terminator");
    (n, buf[..end].to_vec())
}

#[test]
fn sprintf_reference_scenarios() {
    let name = c"Bob";
    assert_eq!(
        sprintf(c"Hello %s, you are %d", &[str_word(name.as_ptr()), 30]),
        (21, b"Hello Bob, you are 30".to_vec())
    );
    assert_eq!(
        sprintf(c"%05d", &[(-42i32) as u32 as u64]),
        (5, b"-0042".to_vec())
    );
    assert_eq!(sprintf(c"%-6d|", &[3]), (7, b"3     |".to_vec()));
    assert_eq!(sprintf(c"%x %X", &[255, 255]), (5, b"ff FF".to_vec()));
    assert_eq!(sprintf(c"%p", &[0x1A2B]), (6, b"0x1a2b".to_vec()));
}

#[test]
fn sprintf_sign_extended_words() {
    // A C caller promoting `int -1` to 64 bits sign-extends.
    assert_eq!(sprintf(c"%d", &[u64::MAX]), (2, b"-1".to_vec()));
    assert_eq!(sprintf(c"%x", &[u64::MAX]), (8, b"ffffffff".to_vec()));
    assert_eq!(
        sprintf(c"%u", &[u64::MAX]),
        (20, b"18446744073709551615".to_vec())
    );
}

#[test]
fn null_string_argument_renders_placeholder() {
    assert_eq!(sprintf(c"<%s>", &[NULL_STR_WORD]), (8, b"<(null)>".to_vec()));
}

#[test]
fn snprintf_truncates_and_terminates() {
    let mut buf = [0xEEu8; 16];
    let n = unsafe {
        micro_snprintf(
            buf.as_mut_ptr().cast::<c_char>(),
            5,
            c"abcdef".as_ptr(),
            ptr::null(),
            0,
        )
    };
    assert_eq!(n, 4);
    assert_eq!(&buf[..6], b"abcd\0\xEE");
}

#[test]
fn snprintf_zero_count_accepts_null_buffer() {
    let n = unsafe { micro_snprintf(ptr::null_mut(), 0, c"abc".as_ptr(), ptr::null(), 0) };
    assert_eq!(n, 0);
    let n = unsafe { micro_snprintf(ptr::null_mut(), 4, c"abc".as_ptr(), ptr::null(), 0) };
    assert_eq!(n, -1);
}

#[test]
fn null_format_is_rejected() {
    let mut buf = [0u8; 4];
    let out = buf.as_mut_ptr().cast::<c_char>();
    unsafe {
        assert_eq!(micro_sprintf(out, ptr::null(), ptr::null(), 0), -1);
        assert_eq!(micro_snprintf(out, 4, ptr::null(), ptr::null(), 0), -1);
        assert_eq!(
            micro_printf(Some(capture as OutputHandler), ptr::null(), ptr::null(), 0),
            -1
        );
        assert_eq!(micro_printf(None, c"x".as_ptr(), ptr::null(), 0), -1);
    }
}

#[test]
fn missing_argument_is_an_error() {
    let (n, out) = sprintf(c"a%db", &[]);
    assert_eq!(n, -1);
    assert_eq!(out, b"a");
}

#[test]
fn printf_streams_every_byte_to_handler() {
    take_captured();
    let n = unsafe {
        micro_printf(
            Some(capture as OutputHandler),
            c"[%c%3u]".as_ptr(),
            [u64::from(b'Z'), 7].as_ptr(),
            2,
        )
    };
    assert_eq!(n, 6);
    assert_eq!(take_captured(), b"[Z  7]\0");
}

#[cfg(unix)]
#[test]
fn output_matches_host_snprintf_where_semantics_overlap() {
    use std::ffi::c_int;

    let bob = c"Bob";
    let cases: [(&CStr, [u64; 2]); 6] = [
        (c"Hello %s, you are %d", [str_word(bob.as_ptr()), 30]),
        (c"%05d|%d", [(-42i32) as u32 as u64, 7]),
        (c"%-6d|%8d", [3, 12345]),
        (c"%x %X", [255, 255]),
        (c"[%8x][%c]", [0xBEEF, u64::from(b'q')]),
        (c"%-5s|%s", [str_word(c"ab".as_ptr()), str_word(bob.as_ptr())]),
    ];

    for (format, words) in cases {
        for limit in [0usize, 1, 4, 64] {
            let mut ours = [0xEEu8; 64];
            let mut host = [0xEEu8; 64];
            let n = unsafe {
                micro_snprintf(
                    ours.as_mut_ptr().cast::<c_char>(),
                    limit,
                    format.as_ptr(),
                    words.as_ptr(),
                    words.len(),
                )
            };
            assert!(n >= 0);
            // The host reads only the word types its directives name.
            let host_n: c_int = unsafe {
                match format.to_bytes() {
                    b"Hello %s, you are %d" => libc::snprintf(
                        host.as_mut_ptr().cast(), limit, format.as_ptr(),
                        bob.as_ptr(), 30 as c_int,
                    ),
                    b"%05d|%d" => libc::snprintf(
                        host.as_mut_ptr().cast(), limit, format.as_ptr(),
                        -42 as c_int, 7 as c_int,
                    ),
                    b"%-6d|%8d" => libc::snprintf(
                        host.as_mut_ptr().cast(), limit, format.as_ptr(),
                        3 as c_int, 12345 as c_int,
                    ),
                    b"%x %X" => libc::snprintf(
                        host.as_mut_ptr().cast(), limit, format.as_ptr(),
                        255 as libc::c_uint, 255 as libc::c_uint,
                    ),
                    b"[%8x][%c]" => libc::snprintf(
                        host.as_mut_ptr().cast(), limit, format.as_ptr(),
                        0xBEEF as libc::c_uint, b'q' as c_int,
                    ),
                    _ => libc::snprintf(
                        host.as_mut_ptr().cast(), limit, format.as_ptr(),
                        c"ab".as_ptr(), bob.as_ptr(),
                    ),
                }
            };
            assert!(host_n >= n, "{format:?}@{limit}");
            assert_eq!(ours, host, "{format:?}@{limit}");
            if limit == 64 {
                assert_eq!(n, host_n, "{format:?}");
            }
        }
    }
}
