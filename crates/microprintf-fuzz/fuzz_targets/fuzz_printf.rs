#![no_main]
use libfuzzer_sys::fuzz_target;
use microprintf_core::{Arg, BoundedSink, CallbackSink, Config, Formatter, SliceArgs};

// Input layout: [limit, arg seed bytes (8), format bytes...]
fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let limit = usize::from(data[0]);
    let seed = u64::from_le_bytes(data[1..9].try_into().unwrap());
    let format = &data[9..];
    // Widths of 10^4 and up only make the unbounded render slow.
    if format.windows(4).any(|w| w.iter().all(u8::is_ascii_digit)) {
        return;
    }

    let args = [
        Arg::Int(seed as i32),
        Arg::Uint((seed >> 16) as u32),
        Arg::Ulong(seed),
        Arg::Str(&data[1..9]),
        Arg::Char(seed as u8),
        Arg::Ptr(seed as usize),
    ];

    for config in [Config::permissive(), Config::strict()] {
        let formatter = Formatter::new(config);

        let mut full = Vec::new();
        let mut sink = CallbackSink::new(|b| full.push(b));
        let unbounded = formatter.format(&mut sink, format, &mut SliceArgs::new(&args));
        assert_eq!(full.pop(), Some(0));
        if let Ok(outcome) = unbounded {
            assert_eq!(outcome.written, full.len());
            assert!(!outcome.overflowed);
        }

        let mut buf = [0xEEu8; 300];
        let mut bounded = BoundedSink::new(&mut buf, limit);
        let truncated = formatter.format(&mut bounded, format, &mut SliceArgs::new(&args));

        // Bytes past the limit are never touched.
        assert!(buf[limit..].iter().all(|&b| b == 0xEE));

        if let (Ok(full_outcome), Ok(outcome)) = (unbounded, truncated) {
            let expect = full_outcome.written.min(limit.saturating_sub(1));
            assert_eq!(outcome.written, expect);
            assert_eq!(&buf[..expect], &full[..expect]);
            if limit > 0 {
                assert_eq!(buf[expect], 0);
            }
            if full_outcome.written > 0 {
                assert_eq!(outcome.overflowed, full_outcome.written + 1 > limit);
            }
        }
    }
});
