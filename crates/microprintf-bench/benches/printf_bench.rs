//! printf formatting benchmarks.

use std::ffi::{CStr, c_char};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use microprintf_core::{Arg, format_to_bounded_buffer, format_to_buffer, format_to_sink};

struct Workload {
    name: &'static str,
    format: &'static CStr,
    args: &'static [Arg<'static>],
}

const WORKLOADS: &[Workload] = &[
    Workload {
        name: "literal",
        format: c"the quick brown fox jumps over the lazy dog",
        args: &[],
    },
    Workload {
        name: "greeting",
        format: c"Hello %s, you are %d",
        args: &[Arg::Str(b"Bob"), Arg::Int(30)],
    },
    Workload {
        name: "padded_numbers",
        format: c"%08d|%-6d|%10u",
        args: &[Arg::Int(-42), Arg::Int(3), Arg::Ulong(123_456_789)],
    },
    Workload {
        name: "hex_dump",
        format: c"%08X %08X %08X %08X",
        args: &[
            Arg::Uint(0xDEAD_BEEF),
            Arg::Uint(0x0BAD_F00D),
            Arg::Uint(0xCAFE_BABE),
            Arg::Uint(0x8BAD_F00D),
        ],
    },
    Workload {
        name: "binary_u32_max",
        format: c"%b",
        args: &[Arg::Uint(u32::MAX)],
    },
];

fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("printf_entry_points");

    for w in WORKLOADS {
        let fmt = w.format.to_bytes();
        group.bench_with_input(BenchmarkId::new("sink", w.name), w, |b, w| {
            b.iter(|| {
                let mut sum = 0u32;
                let n = format_to_sink(|byte| sum += u32::from(byte), fmt, w.args);
                criterion::black_box((n, sum));
            });
        });
        group.bench_with_input(BenchmarkId::new("buffer", w.name), w, |b, w| {
            let mut buf = [0u8; 256];
            b.iter(|| {
                let n = format_to_buffer(&mut buf, fmt, w.args);
                criterion::black_box(n);
            });
        });
        group.bench_with_input(BenchmarkId::new("bounded_16", w.name), w, |b, w| {
            let mut buf = [0u8; 16];
            b.iter(|| {
                let n = format_to_bounded_buffer(&mut buf, 16, fmt, w.args);
                criterion::black_box(n);
            });
        });
    }
    group.finish();
}

fn bench_abi_vs_host(c: &mut Criterion) {
    let mut group = c.benchmark_group("snprintf_abi");
    let name = c"Bob";
    let words = [name.as_ptr() as usize as u64, 30];
    let format = c"Hello %s, you are %d";

    group.bench_function("micro_snprintf", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| {
            let n = unsafe {
                microprintf_abi::stdio_abi::micro_snprintf(
                    buf.as_mut_ptr().cast::<c_char>(),
                    buf.len(),
                    format.as_ptr(),
                    words.as_ptr(),
                    words.len(),
                )
            };
            criterion::black_box(n);
        });
    });

    #[cfg(unix)]
    group.bench_function("host_snprintf", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| {
            let n = unsafe {
                libc::snprintf(
                    buf.as_mut_ptr().cast::<c_char>(),
                    buf.len(),
                    format.as_ptr(),
                    name.as_ptr(),
                    30 as libc::c_int,
                )
            };
            criterion::black_box(n);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_entry_points, bench_abi_vs_host);
criterion_main!(benches);
