//! Output sinks.
//!
//! Three destinations, all fed one byte at a time:
//!
//! | Sink | Capacity | On full |
//! |---|---|---|
//! | [`CallbackSink`] | unbounded | n/a |
//! | [`BufferSink`] | caller-guaranteed | panics (contract violation) |
//! | [`BoundedSink`] | `max_count` incl. NUL | drops the byte, flags overflow |
//!
//! The ABI crate adds a raw-pointer flavor of [`BufferSink`] for C callers.

/// Destination for formatted bytes.
pub trait Sink {
    /// Deliver one byte. Returns `false` if the sink is full and the byte was
    /// dropped; the formatter stops at the first dropped byte.
    fn put(&mut self, byte: u8) -> bool;

    /// Called exactly once when formatting stops. The default delivers a NUL
    /// through [`put`](Sink::put).
    fn terminate(&mut self) {
        let _ = self.put(0);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn put(&mut self, byte: u8) -> bool {
        (**self).put(byte)
    }

    fn terminate(&mut self) {
        (**self).terminate();
    }
}

/// Forwards every byte, the final NUL included, to a handler such as a UART
/// transmit routine.
pub struct CallbackSink<F> {
    handler: F,
}

impl<F: FnMut(u8)> CallbackSink<F> {
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F: FnMut(u8)> Sink for CallbackSink<F> {
    #[inline]
    fn put(&mut self, byte: u8) -> bool {
        (self.handler)(byte);
        true
    }
}

/// Unbounded buffer sink: an advancing cursor over caller memory.
///
/// The caller guarantees the buffer can hold the whole output plus the NUL.
/// Breaking that guarantee panics on the first byte past the end.
#[derive(Debug)]
pub struct BufferSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BufferSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far, terminator excluded.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Sink for BufferSink<'_> {
    #[inline]
    fn put(&mut self, byte: u8) -> bool {
        self.buf[self.pos] = byte;
        self.pos += 1;
        true
    }

    fn terminate(&mut self) {
        self.buf[self.pos] = 0;
    }
}

/// Capacity-checked buffer sink.
///
/// Holds at most `max_count` bytes including the terminating NUL: content is
/// accepted while one slot remains for the terminator, and the terminator is
/// always written when `max_count > 0`.
#[derive(Debug)]
pub struct BoundedSink<'a> {
    buf: &'a mut [u8],
    limit: usize,
    pos: usize,
    overflowed: bool,
}

impl<'a> BoundedSink<'a> {
    /// `max_count` is clamped to the buffer length.
    pub fn new(buf: &'a mut [u8], max_count: usize) -> Self {
        let limit = max_count.min(buf.len());
        Self {
            buf,
            limit,
            pos: 0,
            overflowed: false,
        }
    }

    /// Content bytes written so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Effective capacity, terminator included.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// True once a byte has been dropped.
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Sink for BoundedSink<'_> {
    #[inline]
    fn put(&mut self, byte: u8) -> bool {
        if self.pos + 1 >= self.limit {
            self.overflowed = true;
            return false;
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
        true
    }

    fn terminate(&mut self) {
        if self.pos < self.limit {
            self.buf[self.pos] = 0;
        }
    }
}
