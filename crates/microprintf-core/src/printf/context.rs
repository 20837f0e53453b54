//! Per-call formatting state.

use super::sink::Sink;

/// Byte counter and overflow flag for one formatting call, wrapped around
/// the call's sink. Nothing here outlives the call.
pub(crate) struct Context<'s, S: Sink + ?Sized> {
    sink: &'s mut S,
    written: usize,
    overflowed: bool,
}

impl<'s, S: Sink + ?Sized> Context<'s, S> {
    pub(crate) fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            written: 0,
            overflowed: false,
        }
    }

    /// Bytes accepted by the sink so far.
    pub(crate) fn written(&self) -> usize {
        self.written
    }

    pub(crate) fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Deliver one byte. A no-op once the sink has refused a byte.
    #[inline]
    pub(crate) fn emit(&mut self, byte: u8) {
        if self.overflowed {
            return;
        }
        if self.sink.put(byte) {
            self.written += 1;
        } else {
            self.overflowed = true;
        }
    }

    pub(crate) fn emit_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if self.overflowed {
                return;
            }
            self.emit(byte);
        }
    }

    pub(crate) fn emit_repeat(&mut self, byte: u8, count: usize) {
        for _ in 0..count {
            if self.overflowed {
                return;
            }
            self.emit(byte);
        }
    }

    /// Write the terminator.
    pub(crate) fn finish(&mut self) {
        self.sink.terminate();
    }
}
