//! A no-op close adapter for readers.

use std::io::{BufRead, Read, Seek, SeekFrom};

use crate::Close;

/// Attaches an always-succeeding, no-op [`Close`] to any reader.
///
/// The adapter holds no resource of its own, so `close` performs no action
/// and reports success regardless of how often it is called or how much of
/// the stream has been consumed. Closing does not disturb the inner reader:
/// reading may continue afterwards, and other holders of the same underlying
/// storage observe nothing.
///
/// `Read`, `BufRead`, and `Seek` are forwarded to the inner reader whenever
/// it implements them.
pub struct NopCloser<R> {
    inner: R,
}

impl<R> NopCloser<R> {
    /// Wraps `inner` in a no-op close adapter.
    pub fn new(inner: R) -> NopCloser<R> {
        NopCloser { inner }
    }

    /// Returns a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the inner reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the adapter and returns the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for NopCloser<R> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: BufRead> BufRead for NopCloser<R> {
    #[inline]
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    #[inline]
    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl<R: Seek> Seek for NopCloser<R> {
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl<R> Close for NopCloser<R> {
    fn close(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
