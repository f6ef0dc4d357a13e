//! Closable byte streams over string storage:
//! - `Close`: an explicit close verb for byte streams, absent from `std::io`.
//! - `NopCloser`: attaches an always-succeeding, no-op close to any reader.
//! - `string_to_reader`: a closable stream over a string's bytes, reading
//!   them from the original storage without copying.

use std::io::Cursor;

pub mod nop_closer;

pub use nop_closer::NopCloser;

/// A byte stream that can be explicitly closed.
///
/// Consumers that hand a stream to an external sink (an HTTP body writer, a
/// transport) expect to signal end-of-use separately from dropping the value.
/// `close` is that signal. Implementations must make it idempotent: closing
/// an already-closed stream succeeds, and closing at any point of consumption
/// is permitted.
pub trait Close {
    /// Closes the stream, releasing whatever resource it holds.
    ///
    /// Calling `close` again after a successful close must succeed.
    fn close(&mut self) -> std::io::Result<()>;
}

/// A sequentially readable byte stream with an explicit close operation.
///
/// Exists so a `Box<dyn ReadClose>` can carry both capabilities across an
/// API boundary; every `Read + Close` type qualifies.
pub trait ReadClose: std::io::Read + Close {}

impl<T> ReadClose for T where T: std::io::Read + Close {}

impl<T> Close for Box<T>
where
    T: Close + ?Sized,
{
    fn close(&mut self) -> std::io::Result<()> {
        self.as_mut().close()
    }
}

/// Builds a closable readable stream over the byte view of `text`.
///
/// The stream reads straight from the string's original storage: the byte
/// view is obtained through [`strmem::string_into_bytes`] (no allocation, no
/// copy) and wrapped in a fixed-content in-memory reader. `close` is a no-op
/// that always succeeds (nothing is acquired building the stream, so nothing
/// needs releasing), and reading past the last byte yields `Ok(0)`.
pub fn string_to_reader(text: String) -> NopCloser<Cursor<Vec<u8>>> {
    NopCloser::new(Cursor::new(strmem::string_into_bytes(text)))
}
