//! A mutable alias over a string value's backing storage.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// A mutable byte-sequence view over the storage of a live string value.
///
/// Produced by [`string_as_bytes_mut`](crate::views::string_as_bytes_mut).
/// The view describes the string's buffer exactly: same base pointer, same
/// length, and the buffer's reserved capacity. Writes go straight into the
/// aliased storage and are observed by the string the moment the view is
/// released; there is no copy to write back.
///
/// The type deliberately exposes no growth operation. Its length is fixed at
/// creation, so a holder can never append past the aliased region or trigger
/// a reallocation that would detach the view from the string's storage.
///
/// Callers must treat the view as read-only unless they uphold the UTF-8
/// obligation stated on `string_as_bytes_mut`.
pub struct AliasedBytes<'a> {
    bytes: &'a mut Vec<u8>,
}

impl<'a> AliasedBytes<'a> {
    pub(crate) fn new(bytes: &'a mut Vec<u8>) -> AliasedBytes<'a> {
        AliasedBytes { bytes }
    }

    /// Returns the length of the aliased region.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the aliased region is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the reserved capacity of the backing buffer.
    ///
    /// Equals the length whenever the string's storage is exactly sized;
    /// a string that carried extra reserved space reports it here unchanged.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Returns the base address of the aliased storage.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Returns the base address of the aliased storage, writable.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }

    /// Returns the aliased region as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Returns the aliased region as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.bytes.as_mut_slice()
    }
}

impl Deref for AliasedBytes<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl DerefMut for AliasedBytes<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl AsRef<[u8]> for AliasedBytes<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsMut<[u8]> for AliasedBytes<'_> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl fmt::Debug for AliasedBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AliasedBytes").field(&self.as_slice()).finish()
    }
}
