//! Zero-copy view conversions between byte buffers and string values.
//!
//! A `String` and a `Vec<u8>` describe the same backing storage (a base
//! pointer, a length, and a capacity) and differ only in the UTF-8 invariant
//! the string type layers on top. The conversions in this crate reinterpret
//! one view as the other without allocating new storage or copying bytes:
//! the resulting view is backed by the identical memory region, and its
//! lifetime is inherited from whichever value originally allocated it.
//!
//! Every layout reinterpretation is confined to the [`views`] module. The
//! conversions perform no encoding validation and have no failure mode; where
//! a conversion can produce a string that violates the UTF-8 invariant, or a
//! mutable alias over storage other holders treat as immutable text, the
//! entry point is `unsafe` and the obligation sits with the caller.

pub mod aliased;
pub mod views;

pub use aliased::AliasedBytes;
pub use views::{bytes_as_str, bytes_into_string, string_as_bytes_mut, string_into_bytes};
