//! View conversions between byte buffers and string values.
//!
//! Each conversion reinterprets the source's backing storage under the target
//! type: same base pointer, same length, same capacity where the target
//! carries one. Nothing is allocated or copied, and the content is never
//! inspected. All of the crate's `unsafe` lives in this module; the
//! invariant each call site upholds is layout compatibility between
//! `Vec<u8>` and `String` plus whatever UTF-8 obligation the caller took on.

use crate::aliased::AliasedBytes;

/// Reinterprets an owned byte buffer as a `String` backed by the same storage.
///
/// The returned string's base pointer, length, and capacity are numerically
/// identical to those of `bytes`. No bytes are copied and no storage is
/// allocated; the operation performs no validation and cannot fail.
///
/// An empty buffer converts to an empty string; length zero is the
/// load-bearing field and the base pointer may be dangling.
///
/// # Safety
///
/// `bytes` must contain valid UTF-8. The buffer is reinterpreted as-is, and
/// every subsequent holder of the returned `String` relies on that invariant.
#[inline]
pub unsafe fn bytes_into_string(bytes: Vec<u8>) -> String {
    unsafe { String::from_utf8_unchecked(bytes) }
}

/// Reinterprets a borrowed byte slice as a `&str` over the same storage.
///
/// The borrowed counterpart of [`bytes_into_string`]: same base pointer and
/// length, no copy, no validation. The source slice stays borrowed for as
/// long as the returned view lives, so the storage cannot be mutated or
/// freed out from under it.
///
/// # Safety
///
/// `bytes` must contain valid UTF-8.
#[inline]
pub unsafe fn bytes_as_str(bytes: &[u8]) -> &str {
    unsafe { std::str::from_utf8_unchecked(bytes) }
}

/// Reinterprets an owned `String` as the byte buffer backing it.
///
/// The returned buffer's base pointer, length, and capacity are numerically
/// identical to those of `text`. No bytes are copied and no storage is
/// allocated. Dropping the UTF-8 invariant is always sound, so this direction
/// needs no caller obligation.
#[inline]
pub fn string_into_bytes(text: String) -> Vec<u8> {
    text.into_bytes()
}

/// Exposes a string's backing storage as a mutable byte-sequence view while
/// the string itself stays alive.
///
/// This is the one conversion that grants a mutation capability the source
/// type did not: a write through the returned [`AliasedBytes`] changes
/// storage that the rest of the program still treats as immutable text.
/// Callers must treat the returned byte sequence as read-only unless they
/// deliberately take on the invariant below.
///
/// # Safety
///
/// Any bytes written through the view must leave the buffer as valid UTF-8
/// by the time the view is released, and `text` must not be read while a
/// partial edit has the invariant broken.
#[inline]
pub unsafe fn string_as_bytes_mut(text: &mut String) -> AliasedBytes<'_> {
    AliasedBytes::new(unsafe { text.as_mut_vec() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_into_string_preserves_storage() {
        let bytes = b"hello".to_vec();
        let ptr = bytes.as_ptr();
        let len = bytes.len();
        let cap = bytes.capacity();

        let text = unsafe { bytes_into_string(bytes) };
        assert_eq!(text, "hello");
        assert_eq!(text.len(), len);
        assert_eq!(text.capacity(), cap);
        assert_eq!(text.as_ptr(), ptr);
    }

    #[test]
    fn test_bytes_into_string_byte_for_byte() {
        let bytes = vec![0x68, 0x65, 0x6c, 0x6c, 0x6f];
        let expected = bytes.clone();
        let text = unsafe { bytes_into_string(bytes) };
        for (i, &b) in expected.iter().enumerate() {
            assert_eq!(text.as_bytes()[i], b);
        }
    }

    #[test]
    fn test_bytes_into_string_empty() {
        let text = unsafe { bytes_into_string(Vec::new()) };
        assert_eq!(text.len(), 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_bytes_as_str_borrowed_view() {
        let bytes = b"hello".to_vec();
        let view = unsafe { bytes_as_str(&bytes) };
        assert_eq!(view, "hello");
        assert_eq!(view.len(), bytes.len());
        assert_eq!(view.as_ptr(), bytes.as_ptr());
    }

    #[test]
    fn test_bytes_as_str_empty() {
        let view = unsafe { bytes_as_str(&[]) };
        assert_eq!(view, "");
    }

    #[test]
    fn test_string_into_bytes_preserves_storage() {
        let text = String::from("hello");
        let ptr = text.as_ptr();
        let len = text.len();
        let cap = text.capacity();

        let bytes = string_into_bytes(text);
        assert_eq!(bytes, b"hello");
        assert_eq!(bytes.len(), len);
        assert_eq!(bytes.capacity(), cap);
        assert_eq!(bytes.as_ptr(), ptr);
    }

    #[test]
    fn test_string_into_bytes_exact_storage_capacity() {
        // `String::from(&str)` allocates exactly the text length.
        let bytes = string_into_bytes(String::from("hello"));
        assert_eq!(bytes.len(), 5);
        assert_eq!(bytes.capacity(), bytes.len());
    }

    #[test]
    fn test_string_into_bytes_empty() {
        let bytes = string_into_bytes(String::new());
        assert_eq!(bytes.len(), 0);
        assert_eq!(bytes.capacity(), 0);
    }

    #[test]
    fn test_round_trip_bytes_to_text_to_bytes() {
        let original = b"round trip".to_vec();
        let ptr = original.as_ptr();
        let expected = original.clone();

        let bytes = string_into_bytes(unsafe { bytes_into_string(original) });
        assert_eq!(bytes, expected);
        assert_eq!(bytes.as_ptr(), ptr);
    }

    #[test]
    fn test_round_trip_text_to_bytes_to_text() {
        let original = String::from("h\u{e9}llo, w\u{f6}rld");
        let ptr = original.as_ptr();
        let expected = original.clone();

        let text = unsafe { bytes_into_string(string_into_bytes(original)) };
        assert_eq!(text, expected);
        assert_eq!(text.as_ptr(), ptr);
    }

    #[test]
    fn test_round_trip_arbitrary_content() {
        for _ in 0..64 {
            let len = fastrand::usize(0..512);
            let text: String = std::iter::repeat_with(fastrand::alphanumeric)
                .take(len)
                .collect();
            let expected = text.clone();
            let ptr = text.as_ptr();

            let bytes = string_into_bytes(text);
            assert_eq!(bytes.len(), expected.len());
            let text = unsafe { bytes_into_string(bytes) };
            assert_eq!(text, expected);
            assert_eq!(text.as_ptr(), ptr);
        }
    }

    #[test]
    fn test_aliased_view_observes_writes() {
        let mut text = String::from("hello");
        let mut view = unsafe { string_as_bytes_mut(&mut text) };
        assert_eq!(view.len(), 5);
        view[0] = b'H';
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_aliased_view_shares_base_pointer() {
        let mut text = String::from("hello");
        let ptr = text.as_ptr();
        let view = unsafe { string_as_bytes_mut(&mut text) };
        assert_eq!(view.as_ptr(), ptr);
        assert_eq!(view.as_slice(), b"hello");
    }

    #[test]
    fn test_aliased_view_every_offset() {
        let mut text = String::from("abcde");
        let mut view = unsafe { string_as_bytes_mut(&mut text) };
        for i in 0..view.len() {
            view[i] = view[i].to_ascii_uppercase();
        }
        assert_eq!(text, "ABCDE");
    }
}
