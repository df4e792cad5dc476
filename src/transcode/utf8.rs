//! Length-bounded UTF-8 recovery from untrusted buffers.

use crate::runtime::RuntimeObject;

/// Decode `declared_len` bytes of `bytes` as UTF-8, empty string on invalid input.
///
/// The declared length comes from the inspected process and is clamped to the
/// available buffer. Empty input and byte sequences that are not valid UTF-8
/// both yield an empty string; there is no error path.
///
/// # Examples
///
/// ```rust
/// use objscope::transcode::utf8_from_bytes;
///
/// assert_eq!(utf8_from_bytes(b"hello", 5), "hello");
/// assert_eq!(utf8_from_bytes(b"hello", 4), "hell");
/// assert_eq!(utf8_from_bytes(&[0xFF, 0xFE], 2), "");
/// ```
#[must_use]
pub fn utf8_from_bytes(bytes: &[u8], declared_len: usize) -> String {
    let len = declared_len.min(bytes.len());
    if len == 0 {
        return String::new();
    }

    match std::str::from_utf8(&bytes[..len]) {
        Ok(text) => text.to_string(),
        Err(_) => String::new(),
    }
}

/// Recover the payload of a buffer-like object as UTF-8 text.
///
/// `None` yields an empty string. An object lacking the byte-sequence capability
/// falls back to its generic display string (a defensive fallback, not an error).
/// A missing declared length falls back to the full backing buffer.
#[must_use]
pub fn utf8_from_object(object: Option<&dyn RuntimeObject>) -> String {
    let Some(object) = object else {
        return String::new();
    };

    match object.raw_bytes() {
        Ok(bytes) => {
            let declared = object.byte_length().unwrap_or(bytes.len());
            utf8_from_bytes(bytes, declared)
        }
        Err(_) => object.display_string(),
    }
}
