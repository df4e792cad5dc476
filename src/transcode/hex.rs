//! Hex rendering and lenient hex-pair decoding.

use super::payload;
use crate::runtime::RuntimeObject;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render a byte sequence as lower-case hex, two characters per byte, no separators.
///
/// Byte order is preserved; an empty input yields an empty string.
///
/// # Examples
///
/// ```rust
/// use objscope::transcode::hex_from_bytes;
///
/// assert_eq!(hex_from_bytes(&[0x41, 0x42]), "4142");
/// assert_eq!(hex_from_bytes(&[0x00, 0xFF]), "00ff");
/// assert_eq!(hex_from_bytes(&[]), "");
/// ```
#[must_use]
pub fn hex_from_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
    }
    out
}

/// Render the payload of a buffer-like object as lower-case hex.
///
/// `None` and objects without a byte-sequence capability yield an empty string.
/// The payload is clamped to the object's declared byte length.
#[must_use]
pub fn hex_from_object(object: Option<&dyn RuntimeObject>) -> String {
    let Some(object) = object else {
        return String::new();
    };

    match payload(object) {
        Ok(bytes) => hex_from_bytes(bytes),
        Err(_) => String::new(),
    }
}

/// Decode hex pairs into characters by code point, stopping at a `"00"` pair.
///
/// Deliberately lenient: decoding proceeds pair by pair until the input is
/// exhausted, a `"00"` pair is hit (a NUL terminator sentinel - an early stop
/// by design, not an error), or a pair fails to parse as hex. Malformed input
/// therefore yields a partial result rather than a failure; an odd trailing
/// character is ignored.
///
/// # Examples
///
/// ```rust
/// use objscope::transcode::string_from_hex;
///
/// assert_eq!(string_from_hex("4142"), "AB");
/// assert_eq!(string_from_hex("414200ff"), "AB"); // stops at the NUL pair
/// assert_eq!(string_from_hex("41zz42"), "A");    // stops at the bad pair
/// ```
#[must_use]
pub fn string_from_hex(hex: &str) -> String {
    let input = hex.as_bytes();
    let mut out = String::with_capacity(input.len() / 2);

    let mut offset = 0;
    while offset + 2 <= input.len() {
        // Pairs are only meaningful as ASCII; a multi-byte character ends the decode.
        let Ok(pair) = std::str::from_utf8(&input[offset..offset + 2]) else {
            break;
        };

        if pair == "00" {
            break;
        }

        let Ok(byte) = u8::from_str_radix(pair, 16) else {
            break;
        };

        out.push(char::from(byte));
        offset += 2;
    }

    out
}
