//! Byte-level transcoders used by the decoding strategies.
//!
//! Pure functions over untrusted byte sequences; none of them allocate beyond the
//! output string and none of them fail - the error mode of every transcoder is a
//! shorter (possibly empty) result. See the individual functions for the exact
//! truncation rules:
//!
//! - [`utf8_from_bytes`] / [`utf8_from_object`] - length-bounded UTF-8 recovery
//! - [`hex_from_bytes`] / [`hex_from_object`] - lower-case hex rendering
//! - [`string_from_hex`] - lenient, NUL-terminated hex-pair decoding

mod hex;
mod utf8;

pub use hex::{hex_from_bytes, hex_from_object, string_from_hex};
pub use utf8::{utf8_from_bytes, utf8_from_object};

use crate::{runtime::RuntimeObject, Result};

/// The declared-length payload slice of a buffer-like object.
///
/// The declared length and the backing buffer both come from the inspected process
/// and may disagree; the slice is clamped to whichever is shorter.
pub(crate) fn payload(object: &dyn RuntimeObject) -> Result<&[u8]> {
    let bytes = object.raw_bytes()?;
    let declared = object.byte_length()?;
    Ok(&bytes[..declared.min(bytes.len())])
}
