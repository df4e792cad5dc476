//! Tag-dispatched, total decoding of opaque runtime objects to text.
//!
//! [`Decoder`] is the crate's main entry point. It inspects the runtime-reported
//! class tag of an object and routes it to the most specific strategy that yields
//! usable text, falling back progressively: a byte buffer may be an archived
//! object graph, a raw text payload, or just opaque bytes, and the only way to
//! know is to try the interpretations in that order and accept the first hit.
//!
//! The decode entry point is total. Whatever the inspected process throws at it -
//! unknown classes, lying length fields, accessors that fail - the result is
//! always a string, never a panic or an error. One malformed object must never
//! abort a wider inspection session.

use crate::{
    archive::unarchive_to_string,
    runtime::{ClassKind, RuntimeObject, Unarchiver},
    transcode::{payload, utf8_from_object},
    Result,
};

/// Sentinel returned when an internal failure interrupted decoding.
const DECODE_FAILED: &str = "(failed to decode)";

/// Best-effort decoder over opaque runtime objects.
///
/// Holds a reference to the bridge's [`Unarchiver`] capability and nothing else;
/// every decode call is a pure function of its input object. Decoders are cheap to
/// construct, so independent objects can be decoded concurrently with a decoder
/// per task - no state is held across calls.
///
/// # Examples
///
/// ```rust
/// use objscope::{Decoder, runtime::{NullUnarchiver, RuntimeObject}};
///
/// struct Number(i64);
///
/// impl RuntimeObject for Number {
///     fn class_tag(&self) -> &str {
///         "__NSCFNumber"
///     }
///
///     fn display_string(&self) -> String {
///         self.0.to_string()
///     }
///
///     fn as_integer(&self) -> objscope::Result<i64> {
///         Ok(self.0)
///     }
/// }
///
/// let decoder = Decoder::new(&NullUnarchiver);
/// assert_eq!(decoder.decode(Some(&Number(42))), "42");
/// assert_eq!(decoder.decode(None), "");
/// ```
pub struct Decoder<'a> {
    unarchiver: &'a dyn Unarchiver,
}

impl<'a> Decoder<'a> {
    /// Create a decoder backed by the given unarchive capability.
    ///
    /// Bridges without a keyed-archive facility pass
    /// [`NullUnarchiver`](crate::runtime::NullUnarchiver).
    #[must_use]
    pub fn new(unarchiver: &'a dyn Unarchiver) -> Self {
        Decoder { unarchiver }
    }

    /// Decode an object into the most readable text available.
    ///
    /// Total over arbitrary input. The result is one of:
    ///
    /// - `""` for a `None` input
    /// - a JSON object string for a buffer payload holding an archived mapping
    /// - recovered UTF-8 text for a buffer payload holding valid text
    /// - decimal text for a numeric object
    /// - the display string for string-like and date-like objects (and as the
    ///   last resort for undecodable buffers)
    /// - `"(could not get string for class: <tag>)"` for unrecognized tags
    /// - `"(failed to decode)"` when an internal failure interrupted decoding
    #[must_use]
    pub fn decode(&self, object: Option<&dyn RuntimeObject>) -> String {
        let Some(object) = object else {
            return String::new();
        };

        // Single absorption point: strategies thread Results, nothing propagates.
        match self.decode_object(object) {
            Ok(text) => text,
            Err(_) => DECODE_FAILED.to_string(),
        }
    }

    fn decode_object(&self, object: &dyn RuntimeObject) -> Result<String> {
        match ClassKind::from_tag(object.class_tag()) {
            Some(ClassKind::Data) => Ok(self.decode_buffer(object)),
            Some(ClassKind::Number) => Ok(object.as_integer()?.to_string()),
            Some(
                ClassKind::String
                | ClassKind::TaggedString
                | ClassKind::Date
                | ClassKind::TaggedDate,
            ) => Ok(object.display_string()),
            Some(ClassKind::Dictionary) | None => Ok(format!(
                "(could not get string for class: {})",
                object.class_tag()
            )),
        }
    }

    /// Buffer strategy chain: archived mapping, then raw UTF-8, then the numeric
    /// and generic-display fallthrough of the string branch.
    fn decode_buffer(&self, object: &dyn RuntimeObject) -> String {
        if let Ok(bytes) = payload(object) {
            let archived = unarchive_to_string(self.unarchiver, bytes);
            if !archived.is_empty() {
                return archived;
            }
        }

        let text = utf8_from_object(Some(object));
        if !text.is_empty() {
            return text;
        }

        match object.as_integer() {
            Ok(value) => value.to_string(),
            Err(_) => object.display_string(),
        }
    }
}
