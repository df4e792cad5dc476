//! Abstractions over the instrumentation bridge that surfaces live runtime objects.
//!
//! Everything this crate decodes arrives as an opaque handle owned by an external
//! bridge (a Frida-style agent attached to the inspected process). The bridge side
//! is deliberately out of scope; this module defines the two seams it plugs into:
//!
//! - [`RuntimeObject`] - a handle to one in-process value, exposing the accessors
//!   that are valid for its runtime-reported class tag
//! - [`Unarchiver`] - the bridge's keyed-archive materialization capability, used
//!   to reconstruct object graphs out of byte payloads
//!
//! Both traits use [`crate::Result`] so that a call outside an object's tag
//! contract fails safely instead of corrupting decoder output. The default method
//! bodies already return [`crate::Error::Unsupported`]; bridge implementations only
//! override the accessors their objects actually support.

mod classkind;

pub use classkind::ClassKind;

use crate::{Error, Result};

fn unsupported(accessor: &'static str, class: &str) -> Error {
    Error::Unsupported {
        accessor,
        class: class.to_string(),
    }
}

/// A handle to a value living inside an inspected process.
///
/// Objects are immutable for the duration of a decode call and consumed exactly once;
/// no decoder component retains a reference after producing its string result. The
/// payload behind a handle is attacker-controlled and must be treated as untrusted.
///
/// Which accessors are valid is determined by [`class_tag`](Self::class_tag) (see
/// [`ClassKind`] for the recognized categories). Calling an accessor outside the tag
/// contract returns [`Error::Unsupported`]; it never panics.
///
/// # Examples
///
/// A minimal buffer-like handle:
///
/// ```rust
/// use objscope::runtime::RuntimeObject;
///
/// struct Payload(Vec<u8>);
///
/// impl RuntimeObject for Payload {
///     fn class_tag(&self) -> &str {
///         "__NSCFData"
///     }
///
///     fn display_string(&self) -> String {
///         format!("<{} bytes>", self.0.len())
///     }
///
///     fn byte_length(&self) -> objscope::Result<usize> {
///         Ok(self.0.len())
///     }
///
///     fn raw_bytes(&self) -> objscope::Result<&[u8]> {
///         Ok(&self.0)
///     }
/// }
/// ```
pub trait RuntimeObject {
    /// The runtime-reported dynamic class name of this object.
    ///
    /// An open set - anything the inspected runtime chooses to report. Recognized
    /// names classify via [`ClassKind::from_tag`].
    fn class_tag(&self) -> &str;

    /// The generic, always-available textual form of this object.
    ///
    /// Last-resort representation; every object supports it regardless of tag.
    fn display_string(&self) -> String;

    /// Number of payload bytes. Buffer-like objects only.
    ///
    /// # Errors
    /// [`Error::Unsupported`] when the object is not buffer-like.
    fn byte_length(&self) -> Result<usize> {
        Err(unsupported("byte_length", self.class_tag()))
    }

    /// The raw payload bytes. Buffer-like objects only; contents are untrusted.
    ///
    /// # Errors
    /// [`Error::Unsupported`] when the object is not buffer-like.
    fn raw_bytes(&self) -> Result<&[u8]> {
        Err(unsupported("raw_bytes", self.class_tag()))
    }

    /// The integer value of a numeric-tagged object.
    ///
    /// # Errors
    /// [`Error::Unsupported`] when the object is not numeric.
    fn as_integer(&self) -> Result<i64> {
        Err(unsupported("as_integer", self.class_tag()))
    }

    /// The keys of a mapping-like object, in whatever order the runtime enumerates them.
    ///
    /// The order is deterministic within a call but not guaranteed stable across calls.
    ///
    /// # Errors
    /// [`Error::Unsupported`] when the object is not mapping-like.
    fn keys(&self) -> Result<Vec<String>> {
        Err(unsupported("keys", self.class_tag()))
    }

    /// The value stored under `key` in a mapping-like object.
    ///
    /// # Errors
    /// [`Error::Unsupported`] when the object is not mapping-like, or bridge-side
    /// failures when `key` cannot be resolved.
    fn value_for(&self, key: &str) -> Result<Box<dyn RuntimeObject + '_>> {
        let _ = key;
        Err(unsupported("value_for", self.class_tag()))
    }
}

/// The bridge's object-graph materialization capability (keyed unarchiving).
///
/// This is the one external dependency of the decoder that crosses a trust boundary:
/// the bridge hands the payload to the inspected runtime's own unarchiver, which may
/// itself misbehave on malformed input. Implementations report "this payload is not
/// an archive" as `Ok(None)` - archives are optional, most payloads are not archives,
/// and a missing archive is not an error.
pub trait Unarchiver {
    /// Attempt to reconstruct the root object of a serialized object graph.
    ///
    /// Returns `Ok(None)` when the payload is not a recognized archive.
    ///
    /// # Errors
    /// Bridge-side failures while materializing a payload that did look like an archive.
    fn materialize<'a>(&'a self, bytes: &[u8]) -> Result<Option<Box<dyn RuntimeObject + 'a>>>;
}

/// An [`Unarchiver`] for bridges without a keyed-archive facility.
///
/// Treats every payload as "not an archive", which makes the decoder skip straight
/// to the raw UTF-8 strategy for buffer-like objects.
pub struct NullUnarchiver;

impl Unarchiver for NullUnarchiver {
    fn materialize<'a>(&'a self, _bytes: &[u8]) -> Result<Option<Box<dyn RuntimeObject + 'a>>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl RuntimeObject for Bare {
        fn class_tag(&self) -> &str {
            "__NSCFString"
        }

        fn display_string(&self) -> String {
            "bare".to_string()
        }
    }

    #[test]
    fn test_default_accessors_fail_safely() {
        let obj = Bare;

        assert!(matches!(
            obj.byte_length(),
            Err(Error::Unsupported {
                accessor: "byte_length",
                ..
            })
        ));
        assert!(matches!(
            obj.raw_bytes(),
            Err(Error::Unsupported {
                accessor: "raw_bytes",
                ..
            })
        ));
        assert!(matches!(
            obj.as_integer(),
            Err(Error::Unsupported {
                accessor: "as_integer",
                ..
            })
        ));
        assert!(matches!(obj.keys(), Err(Error::Unsupported { .. })));
        assert!(matches!(obj.value_for("k"), Err(Error::Unsupported { .. })));
    }

    #[test]
    fn test_unsupported_carries_class_tag() {
        let err = Bare.as_integer().unwrap_err();
        match err {
            Error::Unsupported { accessor, class } => {
                assert_eq!(accessor, "as_integer");
                assert_eq!(class, "__NSCFString");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_null_unarchiver_never_materializes() {
        let unarchiver = NullUnarchiver;
        assert!(unarchiver.materialize(&[]).unwrap().is_none());
        assert!(unarchiver.materialize(b"bplist00").unwrap().is_none());
    }
}
