//! Reconstruction of keyed-archive payloads into JSON text.
//!
//! Buffer payloads captured from an inspected process frequently turn out to be
//! keyed archives (serialized object graphs). This module asks the bridge's
//! [`Unarchiver`] to materialize such a payload and, when the reconstructed root
//! is a dictionary variant, renders it as a JSON object string of
//! `key -> display string` pairs.
//!
//! Everything else - payloads that are not archives, roots that are not mappings,
//! and bridge-side failures - collapses to an empty string so that the dispatcher
//! can fall through to its next strategy. Archives are optional; a payload that is
//! not one is never an error.

use serde_json::{Map, Value};

use crate::{
    runtime::{ClassKind, Unarchiver},
    Result,
};

/// Attempt to render a byte payload as the JSON form of an archived mapping.
///
/// Returns an empty string when the payload is not a recognized archive, when the
/// reconstructed root is not a dictionary variant, or when reconstruction fails -
/// all of which mean "try another strategy", never an error. Key order in the JSON
/// output follows the bridge's enumeration order for this call; no ordering is
/// promised across calls.
///
/// # Examples
///
/// ```rust
/// use objscope::{archive::unarchive_to_string, runtime::NullUnarchiver};
///
/// // A bridge without an unarchive facility recognizes nothing
/// assert_eq!(unarchive_to_string(&NullUnarchiver, b"bplist00..."), "");
/// ```
#[must_use]
pub fn unarchive_to_string(unarchiver: &dyn Unarchiver, bytes: &[u8]) -> String {
    match try_unarchive(unarchiver, bytes) {
        Ok(Some(json)) => json,
        Ok(None) | Err(_) => String::new(),
    }
}

/// Materialize the payload and serialize a dictionary root, `Ok(None)` when the
/// payload is not an archive or the root is not a mapping.
fn try_unarchive(unarchiver: &dyn Unarchiver, bytes: &[u8]) -> Result<Option<String>> {
    let Some(root) = unarchiver.materialize(bytes)? else {
        return Ok(None);
    };

    match ClassKind::from_tag(root.class_tag()) {
        Some(kind) if kind.is_mapping() => {
            let mut entries = Map::new();
            for key in root.keys()? {
                let value = root.value_for(&key)?;
                entries.insert(key, Value::String(value.display_string()));
            }

            Ok(Some(serde_json::to_string(&Value::Object(entries))?))
        }
        // Non-mapping roots are explicitly not supported; pass them through untouched.
        _ => Ok(None),
    }
}
