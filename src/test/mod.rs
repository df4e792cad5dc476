//! Shared mock runtime objects and bridges used across the unit tests.

use crate::{
    runtime::{RuntimeObject, Unarchiver},
    Error, Result,
};

/// A buffer-like object (`__NSCFData`) backed by an owned byte vector.
pub struct BufferObject {
    bytes: Vec<u8>,
    declared: usize,
}

impl BufferObject {
    pub fn new(bytes: Vec<u8>) -> Self {
        let declared = bytes.len();
        BufferObject { bytes, declared }
    }

    /// A buffer whose declared length disagrees with the backing storage.
    pub fn with_declared_length(bytes: Vec<u8>, declared: usize) -> Self {
        BufferObject { bytes, declared }
    }
}

impl RuntimeObject for BufferObject {
    fn class_tag(&self) -> &str {
        "__NSCFData"
    }

    fn display_string(&self) -> String {
        format!("<{} bytes>", self.declared)
    }

    fn byte_length(&self) -> Result<usize> {
        Ok(self.declared)
    }

    fn raw_bytes(&self) -> Result<&[u8]> {
        Ok(&self.bytes)
    }
}

/// A numeric object (`__NSCFNumber`).
pub struct NumberObject(i64);

impl NumberObject {
    pub fn new(value: i64) -> Self {
        NumberObject(value)
    }
}

impl RuntimeObject for NumberObject {
    fn class_tag(&self) -> &str {
        "__NSCFNumber"
    }

    fn display_string(&self) -> String {
        self.0.to_string()
    }

    fn as_integer(&self) -> Result<i64> {
        Ok(self.0)
    }
}

/// A string-like object with a configurable class tag, covering the string and
/// date variants (and lying tags for failure-path tests).
pub struct StringObject {
    tag: String,
    text: String,
}

impl StringObject {
    pub fn new(text: &str) -> Self {
        Self::with_tag("__NSCFString", text)
    }

    pub fn with_tag(tag: &str, text: &str) -> Self {
        StringObject {
            tag: tag.to_string(),
            text: text.to_string(),
        }
    }
}

impl RuntimeObject for StringObject {
    fn class_tag(&self) -> &str {
        &self.tag
    }

    fn display_string(&self) -> String {
        self.text.clone()
    }
}

/// A mapping-like object (`__NSDictionaryI`) over owned string entries.
pub struct DictionaryObject {
    entries: Vec<(String, String)>,
}

impl DictionaryObject {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        DictionaryObject { entries }
    }
}

impl RuntimeObject for DictionaryObject {
    fn class_tag(&self) -> &str {
        "__NSDictionaryI"
    }

    fn display_string(&self) -> String {
        format!("<dictionary of {} entries>", self.entries.len())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(k, _)| k.clone()).collect())
    }

    fn value_for(&self, key: &str) -> Result<Box<dyn RuntimeObject + '_>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| Box::new(StringObject::new(v)) as Box<dyn RuntimeObject>)
            .ok_or_else(|| Error::Error(format!("no value for key '{key}'")))
    }
}

/// An object with a class tag outside the recognized set.
pub struct UnknownObject {
    tag: String,
}

impl UnknownObject {
    pub fn new(tag: &str) -> Self {
        UnknownObject {
            tag: tag.to_string(),
        }
    }
}

impl RuntimeObject for UnknownObject {
    fn class_tag(&self) -> &str {
        &self.tag
    }

    fn display_string(&self) -> String {
        format!("<{}: 0x1337>", self.tag)
    }
}

/// Magic prefix the mock unarchiver recognizes, mirroring a binary plist header.
const ARCHIVE_MAGIC: &[u8] = b"bplist00";

/// Build a payload the [`MockUnarchiver`] will materialize from a JSON body.
pub fn archive_payload(json: &str) -> Vec<u8> {
    let mut payload = ARCHIVE_MAGIC.to_vec();
    payload.extend_from_slice(json.as_bytes());
    payload
}

/// An [`Unarchiver`] that materializes magic-prefixed JSON payloads.
///
/// Payloads without the magic are "not an archive"; payloads with the magic but
/// an unparseable body fail the way a real bridge unarchiver does on a corrupt
/// archive. A JSON object body becomes a [`DictionaryObject`], anything else a
/// non-mapping root.
pub struct MockUnarchiver;

impl Unarchiver for MockUnarchiver {
    fn materialize<'a>(&'a self, bytes: &[u8]) -> Result<Option<Box<dyn RuntimeObject + 'a>>> {
        let Some(body) = bytes.strip_prefix(ARCHIVE_MAGIC) else {
            return Ok(None);
        };

        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| malformed_error!("unreadable archive body: {}", e))?;

        match value {
            serde_json::Value::Object(map) => {
                let entries = map
                    .into_iter()
                    .map(|(k, v)| match v {
                        serde_json::Value::String(s) => (k, s),
                        other => (k, other.to_string()),
                    })
                    .collect();
                Ok(Some(Box::new(DictionaryObject::new(entries))))
            }
            serde_json::Value::String(s) => Ok(Some(Box::new(StringObject::new(&s)))),
            other => Ok(Some(Box::new(StringObject::new(&other.to_string())))),
        }
    }
}

/// An [`Unarchiver`] whose backend is unavailable; every call fails.
pub struct FailingUnarchiver;

impl Unarchiver for FailingUnarchiver {
    fn materialize<'a>(&'a self, _bytes: &[u8]) -> Result<Option<Box<dyn RuntimeObject + 'a>>> {
        Err(Error::Error("unarchiver backend unavailable".to_string()))
    }
}
