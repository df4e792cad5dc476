use std::str::FromStr;

use strum::{EnumIter, EnumString};

/// Classification of the runtime-reported class tags this decoder knows how to handle.
///
/// The inspected runtime reports dynamic class names as strings (an open set - obfuscated
/// or private classes show up here too). Decoding strategies are keyed on a closed set of
/// recognized categories instead of raw string comparison, so that each strategy only ever
/// sees objects whose accessors it is allowed to call. Tags outside this set stay as plain
/// strings and take the diagnostic path in [`crate::decode::Decoder::decode`].
///
/// The string mappings are the concrete class names the Objective-C runtime reports for
/// the toll-free-bridged CoreFoundation implementations of Foundation types.
///
/// # Examples
///
/// ```rust
/// use objscope::runtime::ClassKind;
///
/// assert_eq!(ClassKind::from_tag("__NSCFData"), Some(ClassKind::Data));
/// assert_eq!(ClassKind::from_tag("__NSDictionaryI"), Some(ClassKind::Dictionary));
/// assert_eq!(ClassKind::from_tag("SwiftObject"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum ClassKind {
    /// Raw byte buffer (`NSData` and friends). Candidate for archive and UTF-8 recovery.
    #[strum(serialize = "__NSCFData")]
    Data,
    /// Boxed number (`NSNumber`). Rendered through its integer value.
    #[strum(serialize = "__NSCFNumber")]
    Number,
    /// Heap-allocated string (`NSString`). Rendered through its display form.
    #[strum(serialize = "__NSCFString")]
    String,
    /// Pointer-packed short string. Rendered through its display form.
    #[strum(serialize = "NSTaggedPointerString")]
    TaggedString,
    /// Heap-allocated date (`NSDate`). Rendered through its display form.
    #[strum(serialize = "__NSDate")]
    Date,
    /// Pointer-packed date. Rendered through its display form.
    #[strum(serialize = "__NSTaggedDate")]
    TaggedDate,
    /// Key/value mapping (`NSDictionary`, mutable or immutable flavor).
    ///
    /// Only produced in practice by unarchiving a keyed archive; a dictionary
    /// arriving at the top-level dispatcher is reported as unsupported rather
    /// than stringified.
    #[strum(serialize = "__NSDictionary", serialize = "__NSDictionaryI")]
    Dictionary,
}

impl ClassKind {
    /// Classify a runtime-reported class tag, `None` for tags outside the recognized set.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::from_str(tag).ok()
    }

    /// `true` for the key/value mapping variant.
    #[must_use]
    pub fn is_mapping(self) -> bool {
        matches!(self, ClassKind::Dictionary)
    }
}
