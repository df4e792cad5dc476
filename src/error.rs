use thiserror::Error;

#[allow(unused_macros)]
macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure mode in this crate is internal plumbing: the public decoding entry points
/// absorb these errors and degrade to sentinel strings, because the inspected process is
/// untrusted and a malformed object must never abort a wider inspection session. The enum is
/// still public so that [`crate::runtime::RuntimeObject`] and [`crate::runtime::Unarchiver`]
/// implementations can participate in the same error contract.
///
/// # Error Categories
///
/// ## Accessor Contract Errors
/// - [`Error::Unsupported`] - An accessor was called on an object whose class tag does not
///   support it (the expected "not applicable" leg of strategy fallback)
///
/// ## Payload Errors
/// - [`Error::Malformed`] - A payload or archive did not have the shape it claimed
/// - [`Error::JsonError`] - Serializing a reconstructed mapping to JSON failed
///
/// # Examples
///
/// ```rust
/// use objscope::{Error, runtime::RuntimeObject};
///
/// struct Opaque;
///
/// impl RuntimeObject for Opaque {
///     fn class_tag(&self) -> &str {
///         "__NSCFData"
///     }
///
///     fn display_string(&self) -> String {
///         "<opaque>".to_string()
///     }
/// }
///
/// // Accessors outside the tag contract fail safely instead of panicking
/// match Opaque.as_integer() {
///     Err(Error::Unsupported { accessor, class }) => {
///         eprintln!("{} is not valid for {}", accessor, class);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An accessor was invoked on an object whose class tag does not support it.
    ///
    /// This is the normal signal that a decoding strategy does not apply to the
    /// object at hand. The dispatcher treats it as "try the next strategy", not
    /// as a hard failure.
    ///
    /// # Fields
    ///
    /// * `accessor` - Name of the accessor that was called
    /// * `class` - The runtime class tag of the object it was called on
    #[error("Accessor '{accessor}' is not supported for class '{class}'")]
    Unsupported {
        /// Name of the accessor that was called
        accessor: &'static str,
        /// The runtime class tag of the object it was called on
        class: String,
    },

    /// A payload did not have the shape its class tag or archive header claimed.
    ///
    /// Payload contents come from an inspected, potentially adversarial process,
    /// so malformed data is an expected condition. The error records the source
    /// location where the malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Serializing a reconstructed key/value mapping to JSON failed.
    ///
    /// Wraps failures from the `serde_json` serializer used when an archived
    /// dictionary payload is rendered as a JSON object string.
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories or for wrapping
    /// bridge-side failures with additional context.
    #[error("{0}")]
    Error(String),
}
