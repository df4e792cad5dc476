//! # objscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the objscope library. Import this module to get quick access to the essential
//! types for decoding runtime objects.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all objscope operations
pub use crate::Error;

/// The result type used throughout objscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Total, tag-dispatched decoder over opaque runtime objects
pub use crate::Decoder;

/// Keyed-archive payload reconstruction
pub use crate::archive::unarchive_to_string;

// ================================================================================================
// Bridge Seams
// ================================================================================================

/// The opaque handle and unarchive capability supplied by the instrumentation bridge
pub use crate::runtime::{NullUnarchiver, RuntimeObject, Unarchiver};

/// Classification of recognized runtime class tags
pub use crate::runtime::ClassKind;

// ================================================================================================
// Byte Transcoders
// ================================================================================================

/// Pure byte-level transcoders backing the decoding strategies
pub use crate::transcode::{
    hex_from_bytes, hex_from_object, string_from_hex, utf8_from_bytes, utf8_from_object,
};
