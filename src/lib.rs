// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # objscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/objscope.svg)](https://crates.io/crates/objscope)
//! [![Documentation](https://docs.rs/objscope/badge.svg)](https://docs.rs/objscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/objscope/blob/main/LICENSE-APACHE)
//!
//! A cross-platform library for best-effort decoding of live Objective-C runtime objects
//! into readable text. `objscope` sits behind a runtime-instrumentation bridge (a
//! Frida-style agent attached to an inspected process) and turns the opaque, tagged
//! handles that bridge surfaces - byte buffers, boxed numbers, strings, dates, keyed
//! archives - into plain strings or JSON, degrading gracefully when a payload is not
//! what its tag claims.
//!
//! ## Features
//!
//! - **🛡️ Total decoding** - every decode call returns a string; hostile or malformed
//!   process state can never panic or abort a wider inspection session
//! - **🔍 Tag-dispatched strategies** - a closed classification of runtime class tags
//!   picks the most specific interpretation and falls back progressively
//! - **📦 Keyed-archive recovery** - archived dictionary payloads come back as JSON
//!   object text, preserving the bridge's key enumeration order
//! - **🔧 Lenient transcoders** - length-bounded UTF-8 recovery and hex encode/decode
//!   with well-defined truncation on malformed input
//! - **🧩 Bridge-agnostic** - the inspected process is reached only through two small
//!   traits; any instrumentation backend can plug in
//!
//! ## Quick Start
//!
//! Add `objscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! objscope = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use objscope::prelude::*;
//!
//! struct Handle(&'static str);
//!
//! impl RuntimeObject for Handle {
//!     fn class_tag(&self) -> &str {
//!         "__NSCFString"
//!     }
//!
//!     fn display_string(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let decoder = Decoder::new(&NullUnarchiver);
//! assert_eq!(decoder.decode(Some(&Handle("secret token"))), "secret token");
//! assert_eq!(decoder.decode(None), "");
//! ```
//!
//! ## Architecture
//!
//! `objscope` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`runtime`] - The bridge seams: opaque object handles and the unarchive capability
//! - [`decode`] - The total, tag-dispatched [`Decoder`] entry point
//! - [`archive`] - Keyed-archive payload reconstruction to JSON text
//! - [`transcode`] - Pure byte-level transcoders (UTF-8, hex)
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! Data flows one direction: the decoder dispatches on the runtime class tag, may
//! consult the archive layer, which in turn leans on the transcoders. Each stage is
//! free to fail independently; failure means "try the next strategy", and only the
//! top-level entry point converts a genuine internal failure into its sentinel
//! string form.
//!
//! ## Output Forms
//!
//! A decode call produces exactly one of:
//!
//! - `""` - no meaningful content (absent input, unsupported archive shape)
//! - `{"<key>": "<value>", ...}` - a successfully reconstructed archived mapping
//! - decimal integer text - a numeric object
//! - a raw display string - string/date-like objects, or recovered buffer text
//! - `"(could not get string for class: <tag>)"` - unrecognized runtime class
//! - `"(failed to decode)"` - an internal failure was absorbed
//!
//! ## Trust Model
//!
//! Everything behind a [`runtime::RuntimeObject`] handle is attacker-controlled:
//! declared lengths may lie, tags may not match capabilities, and archive payloads
//! may be corrupt. Accessors outside a tag's contract return errors instead of
//! panicking, lengths are clamped against the backing buffer, and the one external
//! capability crossing the trust boundary - the bridge's unarchiver - is treated as
//! a black box whose failures are absorbed like any other strategy miss.
//!
//! ## Development and Testing
//!
//! The crate includes fuzzing support for the transcoders and the dispatcher:
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Run fuzzer
//! cargo +nightly fuzz run transcode --release
//! ```
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

pub mod prelude;

/// Reconstruction of keyed-archive payloads into JSON text.
///
/// See [`archive::unarchive_to_string`] for the single operation this module
/// exposes and its "empty string means not applicable" contract.
pub mod archive;

/// Tag-dispatched, total decoding of opaque runtime objects.
///
/// [`decode::Decoder`] is the main entry point of this crate.
pub mod decode;

/// Abstractions over the instrumentation bridge supplying runtime objects.
///
/// Home of the [`runtime::RuntimeObject`] and [`runtime::Unarchiver`] traits and
/// the [`runtime::ClassKind`] tag classification.
pub mod runtime;

/// Byte-level transcoders used by the decoding strategies.
///
/// Length-bounded UTF-8 recovery and hex encoding/decoding, all pure and total.
pub mod transcode;

/// `objscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations, including the bridge-facing traits.
pub type Result<T> = std::result::Result<T, Error>;

/// `objscope` Error type
///
/// The main error type for all operations in this crate. Errors are internal
/// plumbing here - the public decoding entry points absorb them into sentinel
/// strings - but bridge implementations return them through the same contract.
pub use error::Error;

/// Main entry point for decoding runtime objects.
///
/// See [`decode::Decoder`] for the dispatch and fallback rules.
///
/// # Example
///
/// ```rust
/// use objscope::{Decoder, runtime::NullUnarchiver};
///
/// let decoder = Decoder::new(&NullUnarchiver);
/// assert_eq!(decoder.decode(None), "");
/// ```
pub use decode::Decoder;
