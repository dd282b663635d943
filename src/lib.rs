// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Marko Codec
//!
//! Pluggable message serialization for a messaging layer.
//!
//! Three interchangeable codecs share one interface, so the transport can
//! change strategy without touching its call sites:
//! - [`AsciiCodec`] - fields joined with `:`, always decoded as strings
//! - [`JsonCodec`] - JSON text; tuples become arrays
//! - [`PickleCodec`] - native binary with full type fidelity, not portable
//!
//! The wire form is just bytes: no framing, length prefix or schema tag. The
//! reader must already know which codec wrote them.
//!
//! ## Architecture
//!
//! - `core/` - Error taxonomy and the [`Encoding`] identifier
//! - `encoding/` - The [`Codec`] trait, the three codecs and [`AnyCodec`]
//! - `config` - Serde-loadable selection and output options
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use marko_codec::{AnyCodec, Codec, Encoding};
//!
//! for encoding in [Encoding::Ascii, Encoding::Json, Encoding::Pickle] {
//!     let codec = AnyCodec::new(encoding);
//!     let wire = codec.pack(&vec!["sensor", "42"])?;
//!     let fields: Vec<String> = codec.unpack(&wire)?;
//!     assert_eq!(fields, ["sensor", "42"]);
//! }
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{CodecError, Encoding, ParseEncodingError, Result};

// Codecs
pub mod encoding;

pub use encoding::{AnyCodec, AsciiCodec, Codec, JsonCodec, PickleCodec};

// Options
pub mod config;

pub use config::{CodecConfig, JsonOptions, JsonStyle};
