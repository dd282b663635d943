// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Unified codec interface for strategy-agnostic message serialization.
//!
//! A messaging layer holds a codec and calls `pack`/`unpack` on it without
//! knowing which wire format is underneath.
//!
//! ## Architecture
//!
//! - **Core trait** ([`Codec`]) - `dumps`/`loads` plus the `pack`/`unpack` aliases
//! - **Wire-format implementations** ([`AsciiCodec`], [`JsonCodec`], [`PickleCodec`])
//! - **Selector** ([`AnyCodec`]) - picks one of the three at runtime
//!
//! ## Example
//!
//! ```
//! use marko_codec::encoding::{AnyCodec, Codec};
//! use marko_codec::Encoding;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = AnyCodec::new(Encoding::Json);
//! let wire = codec.pack(&(1, 2, 3, "hi"))?;
//! assert_eq!(wire, br#"[1, 2, 3, "hi"]"#);
//!
//! let decoded: serde_json::Value = codec.unpack(&wire)?;
//! assert_eq!(decoded, serde_json::json!([1, 2, 3, "hi"]));
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CodecConfig;
use crate::core::{CodecError, Encoding, Result};

pub use super::ascii::AsciiCodec;
pub use super::json::JsonCodec;
pub use super::pickle::PickleCodec;

// =============================================================================
// Codec Trait
// =============================================================================

/// Paired serializer/deserializer behind a common interface.
///
/// Implementations are stateless: they hold immutable options only, so one
/// instance can be shared between threads and reused for every message.
///
/// The wire form carries no framing, length prefix or schema tag. Bytes
/// produced by one codec are only meaningful to a codec of the same
/// [`Encoding`].
pub trait Codec: Send + Sync {
    /// Get the wire format this codec speaks.
    fn encoding(&self) -> Encoding;

    /// Serialize a payload to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SerializeError`] if the payload contains a value
    /// outside this codec's representable domain.
    fn dumps<T>(&self, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized;

    /// Deserialize bytes produced by the matching `dumps`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DeserializeError`] if the bytes are malformed for
    /// this codec or do not fit the requested type.
    fn loads<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned;

    /// Alias for [`Codec::dumps`]. Not meant to be overridden.
    fn pack<T>(&self, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        self.dumps(payload)
    }

    /// Alias for [`Codec::loads`]. Not meant to be overridden.
    fn unpack<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.loads(bytes)
    }
}

// =============================================================================
// Runtime Selection
// =============================================================================

/// One of the built-in codecs, chosen at runtime.
///
/// Dispatch is a `match`, so the generic `dumps`/`loads` stay available
/// without boxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyCodec {
    /// Colon-delimited text
    Ascii(AsciiCodec),
    /// JSON text
    Json(JsonCodec),
    /// Native binary
    Pickle(PickleCodec),
}

impl AnyCodec {
    /// Create the default codec for an encoding.
    pub fn new(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Ascii => AnyCodec::Ascii(AsciiCodec::new()),
            Encoding::Json => AnyCodec::Json(JsonCodec::new()),
            Encoding::Pickle => AnyCodec::Pickle(PickleCodec::new()),
        }
    }

    /// Create a codec by encoding name (e.g., "ascii", "json", "pickle").
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unsupported`] if the name is not a known encoding.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<Encoding>()
            .map(Self::new)
            .map_err(|_| CodecError::unknown_codec(name))
    }

    /// Create a codec from configuration.
    pub fn from_config(config: &CodecConfig) -> Self {
        match config.encoding {
            Encoding::Json => AnyCodec::Json(JsonCodec::with_options(config.json)),
            other => Self::new(other),
        }
    }
}

impl Default for AnyCodec {
    fn default() -> Self {
        Self::from_config(&CodecConfig::default())
    }
}

impl From<AsciiCodec> for AnyCodec {
    fn from(codec: AsciiCodec) -> Self {
        AnyCodec::Ascii(codec)
    }
}

impl From<JsonCodec> for AnyCodec {
    fn from(codec: JsonCodec) -> Self {
        AnyCodec::Json(codec)
    }
}

impl From<PickleCodec> for AnyCodec {
    fn from(codec: PickleCodec) -> Self {
        AnyCodec::Pickle(codec)
    }
}

impl Codec for AnyCodec {
    fn encoding(&self) -> Encoding {
        match self {
            AnyCodec::Ascii(codec) => codec.encoding(),
            AnyCodec::Json(codec) => codec.encoding(),
            AnyCodec::Pickle(codec) => codec.encoding(),
        }
    }

    fn dumps<T>(&self, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let bytes = match self {
            AnyCodec::Ascii(codec) => codec.dumps(payload),
            AnyCodec::Json(codec) => codec.dumps(payload),
            AnyCodec::Pickle(codec) => codec.dumps(payload),
        }?;
        tracing::trace!(encoding = %self.encoding(), bytes = bytes.len(), "dumped payload");
        Ok(bytes)
    }

    fn loads<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = match self {
            AnyCodec::Ascii(codec) => codec.loads(bytes),
            AnyCodec::Json(codec) => codec.loads(bytes),
            AnyCodec::Pickle(codec) => codec.loads(bytes),
        }?;
        tracing::trace!(encoding = %self.encoding(), bytes = bytes.len(), "loaded payload");
        Ok(value)
    }
}

// =============================================================================
// Tests
// =============================================================================
