// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Native binary codec.
//!
//! Encodes the serde data model directly with `bincode`: fixed-width
//! little-endian integers, length-prefixed sequences, no field names and no
//! type tags. Decoding requires the exact Rust type that was encoded, which
//! is also what gives full type fidelity (a tuple comes back as a tuple).
//!
//! **Not portable.** The bytes are only guaranteed readable by processes
//! built with this crate. Use [`AsciiCodec`](super::AsciiCodec) or
//! [`JsonCodec`](super::JsonCodec) when talking to other languages.
//!
//! ## Example
//!
//! ```
//! use marko_codec::encoding::{Codec, PickleCodec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = PickleCodec::new();
//! let wire = codec.dumps(&(1, 2, 3, "hi".to_string()))?;
//! let back: (i32, i32, i32, String) = codec.loads(&wire)?;
//! assert_eq!(back, (1, 2, 3, "hi".to_string()));
//! # Ok(())
//! # }
//! ```

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{CodecError, Encoding, Result};

use super::codec::Codec;

const CODEC_NAME: &str = "pickle";

/// Native binary codec for same-build peers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickleCodec {
    _private: (),
}

impl PickleCodec {
    /// Create a new native binary codec.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

/// Wire settings shared by both directions.
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

impl Codec for PickleCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Pickle
    }

    fn dumps<T>(&self, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        options()
            .serialize(payload)
            .map_err(|e| CodecError::serialize(CODEC_NAME, format!("{e}")))
    }

    fn loads<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        options()
            .deserialize(bytes)
            .map_err(|e| CodecError::deserialize(CODEC_NAME, format!("{e}")))
    }
}
