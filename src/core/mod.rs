// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout marko-codec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy shared by every codec
//! - [`Encoding`] - Wire format identifier

pub mod error;

pub use error::{CodecError, Result};

use serde::{Deserialize, Serialize};

/// Wire format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Colon-delimited UTF-8 text
    #[serde(alias = "text")]
    Ascii,
    /// JSON text, UTF-8 encoded
    #[default]
    Json,
    /// Native binary object encoding, only readable by this crate
    #[serde(alias = "native", alias = "bincode")]
    Pickle,
}

/// Error returned when parsing an `Encoding` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEncodingError {
    _private: (),
}

impl std::fmt::Display for ParseEncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid encoding name, expected 'ascii', 'json', or 'pickle'"
        )
    }
}

impl std::error::Error for ParseEncodingError {}

impl std::str::FromStr for Encoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascii" | "text" => Ok(Encoding::Ascii),
            "json" => Ok(Encoding::Json),
            "pickle" | "native" | "bincode" => Ok(Encoding::Pickle),
            _ => Err(ParseEncodingError { _private: () }),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Encoding {
    /// All encodings, in declaration order.
    pub const ALL: [Encoding; 3] = [Encoding::Ascii, Encoding::Json, Encoding::Pickle];

    /// Check if this encoding is the colon-delimited text format.
    pub fn is_ascii(&self) -> bool {
        matches!(self, Encoding::Ascii)
    }

    /// Check if this encoding is JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Encoding::Json)
    }

    /// Check if this encoding is the native binary format.
    pub fn is_pickle(&self) -> bool {
        matches!(self, Encoding::Pickle)
    }

    /// Whether peers written in other languages can read this wire format.
    pub fn is_portable(&self) -> bool {
        !self.is_pickle()
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Json => "json",
            Encoding::Pickle => "pickle",
        }
    }
}
