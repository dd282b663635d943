// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Colon-delimited text codec.
//!
//! The payload must be a sequence of strings. Fields are joined with `:` and
//! sent as UTF-8; decoding splits on `:` and always yields strings.
//!
//! # Known limitation
//!
//! There is no escaping. A field that itself contains `:` is split into
//! several fields on the way back, so `["a:b", "c"]` returns as
//! `["a", "b", "c"]`. Callers must keep `:` out of their fields.
//!
//! ## Example
//!
//! ```
//! use marko_codec::encoding::{AsciiCodec, Codec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = AsciiCodec::new();
//! let wire = codec.dumps(&["1", "2", "3", "hi"])?;
//! assert_eq!(wire, b"1:2:3:hi");
//!
//! let fields: Vec<String> = codec.loads(&wire)?;
//! assert_eq!(fields, ["1", "2", "3", "hi"]);
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::core::{CodecError, Encoding, Result};

use super::codec::Codec;

/// Field separator on the wire.
pub const DELIMITER: char = ':';

const CODEC_NAME: &str = "ascii";

/// Codec joining string fields with [`DELIMITER`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiCodec {
    _private: (),
}

impl AsciiCodec {
    /// Create a new ASCII codec.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Split wire bytes into raw fields.
    ///
    /// Empty input yields a single empty field.
    pub fn fields(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| CodecError::deserialize(CODEC_NAME, format!("invalid UTF-8: {e}")))?;
        Ok(text.split(DELIMITER).map(str::to_owned).collect())
    }

    /// Flatten a payload into its string fields.
    fn to_fields<T>(payload: &T) -> Result<Vec<String>>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(payload)
            .map_err(|e| CodecError::serialize(CODEC_NAME, format!("{e}")))?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(CodecError::serialize(
                    CODEC_NAME,
                    format!("expected a sequence of strings, got {}", kind(&other)),
                ))
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s),
                other => Err(CodecError::serialize(
                    CODEC_NAME,
                    format!("element {index} is {}, expected a string", kind(&other)),
                )),
            })
            .collect()
    }
}

impl Codec for AsciiCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Ascii
    }

    fn dumps<T>(&self, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let fields = Self::to_fields(payload)?;
        let delimiter = DELIMITER.to_string();
        Ok(fields.join(&delimiter).into_bytes())
    }

    fn loads<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let fields = self
            .fields(bytes)?
            .into_iter()
            .map(Value::String)
            .collect();
        serde_json::from_value(Value::Array(fields))
            .map_err(|e| CodecError::deserialize(CODEC_NAME, format!("{e}")))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}
