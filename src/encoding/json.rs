// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON codec.
//!
//! Serializes through `serde_json` and ships the text as UTF-8. JSON has no
//! tuple type, so tuples and sequences produce identical bytes and decode as
//! arrays.
//!
//! Decoding has no nesting limit: anything `dumps` writes, `loads` reads back.
//! Deep documents are parsed on a heap-grown stack.
//!
//! ## Example
//!
//! ```
//! use marko_codec::encoding::{Codec, JsonCodec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = JsonCodec::new();
//! let wire = codec.dumps(&(1, 2, 3, "hi"))?;
//! assert_eq!(wire, br#"[1, 2, 3, "hi"]"#);
//!
//! let value: serde_json::Value = codec.loads(&wire)?;
//! assert_eq!(value, serde_json::json!([1, 2, 3, "hi"]));
//! # Ok(())
//! # }
//! ```

use std::io;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::config::{JsonOptions, JsonStyle};
use crate::core::{CodecError, Encoding, Result};

use super::codec::Codec;

const CODEC_NAME: &str = "json";

/// JSON codec for structured payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    options: JsonOptions,
}

impl JsonCodec {
    /// Create a new JSON codec with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON codec with explicit options.
    pub fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Create a JSON codec using the given output style.
    pub fn with_style(style: JsonStyle) -> Self {
        Self::with_options(JsonOptions::default().with_style(style))
    }

    /// Get the options in use.
    pub fn options(&self) -> JsonOptions {
        self.options
    }
}

impl Codec for JsonCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Json
    }

    fn dumps<T>(&self, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let mut buf = Vec::with_capacity(128);
        let written = match self.options.style {
            JsonStyle::Spaced => {
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
                payload.serialize(&mut ser)
            }
            JsonStyle::Compact => serde_json::to_writer(&mut buf, payload),
            JsonStyle::Pretty => serde_json::to_writer_pretty(&mut buf, payload),
        };
        written.map_err(|e| CodecError::serialize(CODEC_NAME, format!("{e}")))?;
        Ok(buf)
    }

    fn loads<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| CodecError::deserialize(CODEC_NAME, format!("invalid UTF-8: {e}")))?;
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let value: T = Deserialize::deserialize(serde_stacker::Deserializer::new(&mut de))
            .map_err(|e| CodecError::deserialize(CODEC_NAME, format!("{e}")))?;
        de.end()
            .map_err(|e| CodecError::deserialize(CODEC_NAME, format!("{e}")))?;
        Ok(value)
    }
}

/// Single-line output with `", "` between items and `": "` after keys, and
/// every character outside printable ASCII written as a `\uXXXX` escape.
///
/// This is the default output of Python's `json.dumps`, so peers comparing
/// raw bytes see the same text.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
