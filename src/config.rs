// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec selection and output options.
//!
//! The library never reads files or the environment on its own. These types
//! are meant to be embedded in the configuration of the transport that owns
//! the codec, and can be loaded from TOML:
//!
//! ```
//! use marko_codec::config::{CodecConfig, JsonStyle};
//! use marko_codec::Encoding;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CodecConfig::from_toml_str(
//!     r#"
//!     encoding = "json"
//!
//!     [json]
//!     style = "compact"
//!     "#,
//! )?;
//! assert_eq!(config.encoding, Encoding::Json);
//! assert_eq!(config.json.style, JsonStyle::Compact);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CodecError, Encoding, Result};
use crate::encoding::AnyCodec;

/// Layout of JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// One line, `", "` between items and `": "` after keys, non-ASCII
    /// characters written as `\uXXXX` escapes
    #[default]
    Spaced,
    /// One line, no whitespace, non-ASCII written raw
    Compact,
    /// Two-space indentation
    Pretty,
}

/// Options for the JSON codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Output layout
    pub style: JsonStyle,
}

impl JsonOptions {
    /// Set the output layout.
    pub fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

/// Which codec a transport should use, and how it is tuned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Wire format
    pub encoding: Encoding,

    /// Only consulted when `encoding` is JSON
    pub json: JsonOptions,
}

impl CodecConfig {
    /// Create a configuration for an encoding with default options.
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    /// Replace the JSON options.
    pub fn with_json(mut self, json: JsonOptions) -> Self {
        self.json = json;
        self
    }

    /// Parse a configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CodecError::deserialize("config", format!("{e}")))
    }

    /// Render this configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CodecError::serialize("config", format!("{e}")))
    }

    /// Build the configured codec.
    pub fn build(&self) -> AnyCodec {
        AnyCodec::from_config(self)
    }
}
