// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for marko-codec.
//!
//! Every codec failure is one of:
//! - a payload that cannot be represented on the wire (serialization)
//! - bytes that are not valid for the codec reading them (deserialization)
//! - a codec that does not exist (unsupported)
//!
//! Nothing in this crate catches or logs these errors; they always propagate
//! to the caller.

use thiserror::Error;

/// Errors that can occur while packing or unpacking a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The in-memory payload is outside the codec's representable domain.
    #[error("{codec} serialize error: {message}")]
    SerializeError {
        /// Codec context (e.g., "ascii", "json", "pickle")
        codec: String,
        /// Error message
        message: String,
    },

    /// The byte sequence is not valid for the codec.
    #[error("{codec} deserialize error: {message}")]
    DeserializeError {
        /// Codec context (e.g., "ascii", "json", "pickle")
        codec: String,
        /// Error message
        message: String,
    },

    /// Unsupported codec or feature
    #[error("Unsupported feature: '{feature}'")]
    Unsupported {
        /// What is not supported
        feature: String,
    },
}

impl CodecError {
    /// Create a serialization error.
    pub fn serialize(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::SerializeError {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create a deserialization error.
    pub fn deserialize(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::DeserializeError {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create an "unknown codec" error.
    pub fn unknown_codec(encoding: impl Into<String>) -> Self {
        Self::unsupported(format!("unknown codec: {}", encoding.into()))
    }

    /// Check if this error was raised while serializing.
    pub fn is_serialize(&self) -> bool {
        matches!(self, CodecError::SerializeError { .. })
    }

    /// Check if this error was raised while deserializing.
    pub fn is_deserialize(&self) -> bool {
        matches!(self, CodecError::DeserializeError { .. })
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::SerializeError { codec, message } => vec![
                ("direction", "serialize".to_string()),
                ("codec", codec.clone()),
                ("message", message.clone()),
            ],
            CodecError::DeserializeError { codec, message } => vec![
                ("direction", "deserialize".to_string()),
                ("codec", codec.clone()),
                ("message", message.clone()),
            ],
            CodecError::Unsupported { feature } => vec![("feature", feature.clone())],
        }
    }
}

/// Result type for marko-codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_error() {
        let err = CodecError::serialize("ascii", "element 1 is a number");
        assert!(err.is_serialize());
        assert!(!err.is_deserialize());
        assert_eq!(
            err.to_string(),
            "ascii serialize error: element 1 is a number"
        );
    }

    #[test]
    fn test_deserialize_error() {
        let err = CodecError::deserialize("json", "expected value at line 1 column 1");
        assert!(err.is_deserialize());
        assert!(!err.is_serialize());
        assert_eq!(
            err.to_string(),
            "json deserialize error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_unsupported_error() {
        let err = CodecError::unsupported("framing");
        assert!(matches!(err, CodecError::Unsupported { .. }));
        assert_eq!(err.to_string(), "Unsupported feature: 'framing'");
    }

    #[test]
    fn test_unknown_codec_error() {
        let err = CodecError::unknown_codec("msgpack");
        assert!(matches!(err, CodecError::Unsupported { .. }));
        assert_eq!(
            err.to_string(),
            "Unsupported feature: 'unknown codec: msgpack'"
        );
        assert_eq!(err, CodecError::unsupported("unknown codec: msgpack"));
    }

    #[test]
    fn test_log_fields_serialize() {
        let err = CodecError::serialize("pickle", "boom");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("direction", "serialize".to_string()));
        assert_eq!(fields[1], ("codec", "pickle".to_string()));
        assert_eq!(fields[2], ("message", "boom".to_string()));
    }

    #[test]
    fn test_log_fields_deserialize() {
        let err = CodecError::deserialize("ascii", "invalid utf-8");
        let fields = err.log_fields();
        assert_eq!(fields[0].1, "deserialize");
        assert_eq!(fields[1].1, "ascii");
    }

    #[test]
    fn test_log_fields_unsupported() {
        let err = CodecError::unsupported("feature");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "feature");
        assert_eq!(fields[0].1, "feature");
    }

    #[test]
    fn test_error_clone() {
        let err1 = CodecError::deserialize("json", "message");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
        assert_eq!(err1.to_string(), err2.to_string());
    }
}
