// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Configuration loading tests.
//!
//! A transport embeds [`CodecConfig`] in its own TOML file; these tests load
//! it the way such a transport would.

use marko_codec::{AnyCodec, Codec, CodecConfig, Encoding, JsonStyle};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TransportConfig {
    address: String,
    #[serde(default)]
    codec: CodecConfig,
}

#[test]
fn test_embedded_in_transport_config() {
    let config: TransportConfig = toml::from_str(
        r#"
        address = "tcp://127.0.0.1:9000"

        [codec]
        encoding = "json"

        [codec.json]
        style = "compact"
        "#,
    )
    .unwrap();

    assert_eq!(config.address, "tcp://127.0.0.1:9000");
    assert_eq!(config.codec.json.style, JsonStyle::Compact);

    let codec = config.codec.build();
    assert_eq!(codec.dumps(&(1, "a")).unwrap(), br#"[1,"a"]"#);
}

#[test]
fn test_missing_codec_section_uses_defaults() {
    let config: TransportConfig = toml::from_str(r#"address = "ipc:///tmp/bus""#).unwrap();
    assert_eq!(config.codec, CodecConfig::default());
    assert_eq!(config.codec.build(), AnyCodec::default());
}

#[test]
fn test_each_encoding_builds_matching_codec() {
    for encoding in Encoding::ALL {
        let text = format!("encoding = \"{encoding}\"");
        let config = CodecConfig::from_toml_str(&text).unwrap();
        assert_eq!(config.build().encoding(), encoding);
    }
}

#[test]
fn test_json_options_ignored_for_other_encodings() {
    let config = CodecConfig::from_toml_str(
        r#"
        encoding = "ascii"

        [json]
        style = "pretty"
        "#,
    )
    .unwrap();

    let codec = config.build();
    assert_eq!(codec.encoding(), Encoding::Ascii);
    assert_eq!(codec.dumps(&["x", "y"]).unwrap(), b"x:y");
}

#[test]
fn test_malformed_toml_is_a_deserialize_error() {
    let err = CodecConfig::from_toml_str("encoding = ").unwrap_err();
    assert!(err.is_deserialize());
}

#[test]
fn test_unknown_style_rejected() {
    let err = CodecConfig::from_toml_str("[json]\nstyle = \"fancy\"").unwrap_err();
    assert!(err.is_deserialize());
}
