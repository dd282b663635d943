// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message serialization strategies.
//!
//! This module provides the interchangeable codecs:
//! - [`ascii`] - Colon-delimited text
//! - [`json`] - JSON text
//! - [`pickle`] - Native binary, same-build peers only
//! - [`codec`] - Unified codec interface and runtime selection

pub mod ascii;
pub mod codec;
pub mod json;
pub mod pickle;

pub use codec::{AnyCodec, AsciiCodec, Codec, JsonCodec, PickleCodec};
