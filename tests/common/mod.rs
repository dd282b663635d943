// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use serde::{Serialize, Serializer};

use marko_codec::{AnyCodec, Encoding};

/// A value no codec can represent: its `Serialize` impl always fails.
pub struct Unrepresentable;

impl Serialize for Unrepresentable {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(serde::ser::Error::custom("value has no wire representation"))
    }
}

/// One default codec per encoding.
pub fn all_codecs() -> Vec<AnyCodec> {
    Encoding::ALL.into_iter().map(AnyCodec::new).collect()
}

/// Owned strings from string literals.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
