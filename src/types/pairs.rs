// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `key=value,key=value` parsing for selectors, labels and annotations

use crate::error::{Result, ServiceCreateError};
use std::collections::BTreeMap;

/// Parse a comma separated list of `key=value` pairs.
///
/// Each token is split at its first `=`, so values may themselves contain `=`.
/// A token without `=` or with an empty key fails the whole parse.
pub fn parse_pairs(field: &'static str, input: &str) -> Result<BTreeMap<String, String>> {
    input
        .split(',')
        .map(|token| {
            let invalid = || ServiceCreateError::InvalidPair {
                field,
                token: token.to_string(),
            };
            let (key, value) = token.split_once('=').ok_or_else(invalid)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(invalid());
            }
            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
