// This file is part of hex-util.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0
// Licensed under the Apache License, Version 2.0 (the "License");
// You may not use this file except in compliance with the License.
// You may obtain a copy of the License at
// http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{HEX_PREFIX, pad_to_even, strip_hex_prefix};
use log::debug;
use std::borrow::Cow;
use thiserror::Error;

/// Error possibly returned when hex-decoding.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeHexError {
    #[error("no hex digits")]
    Empty,

    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("cannot hex-decode")]
    Decode(#[from] const_hex::FromHexError),
}

/// Error possibly returned by `from_ascii`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FromAsciiError {
    #[error("character {character:?} at position {position} is outside of the Latin-1 range")]
    NonLatin1 { character: char, position: usize },
}

/// The number of bytes of the UTF-8 encoding of the given string, which is not necessarily
/// its number of characters.
pub fn get_binary_size(s: &str) -> usize {
    s.len()
}

/// Decode the given, optionally `0x`-prefixed, hex digits as UTF-8 text.
///
/// Leading and trailing `0` digits are trimmed before decoding, regardless of byte boundaries,
/// which drops zero-byte padding. Invalid UTF-8 sequences are replaced with U+FFFD.
pub fn to_utf8(hex: &str) -> Result<String, DecodeHexError> {
    let digits = strip_hex_prefix(hex).trim_matches('0');
    let bytes = decode_hex_digits(&pad_to_even(digits))?;

    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        debug!(hex:%; "replaced invalid UTF-8 sequences");
    }

    Ok(text.into_owned())
}

/// Decode the given, optionally `0x`-prefixed, hex digits pairwise as Latin-1 characters, i.e.
/// every byte becomes the character with that code point. No zero digits are trimmed.
///
/// A trailing unpaired digit is ignored.
pub fn to_ascii(hex: &str) -> Result<String, DecodeHexError> {
    let digits = strip_hex_prefix(hex);
    check_hex_digits(digits)?;

    let (paired, unpaired) = digits.split_at(digits.len() & !1);
    if !unpaired.is_empty() {
        debug!(hex:%, unpaired:%; "ignoring trailing unpaired hex digit");
    }

    let text = decode_hex_digits(paired)?
        .into_iter()
        .map(char::from)
        .collect();

    Ok(text)
}

/// Hex-encode the UTF-8 bytes of the given text, `0x`-prefixed.
///
/// Leading and trailing `0` digits are trimmed from the encoding, regardless of byte
/// boundaries, hence trailing NUL characters do not survive a round trip through `to_utf8`.
pub fn from_utf8(s: &str) -> String {
    let hex = pad_to_even(&const_hex::encode(s)).trim_matches('0').to_owned();
    format!("{HEX_PREFIX}{hex}")
}

/// Hex-encode the given text, `0x`-prefixed, with exactly one byte per character.
///
/// Only Latin-1 characters, i.e. code points up to U+00FF, can be encoded.
pub fn from_ascii(s: &str) -> Result<String, FromAsciiError> {
    let bytes = s
        .chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character)
                .map_err(|_| FromAsciiError::NonLatin1 { character, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{HEX_PREFIX}{}", const_hex::encode(bytes)))
}

/// Hex-decode the given digits which must neither carry a prefix nor have odd length.
pub(crate) fn decode_hex_digits(digits: &str) -> Result<Vec<u8>, DecodeHexError> {
    check_hex_digits(digits)?;
    let bytes = const_hex::decode(digits)?;
    Ok(bytes)
}

fn check_hex_digits(digits: &str) -> Result<(), DecodeHexError> {
    match digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((position, digit)) => Err(DecodeHexError::InvalidDigit { digit, position }),
        None => Ok(()),
    }
}
