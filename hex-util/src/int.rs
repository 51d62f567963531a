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

use crate::{
    DecodeHexError, HEX_PREFIX, pad_to_even, strip_hex_prefix, text::decode_hex_digits,
};
use derive_more::From;
use std::{
    fmt::{self, Display, LowerHex},
    str::FromStr,
};
use thiserror::Error;

/// A non-negative integer which is either native or of arbitrary precision.
#[derive(Debug, Clone, From)]
pub enum Int {
    Native(u64),

    /// Big-endian magnitude; leading zero bytes are insignificant and an empty magnitude is
    /// zero.
    Big(Vec<u8>),
}

impl Int {
    /// Create an `Int` from a big-endian magnitude, preferring the native representation if
    /// the value fits.
    pub fn from_be_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = trim_leading_zeros(bytes.into());

        if bytes.len() <= 8 {
            let n = bytes.iter().fold(0u64, |n, &b| (n << 8) | b as u64);
            Self::Native(n)
        } else {
            Self::Big(bytes)
        }
    }

    /// Base-16 parse of the given digits, with or without `0x` prefix; an odd number of digits
    /// is accepted.
    pub fn from_hex(s: &str) -> Result<Self, DecodeHexError> {
        let digits = strip_hex_prefix(s);
        if digits.is_empty() {
            return Err(DecodeHexError::Empty);
        }

        let bytes = decode_hex_digits(&pad_to_even(digits))?;
        Ok(Self::from_be_bytes(bytes))
    }

    /// The minimal big-endian bytes of this value; zero is a single zero byte.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        match self {
            Int::Native(n) => trim_leading_zeros(n.to_be_bytes().to_vec()),
            Int::Big(bytes) => trim_leading_zeros(bytes.clone()),
        }
    }

    /// The native value, if it fits into a `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match Self::from_be_bytes(self.to_be_bytes()) {
            Int::Native(n) => Some(n),
            Int::Big(_) => None,
        }
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Int::Native(a), Int::Native(b)) => a == b,
            _ => self.to_be_bytes() == other.to_be_bytes(),
        }
    }
}

impl Eq for Int {}

impl From<u8> for Int {
    fn from(n: u8) -> Self {
        Self::Native(n as u64)
    }
}

impl From<u16> for Int {
    fn from(n: u16) -> Self {
        Self::Native(n as u64)
    }
}

impl From<u32> for Int {
    fn from(n: u32) -> Self {
        Self::Native(n as u64)
    }
}

impl From<usize> for Int {
    fn from(n: usize) -> Self {
        Self::Native(n as u64)
    }
}

impl From<u128> for Int {
    fn from(n: u128) -> Self {
        Self::from_be_bytes(n.to_be_bytes())
    }
}

impl FromStr for Int {
    type Err = ParseIntError;

    /// Parse a decimal string of arbitrary length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIntError::Empty);
        }

        let mut magnitude = vec![0u8];
        for (position, c) in s.char_indices() {
            let digit = c
                .to_digit(10)
                .ok_or(ParseIntError::InvalidDigit { digit: c, position })?;

            // magnitude = magnitude * 10 + digit
            let mut carry = digit;
            for b in magnitude.iter_mut().rev() {
                let n = *b as u32 * 10 + carry;
                *b = n as u8;
                carry = n >> 8;
            }
            if carry > 0 {
                magnitude.insert(0, carry as u8);
            }
        }

        Ok(Self::from_be_bytes(magnitude))
    }
}

impl Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int::Native(n) => Display::fmt(n, f),

            Int::Big(_) => {
                let mut magnitude = self.to_be_bytes();
                let mut digits = Vec::new();

                loop {
                    let mut remainder = 0u32;
                    for b in magnitude.iter_mut() {
                        let n = (remainder << 8) | *b as u32;
                        *b = (n / 10) as u8;
                        remainder = n % 10;
                    }
                    digits.push(char::from(b'0' + remainder as u8));

                    magnitude = trim_leading_zeros(magnitude);
                    if magnitude == [0] {
                        break;
                    }
                }

                let digits = digits.into_iter().rev().collect::<String>();
                f.pad_integral(true, "", &digits)
            }
        }
    }
}

impl LowerHex for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int::Native(n) => LowerHex::fmt(n, f),

            Int::Big(_) => {
                let hex = const_hex::encode(self.to_be_bytes());
                let hex = hex.trim_start_matches('0');
                let hex = if hex.is_empty() { "0" } else { hex };
                f.pad_integral(true, HEX_PREFIX, hex)
            }
        }
    }
}

/// Error possibly returned by `Int::from_str`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIntError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid decimal digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// The minimal `0x`-prefixed hex representation of the given integer, without zero padding,
/// e.g. `0x0` for zero.
pub fn int_to_hex(n: impl Into<Int>) -> String {
    let n: Int = n.into();
    format!("{HEX_PREFIX}{n:x}")
}

/// The bytes of `int_to_hex` with the hex digits padded to even length, e.g. `[1]` for one
/// and `[0]` for zero.
pub fn int_to_buffer(n: impl Into<Int>) -> Vec<u8> {
    n.into().to_be_bytes()
}

/// Base-16 parse of the given, optionally `0x`-prefixed, digits.
pub fn from_hex(s: &str) -> Result<Int, DecodeHexError> {
    Int::from_hex(s)
}

fn trim_leading_zeros(mut bytes: Vec<u8>) -> Vec<u8> {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    bytes.drain(..zeros);
    if bytes.is_empty() {
        bytes.push(0);
    }
    bytes
}
