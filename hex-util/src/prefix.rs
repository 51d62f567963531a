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

/// The conventional marker of a hex-encoded string.
pub const HEX_PREFIX: &str = "0x";

/// Whether the given string starts with `0x`; the uppercase `0X` does not count.
pub fn is_hex_prefixed(s: &str) -> bool {
    s.starts_with(HEX_PREFIX)
}

/// Remove a leading `0x` if present, otherwise return the given string as is.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix(HEX_PREFIX).unwrap_or(s)
}

/// Prepend a single `0` if the given string has an odd number of characters. Any string is
/// accepted, i.e. the content is not validated to be hex digits.
///
/// Characters are Unicode scalar values, not UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts once. Hex digits are unaffected.
pub fn pad_to_even(s: &str) -> String {
    if s.chars().count() % 2 == 1 {
        format!("0{s}")
    } else {
        s.to_owned()
    }
}

/// Whether the given string is `0x` followed by zero or more hex digits of either case and
/// nothing else. If a non-zero length in bytes is given, the digit portion must have exactly
/// twice as many characters; a zero length is no constraint.
pub fn is_hex_string(s: &str, length: Option<usize>) -> bool {
    let Some(digits) = s.strip_prefix(HEX_PREFIX) else {
        return false;
    };

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    length
        .filter(|&length| length > 0)
        .is_none_or(|length| length.checked_mul(2) == Some(digits.len()))
}
