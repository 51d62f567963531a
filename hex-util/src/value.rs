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

//! The utility set over dynamically typed [Value]s.
//!
//! Where the typed functions rely on the compiler, these check the type of each argument at
//! runtime and fail with a [TypeError] naming the function, the parameter and the actual type.
//! [strip_hex_prefix] and [is_hex_string] never fail: the former passes through anything that
//! is not a string, e.g. `null`, and the latter simply answers `false`.

use crate::{DecodeHexError, GetKeysError, Int, ParseIntError, collection::get_key};
use serde_json::Value;
use thiserror::Error;

/// Errors of the dynamically typed utility set.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    GetKeys(#[from] GetKeysError),

    #[error("cannot parse integer")]
    ParseInt(#[from] ParseIntError),

    #[error("cannot parse hex integer")]
    DecodeHex(#[from] DecodeHexError),
}

/// A type-contract violation: a function was called with an argument of the wrong type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{function} requires input {parameter:?} to be {expected}, but was {actual}")]
pub struct TypeError {
    pub function: &'static str,
    pub parameter: &'static str,
    pub expected: &'static str,
    pub actual: &'static str,
}

/// The name of the runtime type of the given value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// See [crate::is_hex_prefixed].
pub fn is_hex_prefixed(s: &Value) -> Result<bool, Error> {
    let s = expect_str(s, "is_hex_prefixed", "str")?;
    Ok(crate::is_hex_prefixed(s))
}

/// See [crate::strip_hex_prefix]; any value other than a string is returned unchanged.
pub fn strip_hex_prefix(s: Value) -> Value {
    match s {
        Value::String(s) => Value::String(crate::strip_hex_prefix(&s).to_owned()),
        other => other,
    }
}

/// See [crate::pad_to_even].
pub fn pad_to_even(s: &Value) -> Result<String, Error> {
    let s = expect_str(s, "pad_to_even", "value")?;
    Ok(crate::pad_to_even(s))
}

/// Dispatch the given value to the integer representations: a JSON number must be a
/// non-negative integer, a string is parsed as decimal or, if `0x`-prefixed, as hex, both of
/// arbitrary precision.
pub fn int(n: &Value) -> Result<Int, Error> {
    match n {
        Value::Number(number) => number.as_u64().map(Int::Native).ok_or_else(|| {
            TypeError {
                function: "int",
                parameter: "n",
                expected: "a non-negative integer",
                actual: "number",
            }
            .into()
        }),

        Value::String(s) if crate::is_hex_prefixed(s) => Ok(Int::from_hex(s)?),

        Value::String(s) => Ok(s.parse::<Int>()?),

        other => Err(TypeError {
            function: "int",
            parameter: "n",
            expected: "a number or string",
            actual: type_name(other),
        }
        .into()),
    }
}

/// See [crate::int_to_hex].
pub fn int_to_hex(n: &Value) -> Result<String, Error> {
    Ok(crate::int_to_hex(int(n)?))
}

/// See [crate::int_to_buffer].
pub fn int_to_buffer(n: &Value) -> Result<Vec<u8>, Error> {
    Ok(crate::int_to_buffer(int(n)?))
}

/// See [crate::get_binary_size].
pub fn get_binary_size(s: &Value) -> Result<usize, Error> {
    let s = expect_str(s, "get_binary_size", "str")?;
    Ok(crate::get_binary_size(s))
}

/// See [crate::array_contains_array]; items are compared by value.
pub fn array_contains_array(
    superset: &Value,
    subset: &Value,
    match_any: bool,
) -> Result<bool, Error> {
    let superset = expect_array(superset, "array_contains_array", "superset")?;
    let subset = expect_array(subset, "array_contains_array", "subset")?;
    Ok(crate::array_contains_array(superset, subset, match_any))
}

/// See [crate::get_keys]; a record which is not an object has no values at all.
pub fn get_keys(records: &Value, key: &Value, allow_empty: bool) -> Result<Vec<String>, Error> {
    let records = expect_array(records, "get_keys", "params")?;
    let key = expect_str(key, "get_keys", "key")?;

    let keys = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let value = record.as_object().and_then(|record| record.get(key));
            get_key(index, value, key, allow_empty)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(keys)
}

/// See [crate::is_hex_string]; anything other than a string is no hex string.
pub fn is_hex_string(s: &Value, length: Option<usize>) -> bool {
    s.as_str().is_some_and(|s| crate::is_hex_string(s, length))
}

fn expect_str<'a>(
    value: &'a Value,
    function: &'static str,
    parameter: &'static str,
) -> Result<&'a str, TypeError> {
    value.as_str().ok_or_else(|| TypeError {
        function,
        parameter,
        expected: "a string",
        actual: type_name(value),
    })
}

fn expect_array<'a>(
    value: &'a Value,
    function: &'static str,
    parameter: &'static str,
) -> Result<&'a [Value], TypeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| TypeError {
            function,
            parameter,
            expected: "an array",
            actual: type_name(value),
        })
}

#[cfg(test)]
mod tests {
    use crate::{
        GetKeysError, Int, ParseIntError,
        value::{
            Error, TypeError, array_contains_array, get_binary_size, get_keys, int,
            int_to_buffer, int_to_hex, is_hex_prefixed, is_hex_string, pad_to_even,
            strip_hex_prefix,
        },
    };
    use assert_matches::assert_matches;
    use serde_json::{Value, json};

    #[test]
    fn test_is_hex_prefixed() {
        assert_matches!(is_hex_prefixed(&json!("0xabc")), Ok(true));
        assert_matches!(is_hex_prefixed(&json!("abc")), Ok(false));
        assert_matches!(
            is_hex_prefixed(&json!(123)),
            Err(Error::Type(TypeError {
                function: "is_hex_prefixed",
                parameter: "str",
                actual: "number",
                ..
            }))
        );
    }

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix(json!("0xabc")), json!("abc"));
        assert_eq!(strip_hex_prefix(json!("abc")), json!("abc"));

        for value in [
            Value::Null,
            json!(242423),
            json!({}),
            json!([]),
            json!(true),
        ] {
            assert_eq!(strip_hex_prefix(value.clone()), value);
        }
    }

    #[test]
    fn test_pad_to_even() {
        assert_matches!(pad_to_even(&json!("abc")), Ok(s) if s == "0abc");
        assert_matches!(
            pad_to_even(&json!(["abc"])),
            Err(Error::Type(TypeError { actual: "array", .. }))
        );
    }

    #[test]
    fn test_int() {
        assert_matches!(int(&json!(6003400)), Ok(Int::Native(6_003_400)));
        assert_matches!(int(&json!("6003400")), Ok(Int::Native(6_003_400)));
        assert_matches!(int(&json!("0x5b9ac8")), Ok(Int::Native(6_003_400)));
        assert_matches!(
            int(&json!("340282366920938463463374607431768211455")),
            Ok(n) if n == Int::from(u128::MAX)
        );

        assert_matches!(int(&json!(-1)), Err(Error::Type(TypeError { actual: "number", .. })));
        assert_matches!(int(&json!(1.5)), Err(Error::Type(_)));
        assert_matches!(int(&Value::Null), Err(Error::Type(TypeError { actual: "null", .. })));
        assert_matches!(
            int(&json!("12x")),
            Err(Error::ParseInt(ParseIntError::InvalidDigit { digit: 'x', position: 2 }))
        );
        assert_matches!(int(&json!("0xzz")), Err(Error::DecodeHex(_)));
    }

    #[test]
    fn test_int_to_hex_and_buffer() {
        assert_matches!(int_to_hex(&json!(6003400)), Ok(hex) if hex == "0x5b9ac8");
        assert_matches!(int_to_hex(&json!(0)), Ok(hex) if hex == "0x0");
        assert_matches!(
            int_to_hex(&json!("18446744073709551616")),
            Ok(hex) if hex == "0x10000000000000000"
        );
        assert_matches!(int_to_buffer(&json!(1)), Ok(bytes) if bytes == [1]);
        assert_matches!(int_to_buffer(&json!(true)), Err(Error::Type(_)));
    }

    #[test]
    fn test_get_binary_size() {
        assert_matches!(get_binary_size(&json!("€")), Ok(3));
        assert_matches!(
            get_binary_size(&json!(null)),
            Err(Error::Type(TypeError { parameter: "str", actual: "null", .. }))
        );
    }

    #[test]
    fn test_array_contains_array() {
        assert_matches!(array_contains_array(&json!([1, 2, 3]), &json!([]), false), Ok(true));
        assert_matches!(
            array_contains_array(&json!([1, 2]), &json!([1, 2, 3]), false),
            Ok(false)
        );
        assert_matches!(
            array_contains_array(&json!([1, 2, "h"]), &json!([2332, 2, "h"]), true),
            Ok(true)
        );
        assert_matches!(
            array_contains_array(&json!({}), &json!([]), false),
            Err(Error::Type(TypeError { parameter: "superset", actual: "object", .. }))
        );
        assert_matches!(
            array_contains_array(&json!([]), &json!("a"), false),
            Err(Error::Type(TypeError { parameter: "subset", actual: "string", .. }))
        );
    }

    #[test]
    fn test_get_keys() {
        let records = json!([{ "type": "a" }, { "type": "b" }]);
        assert_matches!(get_keys(&records, &json!("type"), false), Ok(keys) if keys == ["a", "b"]);

        let records = json!([{ "type": "" }]);
        assert_matches!(
            get_keys(&records, &json!("type"), false),
            Err(Error::GetKeys(GetKeysError::InvalidAbi { index: 0, .. }))
        );
        assert_matches!(get_keys(&records, &json!("type"), true), Ok(keys) if keys == [""]);

        let records = json!(["a", { "type": "b" }]);
        assert_matches!(get_keys(&records, &json!("type"), true), Ok(keys) if keys == ["", "b"]);
        assert_matches!(
            get_keys(&records, &json!("type"), false),
            Err(Error::GetKeys(GetKeysError::InvalidAbi { index: 0, .. }))
        );

        assert_matches!(
            get_keys(&json!({}), &json!("type"), false),
            Err(Error::Type(TypeError { parameter: "params", .. }))
        );
        assert_matches!(
            get_keys(&json!([]), &json!(1), false),
            Err(Error::Type(TypeError { parameter: "key", actual: "number", .. }))
        );
    }

    #[test]
    fn test_is_hex_string() {
        assert!(is_hex_string(&json!("0xabcdef"), None));
        assert!(is_hex_string(&json!("0xabcd"), Some(2)));
        assert!(!is_hex_string(&json!("0x0"), Some(2)));
        assert!(!is_hex_string(&json!("0xZZ"), None));
        assert!(!is_hex_string(&json!(123), None));
        assert!(!is_hex_string(&Value::Null, None));
    }

    #[test]
    fn test_type_error_message() {
        let error = is_hex_prefixed(&json!(123)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "is_hex_prefixed requires input \"str\" to be a string, but was number"
        );
    }
}
