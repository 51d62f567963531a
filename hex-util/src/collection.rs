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

use log::trace;
use serde_json::{Map, Value};
use thiserror::Error;

/// A key-value record, e.g. an ABI parameter description.
pub type Record = Map<String, Value>;

/// Error possibly returned by `get_keys`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetKeysError {
    #[error("invalid abi: record {index} has no string value for key {key:?}")]
    InvalidAbi { index: usize, key: String },
}

/// Whether all items of `subset` are contained in `superset` or, if `match_any` is set,
/// whether at least one is.
///
/// An empty `subset` is contained in any `superset` unless `match_any` is set.
pub fn array_contains_array<T>(superset: &[T], subset: &[T], match_any: bool) -> bool
where
    T: PartialEq,
{
    if match_any {
        subset.iter().any(|item| superset.contains(item))
    } else {
        subset.iter().all(|item| superset.contains(item))
    }
}

/// The string values of the given key of all given records, in order.
///
/// Missing values and values which are not non-empty strings are invalid, unless
/// `allow_empty` is set and the value is falsy (missing, `null`, `false`, `0` or `""`), in
/// which case an empty string is used.
pub fn get_keys(
    records: &[Record],
    key: &str,
    allow_empty: bool,
) -> Result<Vec<String>, GetKeysError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| get_key(index, record.get(key), key, allow_empty))
        .collect()
}

pub(crate) fn get_key(
    index: usize,
    value: Option<&Value>,
    key: &str,
    allow_empty: bool,
) -> Result<String, GetKeysError> {
    match value {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.to_owned()),

        value if allow_empty && is_falsy(value) => {
            trace!(index, key:%; "using empty value");
            Ok(String::new())
        }

        _ => Err(GetKeysError::InvalidAbi {
            index,
            key: key.to_owned(),
        }),
    }
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
