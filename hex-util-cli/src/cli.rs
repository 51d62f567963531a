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

use crate::config::Config;
use anyhow::Context;
use clap::{Parser, Subcommand};
use hex_util::value;
use log::debug;
use serde_json::{Value, json};

/// Hex string and text/byte conversions.
#[derive(Debug, Parser)]
#[command(name = "hex-util", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Whether the value starts with `0x`.
    IsHexPrefixed { value: String },

    /// Remove a leading `0x`.
    StripHexPrefix { value: String },

    /// Prepend a `0` to values of odd length.
    PadToEven { value: String },

    /// Minimal `0x`-prefixed hex of a decimal or `0x`-prefixed hex integer.
    IntToHex { n: String },

    /// Big-endian bytes of a decimal or `0x`-prefixed hex integer, hex-encoded.
    IntToBuffer { n: String },

    /// Decimal value of the given hex digits.
    FromHex { hex: String },

    /// Number of UTF-8 bytes of the value.
    BinarySize { value: String },

    /// Whether the JSON array `superset` contains the items of the JSON array `subset`.
    Contains {
        superset: String,

        subset: String,

        /// Match any instead of all items.
        #[arg(long)]
        match_any: bool,
    },

    /// Decode hex as UTF-8 text, trimming zero digits.
    ToUtf8 { hex: String },

    /// Decode hex as Latin-1 text, one character per byte.
    ToAscii { hex: String },

    /// Encode UTF-8 text as hex, trimming zero digits.
    FromUtf8 { text: String },

    /// Encode Latin-1 text as hex, one byte per character.
    FromAscii { text: String },

    /// String values of the given key of a JSON array of records.
    GetKeys {
        records: String,

        key: String,

        /// Use empty strings for missing or falsy values.
        #[arg(long)]
        allow_empty: bool,
    },

    /// Whether the value is `0x` followed by hex digits only.
    IsHexString {
        value: String,

        /// Required number of bytes.
        #[arg(long)]
        length: Option<usize>,
    },
}

/// Run the given command, returning its result as JSON value.
pub fn run(command: Command, config: &Config) -> anyhow::Result<Value> {
    let output = match command {
        Command::IsHexPrefixed { value } => json!(hex_util::is_hex_prefixed(&value)),

        Command::StripHexPrefix { value } => json!(hex_util::strip_hex_prefix(&value)),

        Command::PadToEven { value } => json!(hex_util::pad_to_even(&value)),

        Command::IntToHex { n } => {
            json!(value::int_to_hex(&Value::String(n)).context("convert integer to hex")?)
        }

        Command::IntToBuffer { n } => {
            let bytes =
                value::int_to_buffer(&Value::String(n)).context("convert integer to bytes")?;
            json!(const_hex::encode(bytes))
        }

        Command::FromHex { hex } => {
            let n = hex_util::from_hex(&hex).context("parse hex integer")?;
            json!(n.to_string())
        }

        Command::BinarySize { value } => json!(hex_util::get_binary_size(&value)),

        Command::Contains {
            superset,
            subset,
            match_any,
        } => {
            let superset = parse_json(&superset, "superset")?;
            let subset = parse_json(&subset, "subset")?;
            let match_any = match_any || config.match_any;
            json!(value::array_contains_array(&superset, &subset, match_any)?)
        }

        Command::ToUtf8 { hex } => json!(hex_util::to_utf8(&hex).context("decode UTF-8 text")?),

        Command::ToAscii { hex } => {
            json!(hex_util::to_ascii(&hex).context("decode Latin-1 text")?)
        }

        Command::FromUtf8 { text } => json!(hex_util::from_utf8(&text)),

        Command::FromAscii { text } => {
            json!(hex_util::from_ascii(&text).context("encode Latin-1 text")?)
        }

        Command::GetKeys {
            records,
            key,
            allow_empty,
        } => {
            let records = parse_json(&records, "records")?;
            let allow_empty = allow_empty || config.allow_empty;
            json!(value::get_keys(&records, &Value::String(key), allow_empty)?)
        }

        Command::IsHexString { value, length } => json!(hex_util::is_hex_string(&value, length)),
    };

    debug!(output:%; "command completed");

    Ok(output)
}

/// Render the given result as JSON or as plain text, with strings unquoted and arrays one
/// item per line.
pub fn render(output: &Value, json_output: bool) -> String {
    if json_output {
        return output.to_string();
    }

    match output {
        Value::String(s) => s.to_owned(),
        Value::Array(items) => items
            .iter()
            .map(|item| render(item, false))
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

fn parse_json(s: &str, name: &str) -> anyhow::Result<Value> {
    serde_json::from_str(s).with_context(|| format!("parse {name} as JSON"))
}
