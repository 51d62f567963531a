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

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::env;

/// Environment variable holding the path of the optional YAML configuration file.
pub const CONFIG_FILE: &str = "CONFIG_FILE";

/// Default path of the optional YAML configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Configuration of the command line interface. Flags given on the command line can only
/// enable these options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Use empty strings for missing or falsy values in `get-keys`.
    pub allow_empty: bool,

    /// Match any instead of all items in `contains`.
    pub match_any: bool,

    /// Render results as JSON.
    pub json_output: bool,
}

impl ConfigExt for Config {}

/// Load configuration from defaults, an optional YAML file and `APP__` prefixed environment
/// variables, in ascending precedence.
pub trait ConfigExt
where
    Self: Default + Serialize + DeserializeOwned,
{
    fn load() -> Result<Self, figment::Error> {
        let config_file =
            env::var(CONFIG_FILE).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_owned());

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(config_file))
            .merge(Env::prefixed("APP__").split("__"))
            .extract()
    }
}
