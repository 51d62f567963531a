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

use anyhow::Context;
use clap::Parser;
use hex_util_cli::{
    cli::{self, Cli},
    config::{Config, ConfigExt},
};
use log::{debug, error};
use std::panic;

fn main() {
    logforth::starter_log::stderr().apply();
    panic::set_hook(Box::new(|panic| error!(panic:%; "process panicked")));

    if let Err(error) = run() {
        let error = format!("{error:#}");
        error!(error:%; "process exited with ERROR");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let Cli { command } = Cli::parse();

    let config = Config::load().context("load configuration")?;
    debug!(config:?, command:?; "starting");

    let output = cli::run(command, &config)?;
    println!("{}", cli::render(&output, config.json_output));

    Ok(())
}
