// Parsemark - JSON Parsing Benchmark Harness
//
// Copyright (c) 2025 the Parsemark contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parsemark Command Line Interface

use clap::Parser;
use colored::Colorize;
use parsemark_cli::cli::Commands;
use std::process::ExitCode;

/// Parsemark - JSON parsing benchmark harness
///
/// Measures and compares the throughput of interchangeable JSON parser
/// backends: the serde_json reference family, a SIMD-accelerated native
/// parser, and an optional sandboxed WASM module.
///
/// # Examples
///
/// ```bash
/// # Benchmark the default sample set against every available backend
/// parsemark run
///
/// # Benchmark specific documents with a custom iteration count
/// parsemark run data/*.json --iterations 500
///
/// # List which backends survived their startup probe
/// parsemark backends
/// ```
#[derive(Parser)]
#[command(name = "parsemark")]
#[command(author, version, about = "Parsemark - JSON parsing benchmark harness", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
