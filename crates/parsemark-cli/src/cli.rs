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

//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use parsemark_core::DEFAULT_ITERATIONS;

use crate::commands;
use crate::error::CliError;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark and print the comparison table
    Run(RunArgs),

    /// List the backends that survived their startup probe
    Backends(BackendsArgs),
}

/// Arguments for the `run` command.
#[derive(Args)]
pub struct RunArgs {
    /// Sample documents to benchmark; defaults to the built-in sample set
    pub documents: Vec<PathBuf>,

    /// Directory searched for the default sample files
    #[arg(long, default_value = ".")]
    pub sample_dir: PathBuf,

    /// Repetition count for the iterated mode
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Path to the sandboxed parser module
    #[arg(long)]
    pub wasm_module: Option<PathBuf>,

    /// Print a JSON summary after the table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `backends` command.
#[derive(Args)]
pub struct BackendsArgs {
    /// Path to the sandboxed parser module
    #[arg(long)]
    pub wasm_module: Option<PathBuf>,
}

impl Commands {
    /// Execute the command with the provided arguments.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Run(args) => commands::run(args),
            Commands::Backends(args) => commands::backends(args),
        }
    }
}
