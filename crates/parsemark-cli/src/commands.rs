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

//! Command implementations.

use std::io;
use std::path::PathBuf;

use colored::Colorize;
use parsemark_backends::default_candidates;
use parsemark_core::registry::{Backend, Registry};
use parsemark_core::{Driver, Mode, SampleDocument};

use crate::cli::{BackendsArgs, RunArgs};
use crate::error::CliError;

/// Runs the benchmark and streams the table to stdout.
pub fn run(args: RunArgs) -> Result<(), CliError> {
    // All probing and module initialization completes here, before any
    // timed region.
    let mut backends = resolve_backends(args.wasm_module);
    let documents = load_documents(&args.documents, &args.sample_dir);
    let modes = [Mode::Single, Mode::iterated(args.iterations)?];

    let mut stdout = io::stdout().lock();
    let summary = Driver::new().run(&documents, &modes, &mut backends, &mut stdout)?;
    drop(stdout);

    if args.json {
        println!("{}", summary.to_json()?);
    }
    Ok(())
}

/// Lists the backends that survived their startup probe.
pub fn backends(args: BackendsArgs) -> Result<(), CliError> {
    let backends = resolve_backends(args.wasm_module);
    if backends.is_empty() {
        return Err(parsemark_core::BenchError::NoBackends.into());
    }
    for backend in &backends {
        println!(
            "{} {} [{}]",
            "available:".green(),
            backend.name(),
            backend.family().as_str()
        );
    }
    Ok(())
}

fn resolve_backends(wasm_module: Option<PathBuf>) -> Vec<Backend> {
    let mut registry = Registry::new();
    for candidate in default_candidates(wasm_module) {
        registry.register(candidate);
    }
    registry.resolve_all()
}

/// Loads the documents named on the command line, or the default sample
/// set. An unreadable document is diagnosed and skipped; the run continues
/// with the rest.
fn load_documents(paths: &[PathBuf], sample_dir: &std::path::Path) -> Vec<SampleDocument> {
    if paths.is_empty() {
        return parsemark_core::samples::load_default_samples(sample_dir);
    }
    paths
        .iter()
        .filter_map(|path| match SampleDocument::from_file(path) {
            Ok(doc) => Some(doc),
            Err(e) => {
                eprintln!("{} skipping document: {}", "warning:".yellow(), e);
                None
            }
        })
        .collect()
}
