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

//! Structured error types for the parsemark CLI.

use parsemark_core::BenchError;
use thiserror::Error;

/// The main error type for CLI command execution.
///
/// Almost everything recoverable is handled inside the run (failed probes,
/// failed parse calls, skipped documents); what reaches this type ends the
/// process with a nonzero exit code.
#[derive(Error, Debug)]
pub enum CliError {
    /// An engine-level failure, which is limited to total configuration
    /// failure and output I/O.
    #[error(transparent)]
    Bench(#[from] BenchError),
}
