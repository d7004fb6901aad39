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

//! Structured error types for the benchmark engine.
//!
//! Two error layers exist: [`ParseError`] is the per-call failure a backend
//! reports for one input, recoverable at the row level; [`BenchError`] covers
//! everything that can end a run, which is limited to total configuration
//! failure and output I/O.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmark engine operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Error raised by a parser backend for a specific input.
///
/// The engine treats this as opaque: a row records the failure and the run
/// continues with the remaining backends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse failed: {0}")]
pub struct ParseError(String);

impl ParseError {
    /// Creates a parse error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// Returns the failure reason.
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// Errors that can abort a benchmark run.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A sample document could not be read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// No sample document could be loaded at all.
    #[error("no sample documents could be loaded")]
    NoDocuments,

    /// Every candidate backend failed its probe.
    #[error("no parser backends are available")]
    NoBackends,

    /// The iterated mode was configured with a zero repetition count.
    #[error("iteration count must be positive")]
    ZeroIterations,

    /// Writing a report row to the output failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// Serializing the machine-readable summary failed.
    #[error("summary serialization failed: {0}")]
    Summary(#[from] serde_json::Error),
}

impl BenchError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
