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

//! Backend registration and startup probing.
//!
//! Candidate backends are registered up front and resolved exactly once:
//! each candidate's probe either yields a ready [`Parser`] or a reason the
//! backend is unusable on this host. Failed probes are diagnosed on stderr
//! and excluded; the harness degrades to fewer report columns instead of
//! failing.

use crate::error::ParseError;

/// Execution family of a backend.
///
/// Attached explicitly at registration; the comparator uses it for the
/// two-tier fastest-in-family comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Interpreted-style baseline parsers, always available.
    Reference,
    /// SIMD-accelerated parsers, native or sandboxed, individually probed.
    Accelerated,
}

impl Family {
    /// Returns the family as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Reference => "reference",
            Family::Accelerated => "accelerated",
        }
    }
}

/// One interchangeable implementation of the parse operation.
///
/// The engine never inspects parse output, so implementations only report
/// success or failure. `parse` takes `&mut self` because some backends keep
/// reusable scratch state (buffers, module instances) between calls.
pub trait Parser {
    /// Parses `input`, discarding the result.
    fn parse(&mut self, input: &str) -> Result<(), ParseError>;
}

/// Probe outcome: a ready parser, or the reason the backend is unusable.
type ProbeResult = std::result::Result<Box<dyn Parser>, String>;

/// A backend candidate awaiting its startup probe.
///
/// The probe doubles as the factory: it performs any one-time
/// initialization (for the sandboxed backend, compiling and instantiating
/// the module) and hands back the parser it validated.
pub struct Candidate {
    name: String,
    family: Family,
    probe: Box<dyn FnOnce() -> ProbeResult>,
}

impl Candidate {
    /// Creates a candidate with its probe-and-construct closure.
    pub fn new(
        name: impl Into<String>,
        family: Family,
        probe: impl FnOnce() -> ProbeResult + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            probe: Box::new(probe),
        }
    }

    /// Returns the candidate's report column name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A resolved, available backend.
///
/// Created and owned by [`Registry::resolve_all`]; identity is immutable
/// for the rest of the process lifetime.
pub struct Backend {
    name: String,
    family: Family,
    parser: Box<dyn Parser>,
}

impl Backend {
    /// Returns the backend's report column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the backend's execution family.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Runs one parse call against this backend.
    pub fn parse(&mut self, input: &str) -> Result<(), ParseError> {
        self.parser.parse(input)
    }
}

/// Ordered collection of backend candidates.
#[derive(Default)]
pub struct Registry {
    candidates: Vec<Candidate>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a candidate backend. Registration order is preserved all the
    /// way into the rendered column order and the comparator's tie-break.
    pub fn register(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Probes every candidate, in registration order, and returns the
    /// backends whose probe succeeded.
    ///
    /// Consuming the registry guarantees each candidate is probed at most
    /// once per process. A failed probe prints one diagnostic to stderr and
    /// excludes the candidate; it is never fatal.
    pub fn resolve_all(self) -> Vec<Backend> {
        let mut backends = Vec::with_capacity(self.candidates.len());
        for candidate in self.candidates {
            match (candidate.probe)() {
                Ok(parser) => backends.push(Backend {
                    name: candidate.name,
                    family: candidate.family,
                    parser,
                }),
                Err(reason) => {
                    eprintln!("backend '{}' unavailable: {}", candidate.name, reason);
                }
            }
        }
        backends
    }
}
