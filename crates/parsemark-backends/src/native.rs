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

//! SIMD-accelerated native backend.
//!
//! simd-json parses in place, so each call copies the document into a
//! reusable scratch buffer first. The copy is charged to the backend: any
//! consumer holding an immutable document would pay it too.

use parsemark_core::error::ParseError;
use parsemark_core::registry::{Candidate, Family, Parser};

use crate::probe_parse;

/// simd-json parse over a scratch copy of the input.
pub struct SimdParser {
    scratch: Vec<u8>,
}

impl SimdParser {
    /// Creates the parser with an empty scratch buffer; the buffer grows to
    /// the largest document seen and is reused across calls.
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl Default for SimdParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for SimdParser {
    fn parse(&mut self, input: &str) -> Result<(), ParseError> {
        self.scratch.clear();
        self.scratch.extend_from_slice(input.as_bytes());
        simd_json::to_borrowed_value(&mut self.scratch)
            .map(|_| ())
            .map_err(|e| ParseError::new(e.to_string()))
    }
}

/// The native SIMD candidate. The probe parses a trivial document once, so
/// a host where simd-json cannot run degrades the column set instead of
/// failing the run.
pub fn candidate() -> Candidate {
    Candidate::new("Rust SIMD", Family::Accelerated, || {
        let mut parser = SimdParser::new();
        probe_parse(&mut parser)?;
        Ok(Box::new(parser) as Box<dyn Parser>)
    })
}
