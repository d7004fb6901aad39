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

//! Reference-family backends.
//!
//! Two serde_json backends span the family: [`DomParser`] builds a full
//! `Value` tree per call, while [`ScanParser`] validates against
//! `&RawValue` without materializing a tree. Both are always available, so
//! the two-tier family comparison has a baseline even when every optional
//! backend is missing.

use parsemark_core::error::ParseError;
use parsemark_core::registry::{Candidate, Family, Parser};
use serde_json::value::RawValue;
use serde_json::Value;

/// Full DOM parse into `serde_json::Value`.
pub struct DomParser;

impl Parser for DomParser {
    fn parse(&mut self, input: &str) -> Result<(), ParseError> {
        serde_json::from_str::<Value>(input)
            .map(|_| ())
            .map_err(|e| ParseError::new(e.to_string()))
    }
}

/// Syntax-only validation via `&RawValue`, no tree construction.
pub struct ScanParser;

impl Parser for ScanParser {
    fn parse(&mut self, input: &str) -> Result<(), ParseError> {
        serde_json::from_str::<&RawValue>(input)
            .map(|_| ())
            .map_err(|e| ParseError::new(e.to_string()))
    }
}

/// The DOM backend candidate. Its probe cannot fail.
pub fn dom_candidate() -> Candidate {
    Candidate::new("Serde DOM", Family::Reference, || {
        Ok(Box::new(DomParser) as Box<dyn Parser>)
    })
}

/// The scan backend candidate. Its probe cannot fail.
pub fn scan_candidate() -> Candidate {
    Candidate::new("Serde Scan", Family::Reference, || {
        Ok(Box::new(ScanParser) as Box<dyn Parser>)
    })
}
