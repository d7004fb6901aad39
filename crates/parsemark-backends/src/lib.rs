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

//! Parser backends for the parsemark harness.
//!
//! Each backend implements the engine's [`Parser`] seam over a real JSON
//! parser:
//!
//! - [`reference`]: serde_json DOM and raw-scan parsing, the
//!   always-available reference family.
//! - [`native`]: simd-json, the SIMD-accelerated native backend.
//! - [`wasm`]: a wasm-bindgen-style module executed under wasmtime, the
//!   SIMD-capable sandboxed backend (feature `wasm-runtime`).
//!
//! The harness never inspects parse output; backends discard it and report
//! only success or failure.

use std::path::PathBuf;

use parsemark_core::registry::{Candidate, Parser};

pub mod native;
pub mod reference;
#[cfg(feature = "wasm-runtime")]
pub mod wasm;

/// Trivial document every probe parses before a backend is admitted.
pub(crate) const PROBE_DOC: &str = r#"{"probe":true}"#;

/// The full candidate set, in report column order.
///
/// `wasm_module` overrides the sandboxed backend's module search path; when
/// the module is absent its probe fails and the harness degrades to the
/// remaining columns.
pub fn default_candidates(wasm_module: Option<PathBuf>) -> Vec<Candidate> {
    let mut candidates = vec![
        reference::dom_candidate(),
        reference::scan_candidate(),
        native::candidate(),
    ];
    #[cfg(feature = "wasm-runtime")]
    candidates.push(wasm::candidate(wasm_module));
    #[cfg(not(feature = "wasm-runtime"))]
    let _ = wasm_module;
    candidates
}

/// Runs one probe parse, mapping failure into the probe's reason string.
pub(crate) fn probe_parse(parser: &mut dyn Parser) -> Result<(), String> {
    parser
        .parse(PROBE_DOC)
        .map_err(|e| format!("probe parse failed: {e}"))
}
