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

//! Machine-readable run summary.
//!
//! The table on stdout is the contract; the JSON summary is an optional
//! addition that carries the same per-row comparisons in structured form.

use serde::Serialize;

use crate::compare::Comparison;
use crate::error::Result;

/// One (document, mode) row of the run.
#[derive(Debug, Clone, Serialize)]
pub struct RowSummary {
    /// Document label.
    pub document: String,
    /// Operation mode label.
    pub mode: String,
    /// Ranking result for the row.
    pub comparison: Comparison,
}

/// All rows of one run, in output order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Active backend names, in column order.
    pub backends: Vec<String>,
    /// Completed rows.
    pub rows: Vec<RowSummary>,
}

impl RunSummary {
    /// Serializes the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{rank, Measurement};
    use crate::registry::Family;

    #[test]
    fn test_summary_serializes() {
        let summary = RunSummary {
            backends: vec!["Serde DOM".to_string(), "Rust SIMD".to_string()],
            rows: vec![RowSummary {
                document: "sample.json".to_string(),
                mode: "Single Parse".to_string(),
                comparison: rank(vec![
                    Measurement::ok("Serde DOM", Family::Reference, 2.0),
                    Measurement::ok("Rust SIMD", Family::Accelerated, 1.0),
                ]),
            }],
        };
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"sample.json\""));
        assert!(json.contains("\"accelerated\""));
        assert!(json.contains("\"delta_pct\""));
    }
}
