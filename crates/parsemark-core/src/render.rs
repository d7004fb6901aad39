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

//! Fixed-width table rendering.
//!
//! A [`Layout`] is frozen once from the resolved backend set; the header
//! and every row of a process invocation share the exact same column
//! layout. The table widens or narrows with the number of available
//! backends. Labels are left-aligned, durations right-aligned with three
//! decimal digits, so rows align regardless of value magnitude.

use std::fmt::Write as _;

use crate::compare::Comparison;

/// Width of the document label column.
pub const DOC_WIDTH: usize = 25;
/// Width of the operation mode column.
pub const MODE_WIDTH: usize = 15;
/// Width of each per-backend duration column.
pub const TIME_WIDTH: usize = 13;
/// Width a duration value is right-aligned to inside its column.
const VALUE_WIDTH: usize = 8;

/// Column layout for one process invocation.
#[derive(Debug, Clone)]
pub struct Layout {
    backends: Vec<String>,
}

impl Layout {
    /// Freezes the column set from the active backend names, in
    /// registration order.
    pub fn new(backend_names: &[&str]) -> Self {
        Self {
            backends: backend_names.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Renders the table header.
    pub fn header(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{:<DOC_WIDTH$} {:<MODE_WIDTH$} ", "File", "Operation");
        for name in &self.backends {
            let _ = write!(out, "{:<TIME_WIDTH$} ", name);
        }
        out.push_str("Difference vs reference");
        out
    }

    /// Renders the separator line sized to the header.
    pub fn separator(&self) -> String {
        "-".repeat(self.header().len())
    }

    /// Renders one row from a completed comparison.
    ///
    /// The comparison's measurements must be in the layout's backend order;
    /// the driver guarantees this by filling both from the same resolved
    /// set.
    pub fn row(&self, document: &str, mode: &str, comparison: &Comparison) -> String {
        debug_assert_eq!(comparison.measurements.len(), self.backends.len());

        let mut out = String::new();
        let _ = write!(out, "{:<DOC_WIDTH$} {:<MODE_WIDTH$} ", document, mode);
        for m in &comparison.measurements {
            let cell = if m.failed {
                format!("{:>VALUE_WIDTH$}", "n/a")
            } else {
                format!("{:>VALUE_WIDTH$.3}", m.elapsed_ms)
            };
            let _ = write!(out, "{:<TIME_WIDTH$} ", cell);
        }
        out.push_str(&headline(comparison));
        out
    }
}

/// The final column's free-text finding for one row.
fn headline(comparison: &Comparison) -> String {
    if comparison.degenerate {
        return "no measurable difference".to_string();
    }
    match (&comparison.families, comparison.fastest_measurement()) {
        (Some(families), _) => {
            let winner = &comparison.measurements[families.accelerated_best].backend;
            let word = if families.delta_pct >= 0.0 {
                "faster"
            } else {
                "slower"
            };
            format!("{:.1}% {} ({})", families.delta_pct.abs(), word, winner)
        }
        (None, Some(fastest)) => format!("fastest: {}", fastest.backend),
        (None, None) => "all backends failed".to_string(),
    }
}
