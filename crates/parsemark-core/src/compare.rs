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

//! Cross-backend ranking for one report row.
//!
//! Given the measurements of one (document, mode) row, [`rank`] finds the
//! fastest backend overall, the fastest backend per family, and signed
//! percentage deltas.
//!
//! ## Sign convention
//!
//! The per-measurement delta is `(fastest - this) / fastest * 100`: exactly
//! `0` for the fastest backend, negative for every slower backend. The
//! family headline delta is
//! `(reference_best - accelerated_best) / reference_best * 100`: positive
//! means the accelerated winner beat the reference winner. Rendering always
//! prints the absolute value together with an explicit `faster`/`slower`
//! word, so the arithmetic sign never reaches users directly.

use serde::Serialize;

use crate::registry::Family;

/// One timed execution result for a (document, mode, backend) combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Backend report column name.
    pub backend: String,
    /// Backend execution family.
    pub family: Family,
    /// Elapsed time in fractional milliseconds. Zero when `failed`.
    pub elapsed_ms: f64,
    /// Whether the backend failed on this row.
    pub failed: bool,
}

impl Measurement {
    /// Creates a successful measurement.
    pub fn ok(backend: impl Into<String>, family: Family, elapsed_ms: f64) -> Self {
        Self {
            backend: backend.into(),
            family,
            elapsed_ms,
            failed: false,
        }
    }

    /// Creates the sentinel measurement recorded when a backend fails on a
    /// row. The row keeps its column; the run continues.
    pub fn failed(backend: impl Into<String>, family: Family) -> Self {
        Self {
            backend: backend.into(),
            family,
            elapsed_ms: 0.0,
            failed: true,
        }
    }
}

/// Two-tier comparison between the family winners of one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyComparison {
    /// Index of the fastest reference-family measurement.
    pub reference_best: usize,
    /// Index of the fastest accelerated-family measurement.
    pub accelerated_best: usize,
    /// `(reference_best - accelerated_best) / reference_best * 100`;
    /// positive means the accelerated winner is faster.
    pub delta_pct: f64,
}

/// Ranking result for one (document, mode) row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// All measurements of the row, in backend registration order.
    pub measurements: Vec<Measurement>,
    /// Index of the fastest usable measurement; `None` when every backend
    /// failed on this row.
    pub fastest: Option<usize>,
    /// Per-measurement delta against the fastest, `None` for failed
    /// measurements and for degenerate rows.
    pub deltas_pct: Vec<Option<f64>>,
    /// Family winners, present only when both families produced a usable
    /// measurement and the row is not degenerate.
    pub families: Option<FamilyComparison>,
    /// True when the fastest usable duration is zero, making percentage
    /// deltas meaningless ("no measurable difference").
    pub degenerate: bool,
}

impl Comparison {
    /// Returns the fastest measurement, if any backend succeeded.
    pub fn fastest_measurement(&self) -> Option<&Measurement> {
        self.fastest.map(|i| &self.measurements[i])
    }
}

/// Ranks the measurements of one row.
///
/// Failed measurements are excluded from every minimum. Ties break toward
/// the earlier position in `measurements`, which the driver fills in
/// registration order, so the winner is deterministic across runs.
pub fn rank(measurements: Vec<Measurement>) -> Comparison {
    let fastest = min_index(&measurements, |_| true);

    // A zero fastest duration would put the clock resolution, not the
    // backends, in the denominator of every delta.
    let degenerate = matches!(fastest, Some(i) if measurements[i].elapsed_ms == 0.0);

    let deltas_pct = match fastest {
        Some(best) if !degenerate => {
            let best_ms = measurements[best].elapsed_ms;
            measurements
                .iter()
                .map(|m| {
                    if m.failed {
                        None
                    } else {
                        Some((best_ms - m.elapsed_ms) / best_ms * 100.0)
                    }
                })
                .collect()
        }
        _ => vec![None; measurements.len()],
    };

    let families = if degenerate {
        None
    } else {
        family_comparison(&measurements)
    };

    Comparison {
        measurements,
        fastest,
        deltas_pct,
        families,
        degenerate,
    }
}

/// Index of the minimal usable measurement matching `accept`, first wins on
/// ties.
fn min_index<F>(measurements: &[Measurement], accept: F) -> Option<usize>
where
    F: Fn(&Measurement) -> bool,
{
    let mut best: Option<usize> = None;
    for (i, m) in measurements.iter().enumerate() {
        if m.failed || !accept(m) {
            continue;
        }
        match best {
            Some(b) if measurements[b].elapsed_ms <= m.elapsed_ms => {}
            _ => best = Some(i),
        }
    }
    best
}

fn family_comparison(measurements: &[Measurement]) -> Option<FamilyComparison> {
    let reference_best = min_index(measurements, |m| m.family == Family::Reference)?;
    let accelerated_best = min_index(measurements, |m| m.family == Family::Accelerated)?;

    let reference_ms = measurements[reference_best].elapsed_ms;
    if reference_ms == 0.0 {
        return None;
    }
    let accelerated_ms = measurements[accelerated_best].elapsed_ms;

    Some(FamilyComparison {
        reference_best,
        accelerated_best,
        delta_pct: (reference_ms - accelerated_ms) / reference_ms * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str, ms: f64) -> Measurement {
        Measurement::ok(name, Family::Reference, ms)
    }

    fn accelerated(name: &str, ms: f64) -> Measurement {
        Measurement::ok(name, Family::Accelerated, ms)
    }

    #[test]
    fn test_fastest_is_minimum() {
        let cmp = rank(vec![
            reference("a", 5.0),
            reference("b", 3.0),
            accelerated("c", 4.0),
        ]);
        let fastest = cmp.fastest_measurement().unwrap();
        for m in &cmp.measurements {
            assert!(fastest.elapsed_ms <= m.elapsed_ms);
        }
        assert_eq!(fastest.backend, "b");
    }

    // Fixed durations {a: 5, b: 3, c: 3} registered in that order: the tie
    // breaks toward b, and a's delta is (3 - 5) / 3 * 100.
    #[test]
    fn test_tie_breaks_toward_earlier_registration() {
        let cmp = rank(vec![
            reference("a", 5.0),
            reference("b", 3.0),
            reference("c", 3.0),
        ]);
        assert_eq!(cmp.fastest, Some(1));
        let delta_a = cmp.deltas_pct[0].unwrap();
        assert!((delta_a - (-200.0 / 3.0)).abs() < 1e-9);
        assert!(delta_a < 0.0, "slower backends carry a negative delta");
    }

    #[test]
    fn test_fastest_delta_is_exactly_zero() {
        let cmp = rank(vec![reference("a", 5.0), reference("b", 3.0)]);
        assert_eq!(cmp.deltas_pct[1], Some(0.0));
    }

    #[test]
    fn test_tie_break_is_deterministic_across_repeats() {
        for _ in 0..100 {
            let cmp = rank(vec![
                reference("a", 3.0),
                reference("b", 3.0),
                reference("c", 3.0),
            ]);
            assert_eq!(cmp.fastest, Some(0));
        }
    }

    #[test]
    fn test_family_winners_and_headline_delta() {
        let cmp = rank(vec![
            reference("dom", 4.0),
            reference("scan", 2.0),
            accelerated("simd", 1.0),
            accelerated("wasm", 3.0),
        ]);
        let families = cmp.families.unwrap();
        assert_eq!(families.reference_best, 1);
        assert_eq!(families.accelerated_best, 2);
        // (2 - 1) / 2 * 100: accelerated winner is 50% faster.
        assert!((families.delta_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_headline_delta_negative_when_reference_wins() {
        let cmp = rank(vec![reference("dom", 1.0), accelerated("simd", 2.0)]);
        let families = cmp.families.unwrap();
        assert!((families.delta_pct - (-100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_family_has_no_headline() {
        let cmp = rank(vec![reference("dom", 1.0), reference("scan", 2.0)]);
        assert!(cmp.families.is_none());
    }

    #[test]
    fn test_failed_measurements_are_excluded_from_ranking() {
        let cmp = rank(vec![
            Measurement::failed("dom", Family::Reference),
            reference("scan", 2.0),
            accelerated("simd", 1.0),
        ]);
        assert_eq!(cmp.fastest, Some(2));
        assert_eq!(cmp.deltas_pct[0], None);
        let families = cmp.families.unwrap();
        assert_eq!(families.reference_best, 1);
    }

    #[test]
    fn test_all_failed_row() {
        let cmp = rank(vec![
            Measurement::failed("dom", Family::Reference),
            Measurement::failed("simd", Family::Accelerated),
        ]);
        assert_eq!(cmp.fastest, None);
        assert!(cmp.families.is_none());
        assert!(!cmp.degenerate);
    }

    #[test]
    fn test_all_zero_row_is_degenerate() {
        let cmp = rank(vec![reference("a", 0.0), accelerated("b", 0.0)]);
        assert!(cmp.degenerate);
        assert_eq!(cmp.fastest, Some(0));
        assert!(cmp.deltas_pct.iter().all(Option::is_none));
        assert!(cmp.families.is_none());
    }

    #[test]
    fn test_zero_fastest_with_nonzero_rest_is_guarded() {
        // Division by a zero fastest time must never produce infinities.
        let cmp = rank(vec![reference("a", 0.0), accelerated("b", 2.0)]);
        assert!(cmp.degenerate);
        assert!(cmp.deltas_pct.iter().all(Option::is_none));
    }
}
