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

//! The run driver.
//!
//! Iterates documents x modes x backends strictly sequentially: one
//! operation is measured completely before the next starts, so no
//! measurement overlaps another or any initialization work. Each completed
//! row is rendered and written immediately, keeping partial progress
//! visible if a later backend fails or hangs.

use std::io::Write;
use std::num::NonZeroU64;

use crate::compare::{rank, Measurement};
use crate::error::{BenchError, Result};
use crate::registry::Backend;
use crate::render::Layout;
use crate::samples::SampleDocument;
use crate::summary::{RowSummary, RunSummary};
use crate::timing::{MonotonicStopwatch, Stopwatch};

/// Operation mode for one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Time one isolated parse call.
    Single,
    /// Time a fixed count of repeated calls as one bracketed total.
    Iterated(NonZeroU64),
}

impl Mode {
    /// Builds the iterated mode, rejecting a zero count.
    pub fn iterated(count: u64) -> Result<Self> {
        NonZeroU64::new(count)
            .map(Mode::Iterated)
            .ok_or(BenchError::ZeroIterations)
    }

    /// Report label for the operation column.
    pub fn label(&self) -> String {
        match self {
            Mode::Single => "Single Parse".to_string(),
            Mode::Iterated(count) => format!("{count} Iterations"),
        }
    }
}

/// Drives a full benchmark run.
///
/// Generic over the timing source so report-format tests can inject fixed
/// durations; every real run uses the monotonic default.
pub struct Driver<S: Stopwatch = MonotonicStopwatch> {
    stopwatch: S,
}

impl Driver<MonotonicStopwatch> {
    /// Creates a driver timed by the monotonic clock.
    pub fn new() -> Self {
        Self {
            stopwatch: MonotonicStopwatch,
        }
    }
}

impl Default for Driver<MonotonicStopwatch> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Stopwatch> Driver<S> {
    /// Creates a driver with an explicit timing source.
    pub fn with_stopwatch(stopwatch: S) -> Self {
        Self { stopwatch }
    }

    /// Runs every (document, mode, backend) combination, streaming one
    /// rendered row at a time to `out`, and returns the structured summary.
    ///
    /// Fails only on total configuration failure (no documents, no
    /// backends) or when the output cannot be written; per-backend parse
    /// failures are recorded as flagged measurements and the run continues.
    pub fn run(
        &mut self,
        documents: &[SampleDocument],
        modes: &[Mode],
        backends: &mut [Backend],
        out: &mut dyn Write,
    ) -> Result<RunSummary> {
        if documents.is_empty() {
            return Err(BenchError::NoDocuments);
        }
        if backends.is_empty() {
            return Err(BenchError::NoBackends);
        }

        let names: Vec<String> = backends.iter().map(|b| b.name().to_string()).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let layout = Layout::new(&name_refs);

        writeln!(out)?;
        writeln!(out, "JSON Parsing Performance Comparison")?;
        writeln!(out)?;
        writeln!(out, "{}", layout.header())?;
        writeln!(out, "{}", layout.separator())?;

        let mut summary = RunSummary {
            backends: names,
            rows: Vec::with_capacity(documents.len() * modes.len()),
        };

        for document in documents {
            for mode in modes {
                let comparison = rank(self.measure_row(document, *mode, backends));
                writeln!(out, "{}", layout.row(&document.name, &mode.label(), &comparison))?;
                out.flush()?;
                summary.rows.push(RowSummary {
                    document: document.name.clone(),
                    mode: mode.label(),
                    comparison,
                });
            }
            writeln!(out, "{}", layout.separator())?;
        }

        Ok(summary)
    }

    fn measure_row(
        &mut self,
        document: &SampleDocument,
        mode: Mode,
        backends: &mut [Backend],
    ) -> Vec<Measurement> {
        let mut measurements = Vec::with_capacity(backends.len());
        for backend in backends.iter_mut() {
            let name = backend.name().to_string();
            let family = backend.family();
            let mut op = || backend.parse(&document.text);
            let timed = match mode {
                Mode::Single => self.stopwatch.time_once(&mut op),
                Mode::Iterated(count) => self.stopwatch.time_iterated(&mut op, count),
            };
            match timed {
                Ok(elapsed_ms) => measurements.push(Measurement::ok(name, family, elapsed_ms)),
                Err(e) => {
                    eprintln!("backend '{}' failed on '{}': {}", name, document.name, e);
                    measurements.push(Measurement::failed(name, family));
                }
            }
        }
        measurements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::registry::{Candidate, Family, Parser, Registry};
    use crate::timing::Op;

    /// Stopwatch returning a scripted sequence of durations. Still calls
    /// the operation once so per-call failures propagate as in a real run.
    struct ScriptedStopwatch {
        durations: Vec<f64>,
        next: usize,
    }

    impl ScriptedStopwatch {
        fn new(durations: Vec<f64>) -> Self {
            Self { durations, next: 0 }
        }

        fn advance(&mut self) -> f64 {
            let value = self.durations[self.next % self.durations.len()];
            self.next += 1;
            value
        }
    }

    impl Stopwatch for ScriptedStopwatch {
        fn time_once(&mut self, op: &mut Op<'_>) -> std::result::Result<f64, ParseError> {
            op()?;
            Ok(self.advance())
        }

        fn time_iterated(
            &mut self,
            op: &mut Op<'_>,
            _count: NonZeroU64,
        ) -> std::result::Result<f64, ParseError> {
            op()?;
            Ok(self.advance())
        }
    }

    struct StubParser {
        fail: bool,
    }

    impl Parser for StubParser {
        fn parse(&mut self, _input: &str) -> std::result::Result<(), ParseError> {
            if self.fail {
                Err(ParseError::new("stub failure"))
            } else {
                Ok(())
            }
        }
    }

    fn stub(name: &str, family: Family, fail: bool) -> Candidate {
        Candidate::new(name, family, move || {
            Ok(Box::new(StubParser { fail }) as Box<dyn Parser>)
        })
    }

    fn documents() -> Vec<SampleDocument> {
        vec![SampleDocument {
            name: "sample.json".to_string(),
            text: "{}".to_string(),
        }]
    }

    fn resolve(candidates: Vec<Candidate>) -> Vec<Backend> {
        let mut registry = Registry::new();
        for c in candidates {
            registry.register(c);
        }
        registry.resolve_all()
    }

    fn run_scripted(durations: Vec<f64>, candidates: Vec<Candidate>) -> (String, RunSummary) {
        let mut backends = resolve(candidates);
        let mut driver = Driver::with_stopwatch(ScriptedStopwatch::new(durations));
        let mut out = Vec::new();
        let summary = driver
            .run(
                &documents(),
                &[Mode::Single, Mode::iterated(1_000).unwrap()],
                &mut backends,
                &mut out,
            )
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Single.label(), "Single Parse");
        assert_eq!(Mode::iterated(1_000).unwrap().label(), "1000 Iterations");
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(matches!(Mode::iterated(0), Err(BenchError::ZeroIterations)));
    }

    #[test]
    fn test_report_is_byte_identical_across_runs() {
        let candidates = || {
            vec![
                stub("Serde DOM", Family::Reference, false),
                stub("Rust SIMD", Family::Accelerated, false),
            ]
        };
        let (first, _) = run_scripted(vec![4.0, 1.0, 40.0, 10.0], candidates());
        let (second, _) = run_scripted(vec![4.0, 1.0, 40.0, 10.0], candidates());
        assert_eq!(first, second);
        assert!(first.contains("75.0% faster (Rust SIMD)"));
    }

    #[test]
    fn test_failed_backend_keeps_row_and_run_alive() {
        let (output, summary) = run_scripted(
            vec![2.0, 2.0],
            vec![
                stub("Serde DOM", Family::Reference, false),
                stub("Rust SIMD", Family::Accelerated, true),
            ],
        );
        assert!(output.contains("n/a"));
        assert_eq!(summary.rows.len(), 2);
        for row in &summary.rows {
            assert!(row.comparison.measurements[1].failed);
            assert_eq!(row.comparison.fastest, Some(0));
        }
    }

    #[test]
    fn test_no_documents_is_fatal() {
        let mut backends = resolve(vec![stub("Serde DOM", Family::Reference, false)]);
        let mut driver = Driver::new();
        let err = driver
            .run(&[], &[Mode::Single], &mut backends, &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, BenchError::NoDocuments));
    }

    #[test]
    fn test_no_backends_is_fatal() {
        let mut driver = Driver::new();
        let err = driver
            .run(&documents(), &[Mode::Single], &mut [], &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, BenchError::NoBackends));
    }

    #[test]
    fn test_excluded_backend_absent_from_header_and_rows() {
        let (output, summary) = run_scripted(
            vec![2.0, 1.0],
            vec![
                stub("Serde DOM", Family::Reference, false),
                Candidate::new("WASM SIMD", Family::Accelerated, || {
                    Err("module not found".to_string())
                }),
                stub("Rust SIMD", Family::Accelerated, false),
            ],
        );
        assert!(!output.contains("WASM SIMD"));
        assert_eq!(summary.backends, vec!["Serde DOM", "Rust SIMD"]);
        for row in &summary.rows {
            assert_eq!(row.comparison.measurements.len(), 2);
        }
    }

    #[test]
    fn test_real_clock_end_to_end() {
        let mut backends = resolve(vec![
            stub("Serde DOM", Family::Reference, false),
            stub("Rust SIMD", Family::Accelerated, false),
        ]);
        let mut driver = Driver::new();
        let mut out = Vec::new();
        let summary = driver
            .run(
                &documents(),
                &[Mode::Single, Mode::iterated(100).unwrap()],
                &mut backends,
                &mut out,
            )
            .unwrap();
        assert_eq!(summary.rows.len(), 2);
        for row in &summary.rows {
            for m in &row.comparison.measurements {
                assert!(m.elapsed_ms >= 0.0);
            }
        }
    }
}
