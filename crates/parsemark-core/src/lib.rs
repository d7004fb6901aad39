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

//! Parsemark Benchmark Engine
//!
//! Benchmark orchestration and reporting for interchangeable JSON parser
//! backends.
//!
//! ## Pipeline
//!
//! 1. Candidate backends are registered with a [`registry::Registry`] and
//!    probed once; backends whose probe fails are excluded, never fatal.
//! 2. The [`driver::Driver`] times every resolved backend against every
//!    sample document in every operation mode.
//! 3. [`compare::rank`] picks the fastest backend per row and the fastest
//!    per backend family.
//! 4. [`render::Layout`] turns each comparison into one fixed-width table
//!    row, streamed to the output as it is produced.
//!
//! The engine never inspects parse output; it only records whether a call
//! succeeded and how long it took.

pub mod compare;
pub mod driver;
pub mod error;
pub mod registry;
pub mod render;
pub mod samples;
pub mod summary;
pub mod timing;

pub use compare::{rank, Comparison, FamilyComparison, Measurement};
pub use driver::{Driver, Mode};
pub use error::{BenchError, ParseError, Result};
pub use registry::{Backend, Candidate, Family, Parser, Registry};
pub use render::Layout;
pub use samples::SampleDocument;
pub use summary::{RowSummary, RunSummary};
pub use timing::{time_iterated, time_once, MonotonicStopwatch, Stopwatch};

/// Default repetition count for the iterated operation mode.
pub const DEFAULT_ITERATIONS: u64 = 1_000;
