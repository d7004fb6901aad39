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

//! Monotonic timing primitives.
//!
//! Both entry points bracket the work between two [`Instant`] reads and
//! report fractional milliseconds. Iterated timing uses a single bracket
//! around the whole loop, with no warm-up, so the result is the total cost
//! of all repetitions. An error from the timed operation propagates
//! immediately and aborts the remaining iterations of that measurement only.

use std::num::NonZeroU64;
use std::time::Instant;

use crate::error::ParseError;

/// A timed operation: one parse call against one backend.
pub type Op<'a> = dyn FnMut() -> Result<(), ParseError> + 'a;

/// Timing source for the run driver.
///
/// The monotonic implementation is the only one used outside tests; a
/// scripted implementation lets report-format tests inject fixed durations
/// and assert byte-identical output.
pub trait Stopwatch {
    /// Times exactly one invocation of `op`.
    fn time_once(&mut self, op: &mut Op<'_>) -> Result<f64, ParseError>;

    /// Times exactly `count` invocations of `op` as one bracketed total.
    fn time_iterated(&mut self, op: &mut Op<'_>, count: NonZeroU64) -> Result<f64, ParseError>;
}

/// Stopwatch backed by [`Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicStopwatch;

impl Stopwatch for MonotonicStopwatch {
    fn time_once(&mut self, op: &mut Op<'_>) -> Result<f64, ParseError> {
        time_once(op)
    }

    fn time_iterated(&mut self, op: &mut Op<'_>, count: NonZeroU64) -> Result<f64, ParseError> {
        time_iterated(op, count)
    }
}

/// Invokes `op` exactly once, bracketed by two monotonic clock reads, and
/// returns the elapsed time in fractional milliseconds.
pub fn time_once<F>(mut op: F) -> Result<f64, ParseError>
where
    F: FnMut() -> Result<(), ParseError>,
{
    let start = Instant::now();
    op()?;
    Ok(elapsed_ms(start))
}

/// Invokes `op` exactly `count` times in a tight sequence and returns the
/// total elapsed time for all calls in fractional milliseconds.
///
/// The operation must be idempotent across repeated calls so that the total
/// reflects steady-state cost rather than cumulative state growth.
pub fn time_iterated<F>(mut op: F, count: NonZeroU64) -> Result<f64, ParseError>
where
    F: FnMut() -> Result<(), ParseError>,
{
    let start = Instant::now();
    for _ in 0..count.get() {
        op()?;
    }
    Ok(elapsed_ms(start))
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn count(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn test_time_once_returns_elapsed_ms() {
        let elapsed = time_once(|| {
            thread::sleep(Duration::from_millis(2));
            Ok(())
        })
        .unwrap();
        assert!(elapsed >= 2.0);
    }

    #[test]
    fn test_time_once_propagates_error() {
        let result = time_once(|| Err(ParseError::new("bad input")));
        assert!(result.is_err());
    }

    #[test]
    fn test_time_iterated_calls_exact_count() {
        let mut calls = 0u64;
        let elapsed = time_iterated(
            || {
                calls += 1;
                Ok(())
            },
            count(50),
        )
        .unwrap();
        assert_eq!(calls, 50);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_time_iterated_aborts_on_first_error() {
        let mut calls = 0u64;
        let result = time_iterated(
            || {
                calls += 1;
                if calls == 3 {
                    Err(ParseError::new("bad input"))
                } else {
                    Ok(())
                }
            },
            count(100),
        );
        assert!(result.is_err());
        assert_eq!(calls, 3);
    }

    // Timing tests must tolerate platform jitter: only order of magnitude
    // is asserted, never exact equality.
    #[test]
    fn test_iterated_fixed_cost_is_same_order_of_magnitude() {
        let elapsed = time_iterated(
            || {
                thread::sleep(Duration::from_micros(10));
                Ok(())
            },
            count(1_000),
        )
        .unwrap();
        assert!(elapsed >= 10.0);
        assert!(elapsed.is_finite());
    }
}
