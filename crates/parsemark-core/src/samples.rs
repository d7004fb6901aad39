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

//! Sample documents for the benchmark workload.
//!
//! Documents are loaded fully into memory before any timing begins. The
//! default set mirrors the reference workload: one small mixed document,
//! one large array, one large flat object. When a default file is missing
//! on disk, a deterministic generated payload of the same shape is used
//! instead, so the harness runs out of the box.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Default sample file names, in report order.
pub const DEFAULT_SAMPLES: &[&str] = &[
    "sample.json",
    "sample-big-array.json",
    "sample-big-object.json",
];

/// Entity count for the generated large samples.
const BIG_COUNT: usize = 1_000;

/// A named, immutable document payload.
#[derive(Debug, Clone)]
pub struct SampleDocument {
    /// Report row label, the file name.
    pub name: String,
    /// Full document text.
    pub text: String,
}

impl SampleDocument {
    /// Loads a document from a file, using the file name as its label.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| BenchError::io_error(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, text })
    }
}

/// Loads the default sample set from `dir`.
///
/// Missing files fall back to generated payloads; this never fails.
pub fn load_default_samples(dir: &Path) -> Vec<SampleDocument> {
    DEFAULT_SAMPLES
        .iter()
        .map(|name| match fs::read_to_string(dir.join(name)) {
            Ok(text) => SampleDocument {
                name: name.to_string(),
                text,
            },
            Err(_) => SampleDocument {
                name: name.to_string(),
                text: generate_sample(name),
            },
        })
        .collect()
}

/// Generates the payload for one of the default sample names.
///
/// Generation is deterministic: the same name always yields the same bytes.
pub fn generate_sample(name: &str) -> String {
    match name {
        "sample-big-array.json" => generate_big_array(BIG_COUNT),
        "sample-big-object.json" => generate_big_object(BIG_COUNT),
        _ => generate_small(),
    }
}

fn generate_small() -> String {
    concat!(
        r#"{"id":1,"name":"parsemark sample","active":true,"score":98.6,"#,
        r#""tags":["benchmark","json","simd"],"#,
        r#""owner":{"name":"sample owner","email":"owner@example.com"},"#,
        r#""history":[{"at":"2024-01-01T00:00:00Z","event":"created"},"#,
        r#"{"at":"2024-06-01T12:30:00Z","event":"updated"}],"#,
        r#""description":null}"#
    )
    .to_string()
}

fn generate_big_array(count: usize) -> String {
    let mut out = String::with_capacity(count * 96);
    out.push('[');
    for i in 0..count {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(
            out,
            r#"{{"id":{i},"name":"entity-{i}","value":{}.{:03},"flags":[{},{}]}}"#,
            i * 7 % 1_000,
            i % 1_000,
            i % 2 == 0,
            i % 3 == 0,
        );
    }
    out.push(']');
    out
}

fn generate_big_object(count: usize) -> String {
    let mut out = String::with_capacity(count * 48);
    out.push('{');
    for i in 0..count {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, r#""key_{i:04}":{{"index":{i},"weight":{}}}"#, i * 3 % 100);
    }
    out.push('}');
    out
}
