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

//! Parsemark CLI library.
//!
//! Wires sample documents, operation modes, and the probed backend set into
//! the core run driver.
//!
//! # Commands
//!
//! - **run**: probe the backends, time every (document, mode, backend)
//!   combination, and stream the comparison table to stdout.
//! - **backends**: probe the backends and list which ones are available.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
