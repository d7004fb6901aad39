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

//! Sandboxed portable backend.
//!
//! Executes a pre-built wasm-bindgen-style parser module under the
//! wasmtime runtime. The module is located, compiled, and instantiated
//! once during probing, entirely before any timed region; only the
//! per-call parse path runs inside measurements.
//!
//! Expected module exports: `memory`, `__wbindgen_malloc`,
//! `__wbindgen_free`, and a `parse` function of shape
//! `(ptr: i32, len: i32) -> i32` returning nonzero on success.
//!
//! Build the module first:
//! ```bash
//! wasm-pack build --release --target web
//! ```

use std::path::{Path, PathBuf};

use parsemark_core::error::ParseError;
use parsemark_core::registry::{Candidate, Family, Parser};
use wasmtime::{Engine, Instance, Memory, Module, Store, TypedFunc};

use crate::probe_parse;

/// Default locations searched for the parser module.
pub const DEFAULT_MODULE_CANDIDATES: &[&str] = &[
    "wasm/parsemark_wasm_bg.wasm",
    "target/wasm32-unknown-unknown/release/parsemark_wasm.wasm",
];

/// Parser driving the sandboxed module through its exported entry points.
pub struct WasmParser {
    store: Store<()>,
    memory: Memory,
    alloc_fn: TypedFunc<i32, i32>,
    dealloc_fn: TypedFunc<(i32, i32), ()>,
    parse_fn: TypedFunc<(i32, i32), i32>,
}

impl WasmParser {
    /// Reads, compiles, and instantiates a module file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let wasm_bytes = std::fs::read(path)?;
        Self::from_bytes(&wasm_bytes)
    }

    /// Compiles and instantiates a module from its binary.
    pub fn from_bytes(wasm_bytes: &[u8]) -> anyhow::Result<Self> {
        let engine = Engine::default();
        let module = Module::new(&engine, wasm_bytes)?;
        let mut store = Store::new(&engine, ());
        let instance = Instance::new(&mut store, &module, &[])?;

        let memory = instance
            .get_memory(&mut store, "memory")
            .ok_or_else(|| anyhow::anyhow!("memory export not found"))?;

        let alloc_fn = instance.get_typed_func::<i32, i32>(&mut store, "__wbindgen_malloc")?;
        let dealloc_fn = instance.get_typed_func::<(i32, i32), ()>(&mut store, "__wbindgen_free")?;
        let parse_fn = instance.get_typed_func::<(i32, i32), i32>(&mut store, "parse")?;

        Ok(Self {
            store,
            memory,
            alloc_fn,
            dealloc_fn,
            parse_fn,
        })
    }

    fn call(&mut self, input: &str) -> anyhow::Result<()> {
        let bytes = input.as_bytes();
        let len = i32::try_from(bytes.len())?;

        let ptr = self.alloc_fn.call(&mut self.store, len)?;
        self.memory.write(&mut self.store, ptr as usize, bytes)?;
        let status = self.parse_fn.call(&mut self.store, (ptr, len))?;
        self.dealloc_fn.call(&mut self.store, (ptr, len))?;

        if status == 0 {
            anyhow::bail!("module reported a parse failure");
        }
        Ok(())
    }
}

impl Parser for WasmParser {
    fn parse(&mut self, input: &str) -> Result<(), ParseError> {
        self.call(input).map_err(|e| ParseError::new(e.to_string()))
    }
}

/// Locates the module file: an explicit path wins, otherwise the first
/// existing default candidate.
pub fn find_module(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => path.exists().then(|| path.to_path_buf()),
        None => DEFAULT_MODULE_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists()),
    }
}

/// The sandboxed candidate. Probing performs the one-time compile and
/// instantiation and a trivial parse; any failure excludes the backend
/// without affecting the run.
pub fn candidate(module_path: Option<PathBuf>) -> Candidate {
    Candidate::new("WASM SIMD", Family::Accelerated, move || {
        let path = find_module(module_path.as_deref()).ok_or_else(|| {
            "module not found; build it with wasm-pack or pass --wasm-module".to_string()
        })?;
        let mut parser =
            WasmParser::from_file(&path).map_err(|e| format!("module failed to load: {e}"))?;
        probe_parse(&mut parser)?;
        Ok(Box::new(parser) as Box<dyn Parser>)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsemark_core::registry::Registry;

    #[test]
    fn test_find_module_explicit_missing() {
        assert!(find_module(Some(Path::new("/nonexistent/module.wasm"))).is_none());
    }

    #[test]
    fn test_missing_module_degrades_quietly() {
        let mut registry = Registry::new();
        registry.register(candidate(Some(PathBuf::from("/nonexistent/module.wasm"))));
        assert!(registry.resolve_all().is_empty());
    }

    #[test]
    fn test_garbage_module_fails_probe() {
        assert!(WasmParser::from_bytes(b"not a wasm module").is_err());
    }

    // A minimal hand-assembled module with the expected export surface:
    // parse() accepts any input, so the probe admits the backend.
    #[test]
    fn test_wat_module_round_trip() {
        let wat = r#"
            (module
              (memory (export "memory") 1)
              (global $next (mut i32) (i32.const 16))
              (func (export "__wbindgen_malloc") (param i32) (result i32)
                (local $ptr i32)
                (local.set $ptr (global.get $next))
                (global.set $next
                  (i32.add (global.get $next) (local.get 0)))
                (local.get $ptr))
              (func (export "__wbindgen_free") (param i32 i32))
              (func (export "parse") (param i32 i32) (result i32)
                (i32.const 1)))
        "#;
        // Module::new accepts WAT text directly with wasmtime's default
        // `wat` feature.
        let mut parser = WasmParser::from_bytes(wat.as_bytes()).unwrap();
        assert!(parser.parse(r#"{"probe":true}"#).is_ok());
        assert!(parser.parse("[1,2,3]").is_ok());
    }
}
