// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for the SHA3x benchmark
// client. It exports all public modules and types that the binary and the
// integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: benchmark, core, remote, utils

pub mod benchmark;
pub mod core;
pub mod remote;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{BenchClient, BenchConfig, BenchmarkRunner, ReferenceTable};
pub use crate::core::{Algorithm, JobDescriptor, sha3x, sha256};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v2.0.0 (2025-07-02): Benchmark client library.
//   - Replaced miner, pool and help exports with benchmark and remote.
// - v1.0.2 (2025-06-15): Added help module support.
// - v1.0.1 (2025-06-14): Added benchmark module support.
// - v1.0.0 (2025-06-14): Initial modular breakout from monolithic main.rs.
