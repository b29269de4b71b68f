// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the benchmark module: the bench client that feeds a
// synthetic job to the backend, its configuration and reference hashes, and
// the CPU backend that executes the run.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: client, config, events, listener, reference, report, runner, stats

pub mod client;
pub mod config;
pub mod events;
pub mod listener;
pub mod reference;
pub mod report;
pub mod runner;
pub mod stats;

// Re-export key benchmark types
pub use client::{BenchClient, ClientState, Mode, RunMetadata, build_job, select_mode};
pub use config::{ApiEndpoint, BenchConfig, ConfigError};
pub use events::ClientEvent;
pub use listener::{Backend, BenchListener, ClientListener};
pub use reference::{ReferenceOracle, ReferenceTable};
pub use report::{BenchReport, HashCheck};
pub use runner::{BenchWork, BenchmarkRunner, CpuBackend, run_work};
pub use stats::{BenchStats, ThreadStats};

// Changelog:
// - v2.0.0 (2025-07-02): Bench client.
//   - Added client, config, events, listener, reference, report and stats.
//   - Removed jobs and profiler; the runner now executes client-provided jobs.
// - v1.0.0 (2025-06-14): Initial benchmark module creation.
