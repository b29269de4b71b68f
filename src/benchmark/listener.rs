// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/listener.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the seams between the bench client and its collaborators:
// the listener that starts backend execution, the backend handle serialized at
// completion time, and the callbacks the backend drives.
//
// Tree Location:
// - src/benchmark/listener.rs (client/backend traits)
// - Depends on: serde_json, core::job

use crate::core::job::JobDescriptor;
use serde_json::Value;
use std::sync::Arc;

/// Receives the pool-style notifications that start a benchmark run.
pub trait ClientListener: Send {
    fn on_login_success(&mut self);

    /// `extra` carries pool-specific parameters; the bench client always
    /// passes null.
    fn on_job_received(&mut self, job: &JobDescriptor, extra: &Value);
}

/// Read-only view of the backend executing the run
pub trait Backend: Send + Sync {
    fn to_json(&self) -> Value;
}

/// Backend progress callbacks, timestamps in monotonic milliseconds
pub trait BenchListener {
    fn on_bench_start(&mut self, ts: u64, threads: u32, backend: &Arc<dyn Backend>);
    fn on_bench_done(&mut self, result: u64, ts: u64);
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial listener traits.
//   - Purpose: Decouples the bench client from the CPU runner so the client
//     state machine can be driven by test doubles.
