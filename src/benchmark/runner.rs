// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 2.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the CPU benchmark backend. It receives the synthetic job
// from the bench client, hashes nonces 0..size across the worker threads and
// folds every hash into a single 64-bit sum. The sum does not depend on the
// thread count, so results from different machines can be compared.

use crate::benchmark::events::ClientEvent;
use crate::benchmark::listener::{Backend, ClientListener};
use crate::benchmark::stats::{BenchStats, ThreadStats};
use crate::core::job::JobDescriptor;
use crate::core::sha256::{HEADER_SIZE, header_from_template, sha256d_hash, sha256d_hash_with_nonce_batch};
use crate::core::sha3x::{sha3x_hash_with_nonce, sha3x_hash_with_nonce_batch};
use crate::core::types::Algorithm;
use crate::utils::clock::steady_ms;
use crate::utils::format::FormatUtils;
use log::{debug, error, info, warn};
use serde_json::{Value, json};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc::UnboundedSender;

const LOG_TARGET: &str = "tari::bench::runner";

/// Hashes counted locally before touching the shared counter
const STATS_INTERVAL: u64 = 1 << 16;

/// Decoded job input for the hashing threads
#[derive(Debug, Clone, PartialEq)]
pub struct BenchWork {
    pub algorithm: Algorithm,
    /// Seed hash followed by the blob
    pub template: Vec<u8>,
    pub size: u32,
}

impl BenchWork {
    pub fn new(algorithm: Algorithm, template: Vec<u8>, size: u32) -> Self {
        Self {
            algorithm,
            template,
            size,
        }
    }

    pub fn from_job(job: &JobDescriptor) -> Result<Self, hex::FromHexError> {
        let mut template = job.seed_bytes()?;
        template.extend_from_slice(&job.blob_bytes()?);
        Ok(Self::new(job.algorithm(), template, job.bench_size()))
    }
}

/// First 8 bytes of a hash as a big-endian integer
fn fold(hash: &[u8; 32]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_be_bytes(bytes)
}

/// Nonce range of one thread, contiguous and covering 0..size across threads
fn thread_range(size: u64, thread_id: usize, threads: usize) -> (u64, u64) {
    let threads = threads as u64;
    let id = thread_id as u64;
    (size * id / threads, size * (id + 1) / threads)
}

fn hash_sha3x_range(template: &[u8], start: u64, end: u64, stats: &ThreadStats) -> u64 {
    let mut sum = 0u64;
    let mut pending = 0u64;
    let mut nonce = start;

    while nonce + 4 <= end {
        for (hash, _) in sha3x_hash_with_nonce_batch(template, nonce).iter() {
            sum ^= fold(hash);
        }
        nonce += 4;
        pending += 4;
        if pending >= STATS_INTERVAL {
            stats.record_hashes(pending);
            pending = 0;
        }
    }
    while nonce < end {
        sum ^= fold(&sha3x_hash_with_nonce(template, nonce));
        nonce += 1;
        pending += 1;
    }

    stats.record_hashes(pending);
    sum
}

fn hash_sha256d_range(header: &[u8; HEADER_SIZE], start: u64, end: u64, stats: &ThreadStats) -> u64 {
    let mut sum = 0u64;
    let mut pending = 0u64;
    let mut nonce = start;

    while nonce + 4 <= end {
        for (hash, _) in sha256d_hash_with_nonce_batch(header, nonce as u32).iter() {
            sum ^= fold(hash);
        }
        nonce += 4;
        pending += 4;
        if pending >= STATS_INTERVAL {
            stats.record_hashes(pending);
            pending = 0;
        }
    }
    let mut tail = *header;
    while nonce < end {
        tail[76..80].copy_from_slice(&(nonce as u32).to_le_bytes());
        sum ^= fold(&sha256d_hash(&tail));
        nonce += 1;
        pending += 1;
    }

    stats.record_hashes(pending);
    sum
}

/// Hash the whole run on `stats.thread_count()` threads and return the sum
pub fn run_work(work: &BenchWork, stats: &BenchStats) -> u64 {
    let threads = stats.thread_count().max(1);
    let size = u64::from(work.size);
    let header = header_from_template(&work.template);

    thread::scope(|scope| {
        let handles: Vec<_> = stats
            .thread_stats
            .iter()
            .enumerate()
            .map(|(thread_id, thread_stats)| {
                let (start, end) = thread_range(size, thread_id, threads);
                let header = &header;
                scope.spawn(move || {
                    let begin = steady_ms();
                    let sum = match work.algorithm {
                        Algorithm::Sha3x => hash_sha3x_range(&work.template, start, end, thread_stats),
                        Algorithm::Sha256 => hash_sha256d_range(header, start, end, thread_stats),
                    };
                    thread_stats.finish(steady_ms() - begin);
                    debug!(target: LOG_TARGET,
                        "Thread {}: nonces {}..{} done, {}",
                        thread_id,
                        start,
                        end,
                        FormatUtils::format_hashrate(thread_stats.get_hashrate())
                    );
                    sum
                })
            })
            .collect();

        handles.into_iter().enumerate().fold(0u64, |acc, (i, handle)| match handle.join() {
            Ok(sum) => acc ^ sum,
            Err(_) => {
                error!(target: LOG_TARGET, "Thread {} panicked, result is incomplete", i);
                acc
            }
        })
    })
}

/// Backend handle the bench client serializes with the done update
pub struct CpuBackend {
    stats: BenchStats,
}

impl CpuBackend {
    pub fn new(threads: usize, algorithm: Algorithm) -> Self {
        Self {
            stats: BenchStats::new(threads, algorithm),
        }
    }

    pub fn stats(&self) -> &BenchStats {
        &self.stats
    }
}

impl Backend for CpuBackend {
    fn to_json(&self) -> Value {
        json!({
            "type": "cpu",
            "stats": self.stats.to_json(),
        })
    }
}

/// Runs the benchmark when the bench client hands over the job
pub struct BenchmarkRunner {
    threads: usize,
    events: UnboundedSender<ClientEvent>,
    backend: Option<Arc<CpuBackend>>,
    handle: Option<JoinHandle<()>>,
}

impl BenchmarkRunner {
    /// `threads` of 0 uses every logical CPU
    pub fn new(threads: usize, events: UnboundedSender<ClientEvent>) -> Self {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        Self {
            threads,
            events,
            backend: None,
            handle: None,
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn backend(&self) -> Option<Arc<CpuBackend>> {
        self.backend.clone()
    }

    fn spawn(&mut self, work: BenchWork) {
        let backend = Arc::new(CpuBackend::new(self.threads, work.algorithm));
        self.backend = Some(Arc::clone(&backend));

        let events = self.events.clone();
        let threads = self.threads as u32;

        self.handle = Some(thread::spawn(move || {
            let start = steady_ms();
            let handle: Arc<dyn Backend> = backend.clone();
            if events
                .send(ClientEvent::BenchStart {
                    ts: start,
                    threads,
                    backend: handle,
                })
                .is_err()
            {
                warn!(target: LOG_TARGET, "Bench client gone, not starting");
                return;
            }

            let result = run_work(&work, backend.stats());
            let done = steady_ms();
            backend.stats().set_elapsed(done - start);

            info!(target: LOG_TARGET,
                "📊 {} hashes at {}",
                backend.stats().total_hashes(),
                FormatUtils::format_hashrate(backend.stats().get_total_hashrate())
            );

            if events.send(ClientEvent::BenchDone { result, ts: done }).is_err() {
                warn!(target: LOG_TARGET, "Bench client gone, result {:016X} dropped", result);
            }
        }));
    }
}

impl ClientListener for BenchmarkRunner {
    fn on_login_success(&mut self) {
        debug!(target: LOG_TARGET, "Bench client ready");
    }

    fn on_job_received(&mut self, job: &JobDescriptor, _extra: &Value) {
        if self.handle.is_some() {
            warn!(target: LOG_TARGET, "Job {} ignored, benchmark already running", job.id());
            return;
        }

        let work = match BenchWork::from_job(job) {
            Ok(work) => work,
            Err(e) => {
                error!(target: LOG_TARGET, "Invalid job {}: {}", job.id(), e);
                return;
            }
        };

        info!(target: LOG_TARGET,
            "🧵 Hashing {} {} nonces on {} threads",
            FormatUtils::format_size(work.size),
            work.algorithm,
            self.threads
        );
        self.spawn(work);
    }
}


// Changelog:
// - v2.0.1 (2025-07-04): Log a dropped result when the client is gone.
// - v2.0.0 (2025-07-02): Fixed-size benchmark backend for the bench client.
//   - Replaced the duration-driven share search with hashing of nonces
//     0..size, folded into a thread-count independent 64-bit sum.
//   - Each thread hashes one contiguous nonce range with the batch kernels.
//   - Runner is started through ClientListener and reports BenchStart and
//     BenchDone as ClientEvents with steady millisecond timestamps.
//   - Removed profiler, share collector and progress reporter threads.
// - v1.0.29 (2025-06-23): Fixed benchmark duration logic.
