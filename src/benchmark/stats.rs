// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/stats.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file tracks hash counts for a benchmark run, per worker thread and in
// total. Worker threads update the counters; the backend JSON sent with the
// done update reads them.
//
// Tree Location:
// - src/benchmark/stats.rs (run statistics)
// - Depends on: std, serde_json, utils::format

use crate::core::types::Algorithm;
use crate::utils::format::FormatUtils;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct ThreadStats {
    thread_id: usize,
    pub hashes_computed: AtomicU64,
    elapsed_ms: AtomicU64,
}

impl ThreadStats {
    pub fn new(thread_id: usize) -> Self {
        Self {
            thread_id,
            hashes_computed: AtomicU64::new(0),
            elapsed_ms: AtomicU64::new(0),
        }
    }

    pub fn thread_id(&self) -> usize {
        self.thread_id
    }

    pub fn record_hashes(&self, hashes: u64) {
        self.hashes_computed.fetch_add(hashes, Ordering::Relaxed);
    }

    /// Mark the thread finished after `elapsed_ms` of work
    pub fn finish(&self, elapsed_ms: u64) {
        self.elapsed_ms.store(elapsed_ms, Ordering::Relaxed);
    }

    pub fn hashes(&self) -> u64 {
        self.hashes_computed.load(Ordering::Relaxed)
    }

    pub fn get_hashrate(&self) -> f64 {
        rate(self.hashes(), self.elapsed_ms.load(Ordering::Relaxed))
    }
}

/// Statistics of the whole run
pub struct BenchStats {
    algorithm: Algorithm,
    pub thread_stats: Vec<Arc<ThreadStats>>,
    elapsed_ms: AtomicU64,
}

impl BenchStats {
    pub fn new(num_threads: usize, algorithm: Algorithm) -> Self {
        let thread_stats = (0..num_threads)
            .map(|i| Arc::new(ThreadStats::new(i)))
            .collect();

        Self {
            algorithm,
            thread_stats,
            elapsed_ms: AtomicU64::new(0),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn thread_count(&self) -> usize {
        self.thread_stats.len()
    }

    pub fn total_hashes(&self) -> u64 {
        self.thread_stats.iter().map(|t| t.hashes()).sum()
    }

    pub fn set_elapsed(&self, elapsed_ms: u64) {
        self.elapsed_ms.store(elapsed_ms, Ordering::Relaxed);
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.load(Ordering::Relaxed)
    }

    pub fn get_total_hashrate(&self) -> f64 {
        rate(self.total_hashes(), self.elapsed_ms())
    }

    pub fn to_json(&self) -> Value {
        let threads: Vec<Value> = self
            .thread_stats
            .iter()
            .map(|t| {
                json!({
                    "id": t.thread_id(),
                    "hashes": t.hashes(),
                    "hashrate": t.get_hashrate(),
                })
            })
            .collect();

        json!({
            "algo": self.algorithm.to_json(),
            "threads": self.thread_count(),
            "hashes": self.total_hashes(),
            "elapsed_ms": self.elapsed_ms(),
            "hashrate": self.get_total_hashrate(),
            "hashrate_str": FormatUtils::format_hashrate(self.get_total_hashrate()),
            "per_thread": threads,
        })
    }
}

fn rate(hashes: u64, elapsed_ms: u64) -> f64 {
    if elapsed_ms == 0 {
        0.0
    } else {
        hashes as f64 * 1000.0 / elapsed_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_and_rate() {
        let stats = BenchStats::new(2, Algorithm::Sha3x);
        stats.thread_stats[0].record_hashes(1500);
        stats.thread_stats[1].record_hashes(500);
        stats.thread_stats[0].finish(1000);
        assert_eq!(stats.total_hashes(), 2000);
        assert_eq!(stats.get_total_hashrate(), 0.0);

        stats.set_elapsed(500);
        assert_eq!(stats.get_total_hashrate(), 4000.0);
        assert_eq!(stats.thread_stats[0].get_hashrate(), 1500.0);

        let json = stats.to_json();
        assert_eq!(json["threads"], 2);
        assert_eq!(json["hashes"], 2000);
        assert_eq!(json["per_thread"][1]["hashes"], 500);
        assert_eq!(json["hashrate_str"], "4.00 KH/s");
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Run statistics for the CPU backend.
//   - Purpose: Replaces the miner-wide share and hashrate tracking with hash
//     counts for a single fixed-size run.
