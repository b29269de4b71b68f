// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/job.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the synthetic benchmark job handed to the backend as if it
// had been received from a pool. The job is built once by the bench client and
// updated in place when the benchmark service answers.
//
// Tree Location:
// - src/core/job.rs (benchmark job descriptor)
// - Depends on: hex, core::types

use crate::core::types::Algorithm;

/// Size of the placeholder block template in bytes
pub const BLOB_SIZE: usize = 112;

/// Size of a seed hash in bytes
pub const MAX_SEED_SIZE: usize = 32;

/// Job id used by local benchmarks
pub const STATIC_JOB_ID: &str = "00000000";

/// Synthetic job description consumed by the hashing backend
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescriptor {
    id: String,
    blob: String,
    algorithm: Algorithm,
    diff: u64,
    height: u64,
    seed_hash: String,
    bench_size: u32,
}

impl JobDescriptor {
    /// All-zero hex template, two characters per blob byte
    pub fn placeholder_blob() -> String {
        "0".repeat(BLOB_SIZE * 2)
    }

    /// Placeholder blob truncated to seed length
    pub fn placeholder_seed() -> String {
        let mut seed = Self::placeholder_blob();
        seed.truncate(MAX_SEED_SIZE * 2);
        seed
    }

    /// A seed hash is accepted only as exactly 32 bytes of hex
    pub fn is_valid_seed(hash: &str) -> bool {
        hash.len() == MAX_SEED_SIZE * 2 && hex::decode(hash).is_ok()
    }

    /// Job with the placeholder blob, maximum difficulty and height 1
    pub fn new(algorithm: Algorithm, bench_size: u32) -> Self {
        Self {
            id: String::new(),
            blob: Self::placeholder_blob(),
            algorithm,
            diff: u64::MAX,
            height: 1,
            seed_hash: String::new(),
            bench_size,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn blob(&self) -> &str {
        &self.blob
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn diff(&self) -> u64 {
        self.diff
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn seed_hash(&self) -> &str {
        &self.seed_hash
    }

    pub fn bench_size(&self) -> u32 {
        self.bench_size
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_bench_size(&mut self, size: u32) {
        self.bench_size = size;
    }

    /// Replace the seed hash. Returns false and keeps the current seed when
    /// the value is not 64 hex characters.
    pub fn set_seed_hash(&mut self, hash: &str) -> bool {
        if !Self::is_valid_seed(hash) {
            return false;
        }

        self.seed_hash = hash.to_string();
        true
    }

    pub fn blob_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(&self.blob)
    }

    pub fn seed_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(&self.seed_hash)
    }
}


// Changelog:
// - v1.0.0 (2025-07-02): Initial benchmark job descriptor.
//   - Purpose: Replaces the static pool jobs used by the old benchmark runner
//     with a single descriptor owned by the bench client.
//   - Features: Placeholder blob and seed, seed validation, in-place updates.
