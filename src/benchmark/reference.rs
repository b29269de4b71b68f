// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/reference.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides the reference-hash oracle used to judge a benchmark
// result. The bench client only sees the ReferenceOracle trait; the binary
// feeds it a ReferenceTable loaded from JSON.
//
// Tree Location:
// - src/benchmark/reference.rs (known-good hash sums)
// - Depends on: serde, serde_json, benchmark::config

use crate::benchmark::config::{ConfigError, parse_hash, parse_size};
use crate::core::types::Algorithm;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const LOG_TARGET: &str = "tari::bench::reference";

/// Known-good hash sums keyed by algorithm, size and thread count.
/// A return value of 0 means the combination is unknown.
pub trait ReferenceOracle {
    fn lookup(&self, algorithm: Algorithm, size: u32, threads: u32) -> u64;
}

/// One row of the reference file
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceEntry {
    pub algo: Algorithm,
    /// Size as "1M"/"250K"
    pub size: String,
    /// Thread count the hash was recorded with, any when absent
    #[serde(default)]
    pub threads: Option<u32>,
    pub hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: HashMap<(Algorithm, u32, Option<u32>), u64>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, algorithm: Algorithm, size: u32, threads: Option<u32>, hash: u64) {
        self.entries.insert((algorithm, size, threads), hash);
    }

    pub fn from_entries(entries: &[ReferenceEntry]) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(
                entry.algo,
                parse_size(&entry.size)?,
                entry.threads,
                parse_hash(&entry.hash)?,
            );
        }
        Ok(table)
    }

    /// Load a JSON array of reference entries
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let entries: Vec<ReferenceEntry> =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let table = Self::from_entries(&entries)?;
        info!(target: LOG_TARGET, "📚 Loaded {} reference hashes from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReferenceOracle for ReferenceTable {
    fn lookup(&self, algorithm: Algorithm, size: u32, threads: u32) -> u64 {
        self.entries
            .get(&(algorithm, size, Some(threads)))
            .or_else(|| self.entries.get(&(algorithm, size, None)))
            .copied()
            .unwrap_or(0)
    }
}


// Changelog:
// - v1.0.0 (2025-07-02): Initial reference hash table.
//   - Purpose: Supplies known-good hash sums for pass/fail reporting.
//   - Features: ReferenceOracle trait, thread-specific and generic entries,
//     JSON loading with size/hash validation.
