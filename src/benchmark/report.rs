// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/report.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file turns a finished run into the completion line: elapsed seconds and
// the hash sum, coloured by comparison with the reference hash.
//
// Tree Location:
// - src/benchmark/report.rs (result reporting)
// - Depends on: colored, utils::format

use crate::utils::format::FormatUtils;
use colored::{ColoredString, Colorize};

/// Outcome of comparing a hash sum with the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashCheck {
    Match,
    Mismatch,
    /// No reference known (reference of 0)
    Unknown,
}

impl HashCheck {
    pub fn classify(result: u64, reference: u64) -> Self {
        if reference == 0 {
            HashCheck::Unknown
        } else if result == reference {
            HashCheck::Match
        } else {
            HashCheck::Mismatch
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            HashCheck::Match => text.green().bold(),
            HashCheck::Mismatch => text.red().bold(),
            HashCheck::Unknown => text.bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub elapsed_ms: u64,
    pub hash: u64,
    pub check: HashCheck,
}

impl BenchReport {
    pub fn new(start_ts: u64, done_ts: u64, hash: u64, reference: u64) -> Self {
        Self {
            elapsed_ms: done_ts.saturating_sub(start_ts),
            hash,
            check: HashCheck::classify(hash, reference),
        }
    }

    /// Completion line without colour
    pub fn summary_line(&self) -> String {
        format!(
            "benchmark finished in {} seconds hash sum = {}",
            FormatUtils::format_elapsed(self.elapsed_ms),
            FormatUtils::format_hash(self.hash)
        )
    }

    /// Completion line with the hash coloured by the reference check
    pub fn colored_line(&self) -> String {
        format!(
            "{} {} {} {}",
            "benchmark finished in".bold(),
            format!("{} seconds", FormatUtils::format_elapsed(self.elapsed_ms))
                .cyan()
                .bold(),
            "hash sum =".bold(),
            self.check.paint(&FormatUtils::format_hash(self.hash))
        )
    }
}


// Changelog:
// - v1.0.0 (2025-07-02): Initial result reporting.
//   - Purpose: Replaces the profiler's performance summary with the hash sum
//     completion line and reference check.
