// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides formatting helpers for benchmark output: hash sums,
// elapsed times, hashrates and hash counts.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

/// Utility functions for formatting benchmark output
pub struct FormatUtils;

impl FormatUtils {
    /// Hash sum as 16 uppercase hex digits
    pub fn format_hash(hash: u64) -> String {
        format!("{:016X}", hash)
    }

    /// Millisecond interval as seconds with three decimals
    pub fn format_elapsed(ms: u64) -> String {
        format!("{:.3}", ms as f64 / 1000.0)
    }

    /// Format hashrate in appropriate units (H/s, KH/s, MH/s, GH/s)
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000_000.0 {
            format!("{:.2} GH/s", hashrate / 1_000_000_000.0)
        } else if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} KH/s", hashrate / 1_000.0)
        } else {
            format!("{:.2} H/s", hashrate)
        }
    }

    /// Benchmark size the way it is written on the command line
    pub fn format_size(size: u32) -> String {
        if size >= 1_000_000 && size % 1_000_000 == 0 {
            format!("{}M", size / 1_000_000)
        } else if size >= 1_000 && size % 1_000 == 0 {
            format!("{}K", size / 1_000)
        } else {
            size.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hash_is_zero_padded() {
        assert_eq!(FormatUtils::format_hash(0xABCD), "000000000000ABCD");
        assert_eq!(FormatUtils::format_hash(u64::MAX), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(FormatUtils::format_elapsed(500), "0.500");
        assert_eq!(FormatUtils::format_elapsed(12_345), "12.345");
    }

    #[test]
    fn test_format_hashrate_and_size() {
        assert_eq!(FormatUtils::format_hashrate(2_500_000.0), "2.50 MH/s");
        assert_eq!(FormatUtils::format_hashrate(12.0), "12.00 H/s");
        assert_eq!(FormatUtils::format_size(10_000_000), "10M");
        assert_eq!(FormatUtils::format_size(250_000), "250K");
        assert_eq!(FormatUtils::format_size(0), "0");
    }
}

// Changelog:
// - v1.1.0 (2025-07-02): Benchmark output helpers.
//   - Added format_hash, format_elapsed and format_size.
//   - Removed format_duration and format_number, which only served the miner
//     status display.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
