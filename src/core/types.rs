// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.2.0-bench
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for the benchmark client, located in
// the core subdirectory. It includes the algorithm identifiers shared by the
// job, the remote protocol and the backend, plus the command-line arguments.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde

use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Hashing algorithm variants a benchmark job can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "sha3x")]
    Sha3x,
    #[serde(rename = "sha256d", alias = "sha256")]
    Sha256,
}

impl Algorithm {
    /// Wire name used by the benchmark API and the config file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha3x => "sha3x",
            Algorithm::Sha256 => "sha256d",
        }
    }

    /// Case-insensitive lookup, accepting the legacy "sha256" alias
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sha3x" => Some(Algorithm::Sha3x),
            "sha256d" | "sha256" => Some(Algorithm::Sha256),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        Value::String(self.as_str().to_string())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| format!("unknown algorithm '{}'", s))
    }
}

/// Command-line arguments for the benchmark client
#[derive(Parser, Debug, Default)]
#[command(
    name = "graxil-bench",
    author = "SHA3x Mining Team",
    version,
    about = "Fixed-size hashing benchmark with online submit and verify",
    long_about = "graxil-bench runs a fixed-size hashing workload against a synthetic job and\n\
                  prints the resulting hash sum. Results can be submitted to the benchmark\n\
                  service, or a previously submitted result can be verified.\n\n\
                  Examples:\n\
                    Local run:    graxil-bench --bench 1M --algo sha3x\n\
                    Local verify: graxil-bench --bench 1M --hash 8B2A46C1F7E3D019 --seed <64 hex>\n\
                    Submit:       graxil-bench --bench 10M --submit\n\
                    Verify:       graxil-bench --verify <ID>"
)]
pub struct Args {
    /// Benchmark size: 1M..10M or 250K..999K hashes
    #[arg(long = "bench", value_name = "SIZE", help = "Benchmark size (e.g. 1M, 10M, 500K)")]
    pub bench: Option<String>,

    /// Hashing algorithm for the benchmark job
    #[arg(short = 'a', long = "algo", value_name = "ALGO", help = "Algorithm (sha3x, sha256d)")]
    pub algo: Option<String>,

    /// Number of CPU threads, 0 = auto-detect
    #[arg(
        short,
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Number of CPU threads (0 = auto-detect)"
    )]
    pub threads: usize,

    /// Expected hash sum (16 hex digits) for a local verify run
    #[arg(long, value_name = "HASH", help = "Expected hash sum for local verification")]
    pub hash: Option<String>,

    /// Seed hash (64 hex digits) for a local verify run
    #[arg(long, value_name = "SEED", help = "Seed hash used by the verified run")]
    pub seed: Option<String>,

    /// Submit the result to the online benchmark service
    #[arg(long, default_value = "false", help = "Submit result to the benchmark service")]
    pub submit: bool,

    /// Verify a benchmark previously submitted to the service
    #[arg(long = "verify", value_name = "ID", help = "Verify an online benchmark by ID")]
    pub verify: Option<String>,

    /// Bearer token of the benchmark being verified
    #[arg(long, value_name = "TOKEN", help = "Bearer token for updating an online benchmark")]
    pub token: Option<String>,

    /// JSON config file with a "benchmark" section
    #[arg(short = 'c', long = "config", value_name = "FILE", help = "JSON config file")]
    pub config: Option<PathBuf>,

    /// JSON file with known-good hash sums
    #[arg(long = "reference", value_name = "FILE", help = "Reference hash table (JSON)")]
    pub reference: Option<PathBuf>,

    #[arg(long = "api-host", value_name = "HOST", help = "Benchmark service host")]
    pub api_host: Option<String>,

    #[arg(long = "api-port", value_name = "PORT", help = "Benchmark service port")]
    pub api_port: Option<u16>,

    #[arg(long = "no-tls", default_value = "false", help = "Use plain HTTP for the benchmark service")]
    pub no_tls: bool,

    /// log4rs YAML configuration, console logging when omitted
    #[arg(long = "log-config", value_name = "FILE", help = "log4rs configuration file")]
    pub log_config: Option<PathBuf>,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        let has_source = self.bench.is_some()
            || self.config.is_some()
            || self.verify.as_deref().is_some_and(|id| !id.is_empty());
        if !has_source {
            return Err(
                "Benchmark size is required. Use --bench 1M, --verify ID or --config FILE"
                    .to_string(),
            );
        }

        if let Some(ref algo) = self.algo {
            if Algorithm::from_name(algo).is_none() {
                return Err(format!(
                    "Unsupported algorithm '{}'. Use --algo sha3x or --algo sha256d",
                    algo
                ));
            }
        }

        if self.threads > 1024 {
            return Err("Thread count cannot exceed 1024".to_string());
        }

        if self.api_port == Some(0) {
            return Err("Benchmark service port must be a valid number (1-65535)".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::from_name("SHA3X"), Some(Algorithm::Sha3x));
        assert_eq!(Algorithm::from_name("sha256"), Some(Algorithm::Sha256));
        assert_eq!(Algorithm::from_name("rx/0"), None);
        assert_eq!(Algorithm::Sha256.to_json(), Value::String("sha256d".into()));
    }

    #[test]
    fn test_algorithm_serde_alias() {
        let algo: Algorithm = serde_json::from_str("\"sha256\"").unwrap();
        assert_eq!(algo, Algorithm::Sha256);
        assert_eq!(serde_json::to_string(&Algorithm::Sha3x).unwrap(), "\"sha3x\"");
    }

    #[test]
    fn test_args_require_a_source() {
        let args = Args::default();
        assert!(args.validate().is_err());

        let args = Args {
            verify: Some("abc".into()),
            ..Args::default()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_args_reject_unknown_algorithm() {
        let args = Args {
            bench: Some("1M".into()),
            algo: Some("cn/r".into()),
            ..Args::default()
        };
        assert!(args.validate().is_err());
    }
}

// Changelog:
// - v1.2.0-bench (2025-07-02): Reworked for the benchmark client.
//   - Algorithm gained wire names, serde support and case-insensitive parsing.
//   - Args now carries benchmark size, verify id, token, reference table and API endpoint.
//   - Removed pool job, share and mining-only types.
// - v1.1.1-web (2025-06-22): Added web dashboard support.
// - v1.0.5 (2025-06-17): Fixed type mismatch for benchmark difficulty.
