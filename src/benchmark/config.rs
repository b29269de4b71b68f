// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/config.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file holds the benchmark configuration consumed by the bench client:
// requested size and algorithm, optional fixed hash and seed, the online job
// id and token, the submit flag and the benchmark service endpoint. Values come
// from an optional JSON config file overridden by command-line arguments.
//
// Tree Location:
// - src/benchmark/config.rs (benchmark configuration)
// - Depends on: serde, serde_json, thiserror, core::types

use crate::core::types::{Algorithm, Args};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_TARGET: &str = "tari::bench::config";

pub const API_HOST: &str = "api.xmrig.com";
pub const API_PORT: u16 = 443;
pub const API_TLS: bool = true;
pub const SHARE_URL: &str = "https://xmrig.com/benchmark";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid benchmark size '{value}' (use 1M..10M or 250K..999K)")]
    InvalidSize { value: String },

    #[error("Unsupported algorithm '{value}'")]
    InvalidAlgorithm { value: String },

    #[error("Invalid hash '{value}' (expected up to 16 hex digits)")]
    InvalidHash { value: String },

    #[error("Benchmark size is missing")]
    MissingSize,

    #[error("Failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Location of the benchmark-sharing service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    pub share_url: String,
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self {
            host: API_HOST.to_string(),
            port: API_PORT,
            tls: API_TLS,
            share_url: SHARE_URL.to_string(),
        }
    }
}

/// Static configuration selecting the benchmark mode inputs
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Number of hashes in the run
    pub size: u32,
    pub algorithm: Algorithm,
    /// Expected hash sum, 0 when none is configured
    pub hash: u64,
    pub seed: Option<String>,
    /// Online benchmark id to verify
    pub id: Option<String>,
    pub token: Option<String>,
    pub submit: bool,
    pub api: ApiEndpoint,
}

/// "benchmark" section of the JSON config file
#[derive(Debug, Default, Deserialize)]
struct BenchSection {
    #[serde(default, alias = "size")]
    benchmark: Option<String>,
    #[serde(default)]
    algo: Option<String>,
    #[serde(default)]
    submit: bool,
    #[serde(default)]
    verify: Option<String>,
    #[serde(default)]
    seed: Option<String>,
    #[serde(default)]
    hash: Option<String>,
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    benchmark: Option<BenchSection>,
}

/// Parse a benchmark size such as "1M", "10m" or "250K".
pub fn parse_size(value: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::InvalidSize {
        value: value.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 1) {
        return Err(invalid());
    }

    let (digits, suffix) = trimmed.split_at(trimmed.len() - 1);
    let count: u32 = digits.parse().map_err(|_| invalid())?;

    match suffix {
        "M" | "m" if (1..=10).contains(&count) => Ok(count * 1_000_000),
        "K" | "k" if (250..1000).contains(&count) => Ok(count * 1_000),
        _ => Err(invalid()),
    }
}

/// Parse a hash sum given as hex digits, with or without a 0x prefix.
pub fn parse_hash(value: &str) -> Result<u64, ConfigError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 16 {
        return Err(ConfigError::InvalidHash {
            value: value.to_string(),
        });
    }

    u64::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidHash {
        value: value.to_string(),
    })
}

fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    Algorithm::from_name(value).ok_or_else(|| ConfigError::InvalidAlgorithm {
        value: value.to_string(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl BenchConfig {
    pub fn new(size: u32, algorithm: Algorithm) -> Self {
        Self {
            size,
            algorithm,
            hash: 0,
            seed: None,
            id: None,
            token: None,
            submit: false,
            api: ApiEndpoint::default(),
        }
    }

    pub fn with_hash(mut self, hash: u64) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_verify(mut self, id: impl Into<String>, token: Option<String>) -> Self {
        self.id = Some(id.into());
        self.token = token;
        self
    }

    pub fn with_submit(mut self, submit: bool) -> Self {
        self.submit = submit;
        self
    }

    pub fn with_api(mut self, api: ApiEndpoint) -> Self {
        self.api = api;
        self
    }

    /// Non-empty online id, if any
    pub fn verify_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Load the "benchmark" section of a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::read_file(path)?.validated()
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(target: LOG_TARGET, "Loading benchmark config from {:?}", path);

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_section(file.benchmark.unwrap_or_default())
    }

    fn from_section(section: BenchSection) -> Result<Self, ConfigError> {
        let size = match section.benchmark.as_deref() {
            Some(size) => parse_size(size)?,
            None => 0,
        };

        let algorithm = match section.algo.as_deref() {
            Some(algo) => parse_algorithm(algo)?,
            None => Algorithm::default(),
        };

        let hash = match non_empty(section.hash) {
            Some(hash) => parse_hash(&hash)?,
            None => 0,
        };

        Ok(Self {
            size,
            algorithm,
            hash,
            seed: non_empty(section.seed),
            id: non_empty(section.verify),
            token: non_empty(section.token),
            submit: section.submit,
            api: ApiEndpoint::default(),
        })
    }

    /// A size is mandatory unless the job comes from the benchmark service
    fn validated(self) -> Result<Self, ConfigError> {
        if self.size == 0 && self.verify_id().is_none() {
            return Err(ConfigError::MissingSize);
        }
        Ok(self)
    }

    /// Build the configuration from command-line arguments, layered on top of
    /// the config file when one is given.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::read_file(path)?,
            None => Self::new(0, Algorithm::default()),
        };

        if let Some(size) = args.bench.as_deref() {
            config.size = parse_size(size)?;
        }
        if let Some(algo) = args.algo.as_deref() {
            config.algorithm = parse_algorithm(algo)?;
        }
        if let Some(hash) = non_empty(args.hash.clone()) {
            config.hash = parse_hash(&hash)?;
        }
        if let Some(seed) = non_empty(args.seed.clone()) {
            config.seed = Some(seed);
        }
        if let Some(id) = non_empty(args.verify.clone()) {
            config.id = Some(id);
        }
        if let Some(token) = non_empty(args.token.clone()) {
            config.token = Some(token);
        }
        config.submit |= args.submit;

        let mut api = config.api.clone();
        if let Some(host) = non_empty(args.api_host.clone()) {
            api.host = host;
        }
        if let Some(port) = args.api_port {
            api.port = port;
        }
        if args.no_tls {
            api.tls = false;
        }

        config.with_api(api).validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1M").unwrap(), 1_000_000);
        assert_eq!(parse_size("10m").unwrap(), 10_000_000);
        assert_eq!(parse_size("250K").unwrap(), 250_000);
        assert_eq!(parse_size("999k").unwrap(), 999_000);
        assert!(parse_size("11M").is_err());
        assert!(parse_size("249K").is_err());
        assert!(parse_size("1000K").is_err());
        assert!(parse_size("5").is_err());
        assert!(parse_size("").is_err());
        assert!(parse_size("M").is_err());
    }

    #[test]
    fn test_parse_hash() {
        assert_eq!(parse_hash("000000000000ABCD").unwrap(), 0xABCD);
        assert_eq!(parse_hash("0xff").unwrap(), 0xFF);
        assert!(parse_hash("").is_err());
        assert!(parse_hash("XYZ").is_err());
        assert!(parse_hash("11112222333344445").is_err());
    }

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"benchmark": {{"benchmark": "2M", "algo": "sha256d", "hash": "DEADBEEF", "seed": "{}"}}}}"#,
            "ab".repeat(32)
        )
        .unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.size, 2_000_000);
        assert_eq!(config.algorithm, Algorithm::Sha256);
        assert_eq!(config.hash, 0xDEADBEEF);
        assert_eq!(config.seed.as_deref(), Some("ab".repeat(32).as_str()));
        assert!(!config.submit);
        assert_eq!(config.api, ApiEndpoint::default());
    }

    #[test]
    fn test_load_config_file_verify_without_size() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"benchmark": {{"verify": "abc", "token": "t"}}}}"#).unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.size, 0);
        assert_eq!(config.verify_id(), Some("abc"));
        assert_eq!(config.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_load_config_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            BenchConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let missing = Path::new("/definitely/not/here.json");
        assert!(matches!(
            BenchConfig::load(missing),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_args_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"benchmark": {{"benchmark": "1M", "algo": "sha3x"}}}}"#).unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            bench: Some("5M".into()),
            submit: true,
            api_host: Some("localhost".into()),
            api_port: Some(8080),
            no_tls: true,
            ..Args::default()
        };

        let config = BenchConfig::from_args(&args).unwrap();
        assert_eq!(config.size, 5_000_000);
        assert!(config.submit);
        assert_eq!(config.api.host, "localhost");
        assert_eq!(config.api.port, 8080);
        assert!(!config.api.tls);
    }

    #[test]
    fn test_args_empty_verify_is_ignored() {
        let args = Args {
            bench: Some("1M".into()),
            verify: Some(String::new()),
            ..Args::default()
        };
        let config = BenchConfig::from_args(&args).unwrap();
        assert_eq!(config.verify_id(), None);
    }

    #[test]
    fn test_args_missing_size() {
        let args = Args {
            algo: Some("sha3x".into()),
            ..Args::default()
        };
        assert!(matches!(
            BenchConfig::from_args(&args),
            Err(ConfigError::MissingSize)
        ));
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial benchmark configuration.
//   - Purpose: Replaces the runner's duration/difficulty BenchmarkConfig with
//     the size/algorithm/hash/seed/verify/submit inputs of the bench client.
//   - Features: JSON config file section, CLI overrides, size and hash parsing.
