// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/remote/protocol.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file builds the JSON payloads and request descriptors for the benchmark
// service API. Everything here is pure so payload shapes can be asserted
// without a transport.
//
// Tree Location:
// - src/remote/protocol.rs (benchmark service protocol)
// - Depends on: serde_json, remote::fetch, core::types

use crate::benchmark::config::ApiEndpoint;
use crate::core::types::Algorithm;
use crate::remote::fetch::{FetchRequest, HttpMethod};
use log::debug;
use serde_json::{Value, json};

const LOG_TARGET: &str = "tari::bench::remote::protocol";

pub const BENCHMARK_PATH: &str = "/1/benchmark";

/// Constructs requests for the benchmark service
pub struct BenchProtocol;

impl BenchProtocol {
    pub fn job_path(id: &str) -> String {
        format!("{}/{}", BENCHMARK_PATH, id)
    }

    /// Body of the create request
    pub fn create_payload(size: u32, algorithm: Algorithm, version: &str, cpu: Value) -> Value {
        json!({
            "size": size,
            "algo": algorithm.to_json(),
            "version": version,
            "cpu": cpu,
        })
    }

    pub fn start_payload(threads: u32, start_ts: u64) -> Value {
        json!({
            "threads": threads,
            "steady_start_ts": start_ts,
        })
    }

    pub fn done_payload(done_ts: u64, hash: u64, backend: Value) -> Value {
        json!({
            "steady_done_ts": done_ts,
            "hash": format!("{:016X}", hash),
            "backend": backend,
        })
    }

    pub fn create_request(endpoint: &ApiEndpoint, body: Value) -> FetchRequest {
        FetchRequest::new(HttpMethod::Post, endpoint, BENCHMARK_PATH)
            .with_body(body)
            .quiet()
    }

    pub fn fetch_request(endpoint: &ApiEndpoint, id: &str) -> FetchRequest {
        FetchRequest::new(HttpMethod::Get, endpoint, Self::job_path(id)).quiet()
    }

    /// Authenticated PATCH of an existing benchmark
    pub fn update_request(endpoint: &ApiEndpoint, id: &str, token: &str, body: Value) -> FetchRequest {
        debug!(target: LOG_TARGET, "Benchmark update for {}: {}", id, body);
        FetchRequest::new(HttpMethod::Patch, endpoint, Self::job_path(id))
            .with_body(body)
            .with_bearer(token)
            .quiet()
    }

    pub fn share_url(endpoint: &ApiEndpoint, id: &str) -> String {
        format!("{}/{}", endpoint.share_url.trim_end_matches('/'), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request() {
        let endpoint = ApiEndpoint::default();
        let body = BenchProtocol::create_payload(
            1_000_000,
            Algorithm::Sha3x,
            "1.0.0",
            json!({"brand": "test"}),
        );
        let req = BenchProtocol::create_request(&endpoint, body);

        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/1/benchmark");
        assert!(req.header("Authorization").is_none());
        assert!(req.quiet);

        let body = req.body.unwrap();
        assert_eq!(body["size"], 1_000_000);
        assert_eq!(body["algo"], "sha3x");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["cpu"]["brand"], "test");
    }

    #[test]
    fn test_fetch_request() {
        let req = BenchProtocol::fetch_request(&ApiEndpoint::default(), "abc");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/1/benchmark/abc");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_update_payloads() {
        let endpoint = ApiEndpoint::default();
        let start = BenchProtocol::start_payload(4, 1000);
        assert_eq!(start, json!({"threads": 4, "steady_start_ts": 1000}));

        let done = BenchProtocol::done_payload(1500, 0xABCD, json!({"type": "cpu"}));
        assert_eq!(done["hash"], "000000000000ABCD");
        assert_eq!(done["steady_done_ts"], 1500);

        let req = BenchProtocol::update_request(&endpoint, "abc", "t", done);
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "/1/benchmark/abc");
        assert_eq!(req.header("Authorization"), Some("Bearer t"));
    }

    #[test]
    fn test_share_url() {
        let endpoint = ApiEndpoint::default();
        assert_eq!(
            BenchProtocol::share_url(&endpoint, "abc"),
            "https://xmrig.com/benchmark/abc"
        );
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial benchmark service protocol.
//   - Purpose: Replaces the Stratum message builders with the create, fetch
//     and update requests of the benchmark service.
