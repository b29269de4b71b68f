// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/remote/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the remote module for communication with the benchmark
// sharing service. The reqwest transport is only built with the "http" feature.
//
// Tree Location:
// - src/remote/mod.rs (remote module entry point)
// - Submodules: fetch, messages, protocol, client (feature "http")

pub mod fetch;
pub mod messages;
pub mod protocol;

#[cfg(feature = "http")]
pub mod client;

pub use fetch::{Fetch, FetchError, FetchRequest, HttpData, HttpListener, HttpMethod, RequestKind};
pub use messages::{CreateBenchResponse, FetchBenchResponse};
pub use protocol::BenchProtocol;

#[cfg(feature = "http")]
pub use client::HttpFetcher;

// Changelog:
// - v1.0.0 (2025-07-02): Initial remote module, replacing the pool module.
