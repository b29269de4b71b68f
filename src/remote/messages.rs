// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/remote/messages.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Response bodies returned by the benchmark service. Every field is optional;
// missing values leave the job untouched.
//
// Tree Location:
// - src/remote/messages.rs (service response types)
// - Depends on: serde

use serde::Deserialize;

/// Answer to POST /1/benchmark
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CreateBenchResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Answer to GET /1/benchmark/{id}
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FetchBenchResponse {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub algo: Option<String>,
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub size: Option<u32>,
}


// Changelog:
// - v1.0.0 (2025-07-02): Initial service response types.
