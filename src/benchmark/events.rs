// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/events.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Events delivered to the bench client. The CPU runner threads and the HTTP
// fetcher only ever send these over a channel; the client consumes them one at
// a time on the main task, so its state is never touched concurrently.

use crate::benchmark::listener::Backend;
use crate::remote::fetch::{FetchError, HttpData, RequestKind};
use std::fmt;
use std::sync::Arc;

pub enum ClientEvent {
    BenchStart {
        ts: u64,
        threads: u32,
        backend: Arc<dyn Backend>,
    },
    BenchDone {
        result: u64,
        ts: u64,
    },
    Http {
        kind: RequestKind,
        result: Result<HttpData, FetchError>,
    },
}

impl fmt::Debug for ClientEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientEvent::BenchStart { ts, threads, .. } => f
                .debug_struct("BenchStart")
                .field("ts", ts)
                .field("threads", threads)
                .finish_non_exhaustive(),
            ClientEvent::BenchDone { result, ts } => f
                .debug_struct("BenchDone")
                .field("result", &format_args!("{:016X}", result))
                .field("ts", ts)
                .finish(),
            ClientEvent::Http { kind, result } => f
                .debug_struct("Http")
                .field("kind", kind)
                .field("result", result)
                .finish(),
        }
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial client event type.
