// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/remote/fetch.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the transport-neutral side of the benchmark service
// exchange: request descriptors, response data, transport errors, the Fetch
// trait implemented by the HTTP transport, and the per-client HttpListener
// that tracks requests in flight.
//
// Tree Location:
// - src/remote/fetch.rs (fetch facility types)
// - Depends on: serde_json, thiserror, benchmark::config

use crate::benchmark::config::ApiEndpoint;
use log::debug;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

const LOG_TARGET: &str = "tari::bench::remote::fetch";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the service operations a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Create,
    Fetch,
    StartUpdate,
    DoneUpdate,
}

/// Request descriptor handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub method: HttpMethod,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub body: Option<Value>,
    pub tls: bool,
    /// Suppress per-request transport logging
    pub quiet: bool,
    pub headers: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn new(method: HttpMethod, endpoint: &ApiEndpoint, path: impl Into<String>) -> Self {
        Self {
            method,
            host: endpoint.host.clone(),
            port: endpoint.port,
            path: path.into(),
            body: None,
            tls: endpoint.tls,
            quiet: false,
            headers: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("Authorization".to_string(), format!("Bearer {}", token)));
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{}://{}:{}{}", scheme, self.host, self.port, self.path)
    }
}

/// Response delivered back to the client
#[derive(Debug, Clone, PartialEq)]
pub struct HttpData {
    pub status: u16,
    pub body: String,
}

impl HttpData {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Reason phrase of the status code
    pub fn status_name(&self) -> String {
        status_reason(self.status)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", self.status))
    }
}

#[cfg(feature = "http")]
fn status_reason(status: u16) -> Option<&'static str> {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
}

#[cfg(not(feature = "http"))]
fn status_reason(status: u16) -> Option<&'static str> {
    match status {
        200 => Some("OK"),
        400 => Some("Bad Request"),
        401 => Some("Unauthorized"),
        403 => Some("Forbidden"),
        404 => Some("Not Found"),
        500 => Some("Internal Server Error"),
        502 => Some("Bad Gateway"),
        503 => Some("Service Unavailable"),
        _ => None,
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("failed to read response from {url}: {message}")]
    Body { url: String, message: String },
}

/// Fire-and-forget HTTP transport. Implementations deliver the response
/// later as a `ClientEvent::Http` tagged with the same kind.
pub trait Fetch: Send {
    fn fetch(&self, kind: RequestKind, request: FetchRequest);
}

/// Per-client bookkeeping of requests handed to the transport
#[derive(Debug)]
pub struct HttpListener {
    tag: &'static str,
    in_flight: Vec<RequestKind>,
    sent: u64,
}

impl HttpListener {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            in_flight: Vec::new(),
            sent: 0,
        }
    }

    pub fn begin(&mut self, kind: RequestKind, request: &FetchRequest) {
        self.sent += 1;
        self.in_flight.push(kind);
        debug!(target: LOG_TARGET,
            "{} #{} {:?}: {} {}",
            self.tag, self.sent, kind, request.method, request.url()
        );
    }

    pub fn complete(&mut self, kind: RequestKind) {
        if let Some(pos) = self.in_flight.iter().position(|k| *k == kind) {
            self.in_flight.remove(pos);
        }
        debug!(target: LOG_TARGET, "{} {:?} completed, {} in flight", self.tag, kind, self.in_flight.len());
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn sent(&self) -> u64 {
        self.sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_url_and_bearer() {
        let endpoint = ApiEndpoint::default();
        let req = FetchRequest::new(HttpMethod::Patch, &endpoint, "/1/benchmark/abc")
            .with_body(json!({"threads": 4}))
            .with_bearer("t");

        assert_eq!(req.url(), "https://api.xmrig.com:443/1/benchmark/abc");
        assert_eq!(req.header("authorization"), Some("Bearer t"));
        assert_eq!(req.method.as_str(), "PATCH");
        assert!(!req.quiet);
    }

    #[test]
    fn test_http_data() {
        let ok = HttpData::new(200, r#"{"id":"abc"}"#);
        assert!(ok.is_ok());
        assert_eq!(ok.json().unwrap()["id"], "abc");
        assert_eq!(ok.status_name(), "OK");

        let missing = HttpData::new(404, "");
        assert!(!missing.is_ok());
        assert_eq!(missing.status_name(), "Not Found");
        assert!(missing.json().is_err());

        assert_eq!(HttpData::new(299, "").status_name(), "HTTP 299");
    }

    #[test]
    fn test_http_listener_tracks_in_flight() {
        let endpoint = ApiEndpoint::default();
        let req = FetchRequest::new(HttpMethod::Get, &endpoint, "/1/benchmark/x");
        let mut listener = HttpListener::new("bench");

        listener.begin(RequestKind::StartUpdate, &req);
        listener.begin(RequestKind::DoneUpdate, &req);
        assert_eq!(listener.in_flight(), 2);

        listener.complete(RequestKind::StartUpdate);
        assert_eq!(listener.in_flight(), 1);
        listener.complete(RequestKind::Create);
        assert_eq!(listener.in_flight(), 1);
        assert_eq!(listener.sent(), 2);
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial fetch facility types.
//   - Purpose: Keeps request building and response routing independent of the
//     reqwest transport so the client compiles and tests without it.
