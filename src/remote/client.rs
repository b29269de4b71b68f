// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/remote/client.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the reqwest transport for the benchmark service. Each
// request runs on its own tokio task and the outcome is posted back to the
// bench client as a ClientEvent, so the caller never waits on the network.
//
// Tree Location:
// - src/remote/client.rs (HTTP transport)
// - Depends on: reqwest, tokio, remote::fetch

use crate::Result;
use crate::benchmark::events::ClientEvent;
use crate::remote::fetch::{Fetch, FetchError, FetchRequest, HttpData, HttpMethod, RequestKind};
use crate::utils::user_agent::user_agent;
use log::{debug, info};
use reqwest::{Client, Method};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

const LOG_TARGET: &str = "tari::bench::remote::client";

/// HTTP transport backed by a shared reqwest client
pub struct HttpFetcher {
    http: Client,
    runtime: Handle,
    events: UnboundedSender<ClientEvent>,
}

impl HttpFetcher {
    /// Must be called from inside a tokio runtime
    pub fn new(events: UnboundedSender<ClientEvent>) -> Result<Self> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        let runtime = Handle::try_current()?;

        Ok(Self {
            http,
            runtime,
            events,
        })
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, kind: RequestKind, request: FetchRequest) {
        let url = request.url();
        if request.quiet {
            debug!(target: LOG_TARGET, "{} {}", request.method, url);
        } else {
            info!(target: LOG_TARGET, "🌐 {} {}", request.method, url);
        }

        let mut builder = self.http.request(Self::method(request.method), &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = match builder.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    match response.text().await {
                        Ok(body) => Ok(HttpData::new(status, body)),
                        Err(e) => Err(FetchError::Body {
                            url: url.clone(),
                            message: e.to_string(),
                        }),
                    }
                }
                Err(e) => Err(FetchError::Transport {
                    url: url.clone(),
                    message: e.to_string(),
                }),
            };

            if events.send(ClientEvent::Http { kind, result }).is_err() {
                debug!(target: LOG_TARGET, "Response for {} dropped, client gone", url);
            }
        });
    }
}


// Changelog:
// - v1.0.0 (2025-07-02): Initial HTTP transport.
//   - Purpose: Replaces the Stratum TCP PoolClient with a reqwest client for
//     the benchmark service.
//   - Features: Fire-and-forget requests, bearer headers, JSON bodies,
//     responses delivered as ClientEvent::Http.
