// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/client.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the bench client: it hands the backend a synthetic job
// as if it came from a pool, optionally brokers that job through the benchmark
// service, and reports the final hash sum. Four modes are supported: local
// benchmark, local verification, online benchmark (submitted to the service)
// and online verification of a recorded benchmark.
//
// All entry points (connect, backend callbacks, HTTP responses) must be called
// from one task. The binary funnels them through ClientEvent.
//
// Tree Location:
// - src/benchmark/client.rs (bench client state machine)
// - Depends on: benchmark::{config, listener, reference, report}, remote, core::job

use crate::benchmark::config::{BenchConfig, parse_hash};
use crate::benchmark::events::ClientEvent;
use crate::benchmark::listener::{Backend, BenchListener, ClientListener};
use crate::benchmark::reference::ReferenceOracle;
use crate::benchmark::report::BenchReport;
use crate::core::job::{JobDescriptor, STATIC_JOB_ID};
use crate::core::types::Algorithm;
use crate::remote::fetch::{Fetch, FetchError, FetchRequest, HttpData, HttpListener, RequestKind};
use crate::remote::messages::{CreateBenchResponse, FetchBenchResponse};
use crate::remote::protocol::BenchProtocol;
use crate::utils::cpu_info::cpu_json;
use crate::utils::format::FormatUtils;
use crate::utils::user_agent::app_version;
use log::{debug, error, info, warn};
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Weak};

const LOG_TARGET: &str = "tari::bench::client";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    StaticBench,
    StaticVerify,
    OnlineBench,
    OnlineVerify,
}

impl Mode {
    pub fn is_online(&self) -> bool {
        matches!(self, Mode::OnlineBench | Mode::OnlineVerify)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::StaticBench => "static benchmark",
            Mode::StaticVerify => "static verify",
            Mode::OnlineBench => "online benchmark",
            Mode::OnlineVerify => "online verify",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Idle,
    AwaitingCreate,
    AwaitingFetch,
    Running,
    BenchStarted,
    BenchDone,
    /// Done update sent, waiting for the service to acknowledge it
    AwaitingAck,
    Exited,
}

/// Facts collected while the backend runs
#[derive(Debug, Clone, Default)]
pub struct RunMetadata {
    pub start_time: Option<u64>,
    pub threads: u32,
    pub done_time: Option<u64>,
    pub result: Option<u64>,
    pub token: Option<String>,
    pub backend: Option<Weak<dyn Backend>>,
}

impl RunMetadata {
    fn backend_json(&self) -> Value {
        match self.backend.as_ref().and_then(Weak::upgrade) {
            Some(backend) => backend.to_json(),
            None => {
                warn!(target: LOG_TARGET, "Backend released before the result was reported");
                Value::Null
            }
        }
    }
}

/// Pick the mode from configuration alone. Precedence: submit, online id,
/// fixed hash with a valid seed, then the local benchmark.
pub fn select_mode(config: &BenchConfig) -> Mode {
    #[cfg(feature = "http")]
    {
        if config.submit {
            return Mode::OnlineBench;
        }
        if config.verify_id().is_some() {
            return Mode::OnlineVerify;
        }
    }

    let seed_ok = config
        .seed
        .as_deref()
        .is_some_and(JobDescriptor::is_valid_seed);

    if config.hash != 0 && seed_ok {
        Mode::StaticVerify
    } else {
        Mode::StaticBench
    }
}

/// Initial job for a mode. Online jobs are completed by the service response.
pub fn build_job(config: &BenchConfig, mode: Mode) -> JobDescriptor {
    let mut job = JobDescriptor::new(config.algorithm, config.size);

    match mode {
        Mode::OnlineBench => {}
        Mode::OnlineVerify => {
            job.set_id(config.verify_id().unwrap_or_default());
        }
        Mode::StaticVerify => {
            job.set_id(STATIC_JOB_ID);
            job.set_seed_hash(config.seed.as_deref().unwrap_or_default());
        }
        Mode::StaticBench => {
            job.set_id(STATIC_JOB_ID);
            job.set_seed_hash(&JobDescriptor::placeholder_seed());
        }
    }

    job
}

pub struct BenchClient {
    listener: Box<dyn ClientListener>,
    config: BenchConfig,
    oracle: Box<dyn ReferenceOracle>,
    fetcher: Option<Box<dyn Fetch>>,
    http: Option<HttpListener>,
    cpu: Option<Value>,
    job: JobDescriptor,
    mode: Mode,
    state: ClientState,
    hash: u64,
    run: RunMetadata,
    exit_prompts: u32,
    share_url: Option<String>,
    last_report: Option<BenchReport>,
    last_error: Option<String>,
}

impl BenchClient {
    pub fn new(
        config: BenchConfig,
        listener: Box<dyn ClientListener>,
        oracle: Box<dyn ReferenceOracle>,
    ) -> Self {
        let mode = select_mode(&config);
        let job = build_job(&config, mode);

        let mut run = RunMetadata::default();
        if mode == Mode::OnlineVerify {
            run.token = config.token.clone();
        }

        debug!(target: LOG_TARGET, "Bench client created in {} mode", mode);

        Self {
            listener,
            hash: config.hash,
            config,
            oracle,
            fetcher: None,
            http: None,
            cpu: None,
            job,
            mode,
            state: ClientState::Idle,
            run,
            exit_prompts: 0,
            share_url: None,
            last_report: None,
            last_error: None,
        }
    }

    /// Transport used by the online modes
    pub fn with_fetcher(mut self, fetcher: Box<dyn Fetch>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Override the host descriptor sent in the create request
    pub fn with_cpu_info(mut self, cpu: Value) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    pub fn job(&self) -> &JobDescriptor {
        &self.job
    }

    pub fn run(&self) -> &RunMetadata {
        &self.run
    }

    pub fn exit_prompts(&self) -> u32 {
        self.exit_prompts
    }

    pub fn is_exit_ready(&self) -> bool {
        self.exit_prompts > 0
    }

    pub fn share_url(&self) -> Option<&str> {
        self.share_url.as_deref()
    }

    pub fn last_report(&self) -> Option<&BenchReport> {
        self.last_report.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Leave the idle state. Must be called exactly once.
    pub fn connect(&mut self) {
        info!(target: LOG_TARGET,
            "🧪 Starting {} {} with {} hashes",
            self.mode,
            self.job.algorithm(),
            FormatUtils::format_size(self.job.bench_size())
        );

        match self.mode {
            Mode::StaticBench | Mode::StaticVerify => self.start(),
            Mode::OnlineBench => {
                self.state = ClientState::AwaitingCreate;
                self.create_bench();
            }
            Mode::OnlineVerify => {
                self.state = ClientState::AwaitingFetch;
                self.get_bench();
            }
        }
    }

    /// Dispatch one event from the runner or the transport
    pub fn handle_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::BenchStart {
                ts,
                threads,
                backend,
            } => self.on_bench_start(ts, threads, &backend),
            ClientEvent::BenchDone { result, ts } => self.on_bench_done(result, ts),
            ClientEvent::Http {
                kind,
                result: Ok(data),
            } => self.on_http_data(kind, &data),
            ClientEvent::Http {
                kind,
                result: Err(e),
            } => self.on_http_error(kind, &e),
        }
    }

    /// Hash the result is judged against, 0 when unknown
    pub fn reference_hash(&self) -> u64 {
        if self.mode == Mode::OnlineBench {
            return 0;
        }
        if self.hash != 0 {
            return self.hash;
        }

        self.oracle
            .lookup(self.job.algorithm(), self.job.bench_size(), self.run.threads)
    }

    pub fn on_http_data(&mut self, kind: RequestKind, data: &HttpData) {
        if let Some(http) = self.http.as_mut() {
            http.complete(kind);
        }

        let doc = match data.json() {
            Ok(doc) => doc,
            Err(e) => return self.set_error(&e.to_string()),
        };

        if !data.is_ok() {
            return self.set_error(&data.status_name());
        }

        if self.run.done_time.is_some() {
            let url = BenchProtocol::share_url(&self.config.api, self.job.id());
            info!(target: LOG_TARGET, "📤 benchmark submitted {}", url);
            self.share_url = Some(url);
            self.print_exit();
            return;
        }

        if self.run.start_time.is_some() {
            debug!(target: LOG_TARGET, "Ignoring {:?} response while running", kind);
            return;
        }

        if self.mode == Mode::OnlineBench {
            self.start_bench(doc);
        } else {
            self.start_verify(doc);
        }
    }

    pub fn on_http_error(&mut self, kind: RequestKind, err: &FetchError) {
        if let Some(http) = self.http.as_mut() {
            http.complete(kind);
        }
        self.set_error(&err.to_string());
    }

    fn start(&mut self) {
        self.state = ClientState::Running;
        debug!(target: LOG_TARGET,
            "Job {} ready: algo {}, seed {}",
            self.job.id(),
            self.job.algorithm(),
            self.job.seed_hash()
        );

        self.listener.on_login_success();
        self.listener.on_job_received(&self.job, &Value::Null);
    }

    fn create_bench(&mut self) {
        let cpu = self.cpu.take().unwrap_or_else(cpu_json);
        let body = BenchProtocol::create_payload(
            self.job.bench_size(),
            self.job.algorithm(),
            app_version(),
            cpu,
        );

        let request = BenchProtocol::create_request(&self.config.api, body);
        self.send(RequestKind::Create, request);
    }

    fn get_bench(&mut self) {
        let request = BenchProtocol::fetch_request(&self.config.api, self.job.id());
        self.send(RequestKind::Fetch, request);
    }

    fn update(&mut self, kind: RequestKind, body: Value) {
        let token = match self.run.token.as_deref() {
            Some(token) => token,
            None => {
                debug_assert!(false, "benchmark update without a token");
                error!(target: LOG_TARGET, "Benchmark update skipped: no token");
                return;
            }
        };

        let request = BenchProtocol::update_request(&self.config.api, self.job.id(), token, body);
        self.send(kind, request);
    }

    fn send(&mut self, kind: RequestKind, request: FetchRequest) {
        if self.fetcher.is_none() {
            return self.set_error("no HTTP transport available");
        }

        self.http
            .get_or_insert_with(|| HttpListener::new("bench"))
            .begin(kind, &request);

        if let Some(fetcher) = self.fetcher.as_ref() {
            fetcher.fetch(kind, request);
        }
    }

    fn start_bench(&mut self, doc: Value) {
        let response: CreateBenchResponse = match serde_json::from_value(doc) {
            Ok(response) => response,
            Err(e) => return self.set_error(&e.to_string()),
        };

        let (Some(id), Some(token)) = (response.id, response.token) else {
            return self.set_error("benchmark service returned no id or token");
        };

        self.job.set_id(id);
        if let Some(seed) = response.seed.as_deref() {
            if !self.job.set_seed_hash(seed) {
                warn!(target: LOG_TARGET, "Ignoring invalid seed hash from service: {}", seed);
            }
        }
        self.run.token = Some(token);

        info!(target: LOG_TARGET, "🆔 Benchmark {} created", self.job.id());
        self.start();
    }

    fn start_verify(&mut self, doc: Value) {
        let response: FetchBenchResponse = match serde_json::from_value(doc) {
            Ok(response) => response,
            Err(e) => return self.set_error(&e.to_string()),
        };

        if let Some(hash) = response.hash.as_deref() {
            match parse_hash(hash) {
                Ok(hash) => self.hash = hash,
                Err(e) => return self.set_error(&e.to_string()),
            }
        }

        if let Some(algo) = response.algo.as_deref() {
            match Algorithm::from_name(algo) {
                Some(algorithm) => self.job.set_algorithm(algorithm),
                None => return self.set_error(&format!("unsupported algorithm \"{}\"", algo)),
            }
        }

        if let Some(seed) = response.seed.as_deref() {
            if !self.job.set_seed_hash(seed) {
                warn!(target: LOG_TARGET, "Ignoring invalid seed hash from service: {}", seed);
            }
        }

        if let Some(size) = response.size {
            self.job.set_bench_size(size);
        }
        if self.job.bench_size() == 0 {
            return self.set_error("benchmark size is unknown");
        }

        info!(target: LOG_TARGET,
            "🔎 Verifying benchmark {} ({} {})",
            self.job.id(),
            self.job.algorithm(),
            FormatUtils::format_size(self.job.bench_size())
        );
        self.start();
    }

    fn set_error(&mut self, message: &str) {
        error!(target: LOG_TARGET, "❌ benchmark failed \"{}\"", message);
        self.last_error = Some(message.to_string());
    }

    fn print_exit(&mut self) {
        self.exit_prompts += 1;
        self.state = ClientState::Exited;
        info!(target: LOG_TARGET, "press Ctrl+C to exit");
    }
}

impl BenchListener for BenchClient {
    fn on_bench_start(&mut self, ts: u64, threads: u32, backend: &Arc<dyn Backend>) {
        self.run.start_time = Some(ts);
        self.run.threads = threads;
        self.run.backend = Some(Arc::downgrade(backend));
        self.state = ClientState::BenchStarted;

        if self.mode == Mode::OnlineBench {
            let body = BenchProtocol::start_payload(threads, ts);
            self.update(RequestKind::StartUpdate, body);
        }
    }

    fn on_bench_done(&mut self, result: u64, ts: u64) {
        self.run.done_time = Some(ts);
        self.run.result = Some(result);
        self.state = ClientState::BenchDone;

        if self.run.token.is_some() {
            let body = BenchProtocol::done_payload(ts, result, self.run.backend_json());
            self.update(RequestKind::DoneUpdate, body);
        }

        let start = self.run.start_time.unwrap_or_else(|| {
            warn!(target: LOG_TARGET, "Benchmark finished without a start notification");
            ts
        });
        let report = BenchReport::new(start, ts, result, self.reference_hash());
        info!(target: LOG_TARGET, "🏁 {}", report.colored_line());
        self.last_report = Some(report);

        if self.mode == Mode::OnlineBench {
            self.state = ClientState::AwaitingAck;
        } else {
            self.print_exit();
        }
    }
}


// Changelog:
// - v1.0.1 (2025-07-04): Warn when the backend is released before the done
//   update is built.
// - v1.0.0 (2025-07-02): Initial bench client.
//   - Purpose: Feeds the backend a synthetic job and reports the hash sum,
//     locally or through the benchmark service.
//   - Features: Four-mode state machine, create/fetch/update requests,
//     response routing, reference check and exit prompt.
