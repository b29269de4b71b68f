// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/integration_test.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains end-to-end tests of the bench client driving the real CPU
// runner through the event channel, locally and against a scripted benchmark
// service.
//
// Tree Location:
// - tests/integration_test.rs (integration tests)
// - Depends on: sha3x-bench, tokio, serde_json

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sha3x_bench::benchmark::{
        BenchClient, BenchConfig, BenchmarkRunner, ClientEvent, ClientState, HashCheck, Mode,
        ReferenceTable,
    };
    use sha3x_bench::core::Algorithm;
    use sha3x_bench::remote::{Fetch, FetchRequest, HttpData, RequestKind};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
    use tokio::time::timeout;

    /// Pumps events into the client until it prints the exit prompt
    async fn drive(client: &mut BenchClient, rx: &mut UnboundedReceiver<ClientEvent>) {
        timeout(Duration::from_secs(60), async {
            while !client.is_exit_ready() {
                match rx.recv().await {
                    Some(event) => client.handle_event(event),
                    None => break,
                }
            }
        })
        .await
        .expect("benchmark did not finish in time");
    }

    fn static_client(
        config: BenchConfig,
        reference: ReferenceTable,
        threads: usize,
    ) -> (BenchClient, UnboundedReceiver<ClientEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let runner = BenchmarkRunner::new(threads, tx);
        (BenchClient::new(config, Box::new(runner), Box::new(reference)), rx)
    }

    #[tokio::test]
    async fn test_static_bench_then_verify() {
        let config = BenchConfig::new(250_000, Algorithm::Sha3x);
        let (mut client, mut rx) = static_client(config, ReferenceTable::new(), 2);
        assert_eq!(client.mode(), Mode::StaticBench);

        client.connect();
        drive(&mut client, &mut rx).await;

        let report = client.last_report().unwrap().clone();
        assert_eq!(report.check, HashCheck::Unknown);
        assert_eq!(client.run().threads, 2);
        assert_eq!(client.state(), ClientState::Exited);

        // Same job with the recorded hash as reference, different thread count
        let mut table = ReferenceTable::new();
        table.insert(Algorithm::Sha3x, 250_000, None, report.hash);
        let (mut client, mut rx) =
            static_client(BenchConfig::new(250_000, Algorithm::Sha3x), table, 3);
        client.connect();
        drive(&mut client, &mut rx).await;
        assert_eq!(client.last_report().unwrap().check, HashCheck::Match);
        assert_eq!(client.last_report().unwrap().hash, report.hash);
    }

    #[tokio::test]
    async fn test_static_verify_with_wrong_hash() {
        let config = BenchConfig::new(250_000, Algorithm::Sha256)
            .with_hash(1)
            .with_seed("00".repeat(32));
        let (mut client, mut rx) = static_client(config, ReferenceTable::new(), 1);
        assert_eq!(client.mode(), Mode::StaticVerify);

        client.connect();
        drive(&mut client, &mut rx).await;
        assert_eq!(client.last_report().unwrap().check, HashCheck::Mismatch);
        assert_eq!(client.exit_prompts(), 1);
    }

    /// Benchmark service double answering every request immediately
    struct ScriptedService {
        events: UnboundedSender<ClientEvent>,
        requests: Arc<Mutex<Vec<(RequestKind, FetchRequest)>>>,
    }

    impl Fetch for ScriptedService {
        fn fetch(&self, kind: RequestKind, request: FetchRequest) {
            let body = match kind {
                RequestKind::Create => json!({
                    "id": "abc",
                    "seed": "11".repeat(16) + &"22".repeat(16),
                    "token": "t"
                }),
                RequestKind::Fetch => json!({
                    "hash": "0000000000000000",
                    "algo": "sha3x",
                    "seed": "33".repeat(32),
                    "size": 250_000
                }),
                RequestKind::StartUpdate | RequestKind::DoneUpdate => json!({}),
            };
            self.requests.lock().unwrap().push((kind, request));
            let _ = self.events.send(ClientEvent::Http {
                kind,
                result: Ok(HttpData::new(200, body.to_string())),
            });
        }
    }

    fn online_client(
        config: BenchConfig,
    ) -> (
        BenchClient,
        UnboundedReceiver<ClientEvent>,
        Arc<Mutex<Vec<(RequestKind, FetchRequest)>>>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let service = ScriptedService {
            events: tx.clone(),
            requests: Arc::clone(&requests),
        };
        let runner = BenchmarkRunner::new(2, tx);
        let client = BenchClient::new(config, Box::new(runner), Box::new(ReferenceTable::new()))
            .with_fetcher(Box::new(service))
            .with_cpu_info(json!({"brand": "integration"}));
        (client, rx, requests)
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_online_bench_submission() {
        let config = BenchConfig::new(250_000, Algorithm::Sha3x).with_submit(true);
        let (mut client, mut rx, requests) = online_client(config);
        assert_eq!(client.mode(), Mode::OnlineBench);

        client.connect();
        drive(&mut client, &mut rx).await;

        assert_eq!(client.job().id(), "abc");
        assert_eq!(client.share_url(), Some("https://xmrig.com/benchmark/abc"));
        assert_eq!(client.exit_prompts(), 1);

        let requests = requests.lock().unwrap();
        let kinds: Vec<RequestKind> = requests.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                RequestKind::Create,
                RequestKind::StartUpdate,
                RequestKind::DoneUpdate
            ]
        );

        let (_, done) = &requests[2];
        assert_eq!(done.header("Authorization"), Some("Bearer t"));
        let body = done.body.as_ref().unwrap();
        let hash = client.last_report().unwrap().hash;
        assert_eq!(body["hash"], format!("{:016X}", hash));
        assert_eq!(body["backend"]["type"], "cpu");
        assert_eq!(body["backend"]["stats"]["hashes"], 250_000);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_online_verify_uses_service_job() {
        let config = BenchConfig::new(0, Algorithm::Sha256).with_verify("xyz", None);
        let (mut client, mut rx, requests) = online_client(config);
        assert_eq!(client.mode(), Mode::OnlineVerify);

        client.connect();
        drive(&mut client, &mut rx).await;

        assert_eq!(client.job().algorithm(), Algorithm::Sha3x);
        assert_eq!(client.job().bench_size(), 250_000);
        assert_eq!(client.job().seed_hash(), "33".repeat(32));
        // An all-zero hash from the service means no reference
        assert_eq!(client.last_report().unwrap().check, HashCheck::Unknown);
        assert_eq!(requests.lock().unwrap().len(), 1);
    }
}

// Changelog:
// - v2.0.0 (2025-07-02): Rewritten as bench client end-to-end tests.
// - v1.0.0 (2025-06-14): Initial integration tests.
