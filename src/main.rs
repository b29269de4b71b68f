// SHA3x Bench - Free and Open Source Software Statement
//
// This project, sha3x-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 3.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Entry point of graxil-bench. Parses arguments, sets up logging, wires the
// bench client to the CPU runner and the HTTP transport, then drives the client
// from a single event loop until Ctrl+C.

use clap::Parser;
use log::{LevelFilter, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use sha3x_bench::{
    BenchClient, BenchConfig, BenchmarkRunner, ReferenceTable, Result, benchmark::ClientEvent,
    core::types::Args,
};
use std::path::Path;
use tokio::sync::mpsc;

const LOG_TARGET: &str = "tari::bench::main";

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {m}{n}";

fn init_logging(config: Option<&Path>) -> Result<()> {
    if let Some(path) = config {
        log4rs::init_file(path, Default::default())?;
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = init_logging(args.log_config.as_deref()) {
        eprintln!("❌ Error: failed to initialize logging: {}", err);
        std::process::exit(1);
    }

    let config = match BenchConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
    };

    let reference = match &args.reference {
        Some(path) => ReferenceTable::load(path)?,
        None => ReferenceTable::new(),
    };

    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<ClientEvent>();

    let runner = BenchmarkRunner::new(args.threads, events_tx.clone());
    info!(target: LOG_TARGET, "🚀 graxil-bench {} ({} threads)", env!("CARGO_PKG_VERSION"), runner.threads());

    let client = BenchClient::new(config, Box::new(runner), Box::new(reference));

    #[cfg(feature = "http")]
    let client = if client.mode().is_online() {
        client.with_fetcher(Box::new(sha3x_bench::remote::HttpFetcher::new(
            events_tx.clone(),
        )?))
    } else {
        client
    };

    drop(events_tx);

    let mut client = client;
    client.connect();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            event = events_rx.recv() => match event {
                Some(event) => client.handle_event(event),
                None => break,
            },
            _ = &mut ctrl_c => {
                info!(target: LOG_TARGET, "🛑 Exiting");
                break;
            }
        }
    }

    Ok(())
}

// Changelog:
// - v3.0.1 (2025-07-04): HTTP transport is only created for the online modes.
// - v3.0.0 (2025-07-02): Benchmark client binary.
//   - Replaced the cpu/gpu/hybrid mining entry points with the bench client
//     event loop.
//   - Logging is initialized with log4rs, from --log-config or a console
//     appender.
// - v2.0.0 (2025-06-24): Feature-based mining.
