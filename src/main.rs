use anyhow::Result;
use clap::Parser;
use std::time::{Duration, Instant};

use hash_signer::{
    cli::Cli,
    engine::SignerEngine,
    services::{ConsoleProgressReporter, DefaultSignerConfig},
    signer::{Xxh3Signer, Xxh64Signer},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let latency = Duration::from_millis(cli.latency_ms);

    let reporter = if cli.quiet || cli.json {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    let engine = SignerEngine::new(
        Xxh3Signer::new().with_latency(latency),
        Xxh64Signer::new().with_latency(latency),
        DefaultSignerConfig::new()
            .with_fanout(cli.fanout)
            .with_max_in_flight(cli.max_workers),
        reporter,
    );

    let start_time = Instant::now();

    match engine.sign(cli.inputs).await {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("result: {}", report.signature);
                println!("Time {:.3?}", start_time.elapsed());

                if report.summary.failure_count() > 0 {
                    eprintln!(
                        "⚠️  {}個のアイテムが署名に含まれていません",
                        report.summary.failure_count()
                    );
                }
            }
        }
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
