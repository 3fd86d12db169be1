use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio_util::sync::CancellationToken;

use portsweep::config::{ScanArgs, ScanConfig};
use portsweep::progress::ConsoleProgress;
use portsweep::{init_tracing, render, session, ScanError};

/// portsweep — concurrent TCP connect port scanner with banner capture.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "portsweep",
    version,
    about = "Concurrent TCP connect port scanner with banner capture.",
    long_about = None
)]
struct Cli {
    /// Single target IP address or hostname.
    #[arg(long)]
    target: Option<String>,

    /// Comma-separated list of targets (overrides --target).
    #[arg(long)]
    targets: Option<String>,

    /// First port of the range.
    #[arg(long = "start-port", default_value_t = 1)]
    start_port: u16,

    /// Last port of the range (inclusive).
    #[arg(long = "end-port", default_value_t = 1024)]
    end_port: u16,

    /// Comma-separated list of specific ports (overrides --start-port/--end-port).
    #[arg(long)]
    ports: Option<String>,

    /// Number of concurrent workers per target.
    #[arg(long, default_value_t = 100)]
    workers: usize,

    /// Connection timeout in seconds.
    #[arg(long, default_value_t = 5)]
    timeout: u64,

    /// Print results as JSON after the scan.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let args = ScanArgs {
        target: cli.target.as_deref(),
        targets: cli.targets.as_deref(),
        ports: cli.ports.as_deref(),
        start_port: cli.start_port,
        end_port: cli.end_port,
        workers: cli.workers,
        timeout: Duration::from_secs(cli.timeout),
    };
    let config = match ScanConfig::resolve(&args) {
        Ok(c) => c,
        Err(e @ ScanError::MissingTarget) => {
            eprintln!("Error: {e}");
            let _ = Cli::command().print_help();
            return Err(e.into());
        }
        Err(e) => return Err(e).context("error parsing ports"),
    };

    // Ctrl-C stops handing out new ports and skips the remaining targets.
    let cancel = CancellationToken::new();
    let cancel_ctrlc = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_ctrlc.cancel();
        }
    });

    let session = session::run_session(&config, Arc::new(ConsoleProgress), cancel, |summary| {
        print!("{}", render::render_summary(summary));
    })
    .await;
    println!(
        "\nScanned {} of {} target(s), session started {}",
        session.summaries.len(),
        config.targets.len(),
        session.started_at
    );

    if cli.json {
        let json = render::render_json(&session.summaries).context("error marshaling JSON")?;
        println!("\nJSON Output:");
        println!("{json}");
    }

    Ok(())
}
