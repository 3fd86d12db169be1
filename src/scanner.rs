use crate::probe::Dialer;
use crate::progress::ProgressReporter;
use crate::types::{PortOutcome, ScanTask};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Raw outcomes of one target plus the wall-clock time from dispatch to the
/// last worker joining.
#[derive(Debug, Clone)]
pub struct TargetScan {
    pub outcomes: Vec<PortOutcome>,
    pub duration: Duration,
}

/// Scan every port of a single target with a fixed pool of `workers` tasks.
///
/// - Tasks are queued in `ports` order and pulled FIFO by the workers.
/// - Each outcome goes through an mpsc sink; the shared counter is bumped
///   atomically after every probe and forwarded to `reporter`.
/// - Returns once all workers have joined, with outcomes in completion order.
///
/// Always yields exactly `ports.len()` outcomes; an empty port list is a
/// trivial scan.
pub async fn scan_target(
    target: &str,
    ports: &[u16],
    workers: usize,
    dialer: Dialer,
    reporter: Arc<dyn ProgressReporter>,
) -> TargetScan {
    scan_target_with_cancel(
        target,
        ports,
        workers,
        dialer,
        reporter,
        CancellationToken::new(),
    )
    .await
}

/// Variant that accepts a `CancellationToken`.
///
/// Once cancelled, workers stop pulling new tasks; probes already in flight
/// still complete and are returned, so the result may hold fewer outcomes
/// than ports.
pub async fn scan_target_with_cancel(
    target: &str,
    ports: &[u16],
    workers: usize,
    dialer: Dialer,
    reporter: Arc<dyn ProgressReporter>,
    cancel: CancellationToken,
) -> TargetScan {
    let total = ports.len() as u64;
    let queue: VecDeque<ScanTask> = ports
        .iter()
        .map(|&port| ScanTask {
            target: target.to_string(),
            port,
        })
        .collect();
    let queue = Arc::new(Mutex::new(queue));
    let (tx, mut rx) = mpsc::channel::<PortOutcome>(ports.len().max(1));
    let progress = Arc::new(AtomicU64::new(0));

    // Surplus workers would only observe an empty queue.
    let workers = workers.clamp(1, ports.len().max(1));
    info!(target_host = target, ports = total, workers, "scanning target");

    let start = Instant::now();
    let mut set = JoinSet::new();
    for _ in 0..workers {
        let queue = queue.clone();
        let tx = tx.clone();
        let progress = progress.clone();
        let reporter = reporter.clone();
        let cancel = cancel.clone();

        set.spawn(async move {
            while let Some(task) = next_task(&queue, &cancel) {
                let outcome = dialer.probe(&task).await;
                if tx.send(outcome).await.is_err() {
                    break;
                }
                let done = progress.fetch_add(1, Ordering::Relaxed) + 1;
                reporter.report(&task.target, done, total);
            }
        });
    }

    while let Some(res) = set.join_next().await {
        if let Err(e) = res {
            warn!(target_host = target, error = %e, "scan worker failed");
        }
    }
    let duration = start.elapsed();

    // Workers have dropped their senders; dropping ours ends the stream.
    drop(tx);
    let mut outcomes = Vec::with_capacity(ports.len());
    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }

    info!(
        target_host = target,
        scanned = outcomes.len(),
        elapsed_ms = duration.as_millis() as u64,
        "target complete"
    );
    TargetScan { outcomes, duration }
}

fn next_task(queue: &Mutex<VecDeque<ScanTask>>, cancel: &CancellationToken) -> Option<ScanTask> {
    if cancel.is_cancelled() {
        return None;
    }
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .pop_front()
}
